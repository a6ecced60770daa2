//! Default backend selection when no source is given

use crate::backends::{AvailabilitySet, Backend};
use crate::core::types::Action;
use crate::error::{AnypkgError, Result};
use crate::traits::Prompter;

/// Question asked before involving an alternative backend
pub fn question(action: Action, backend: Backend) -> String {
    match (action, backend) {
        (Action::Install, Backend::Flatpak) => {
            "Install from Flatpak instead of native package manager?".to_string()
        }
        (Action::Remove, Backend::Flatpak) => {
            "Remove from Flatpak instead of native package manager?".to_string()
        }
        (Action::Install, b) => format!(
            "Install using {} instead of native package manager?",
            b.display_name()
        ),
        (Action::Remove, b) => format!(
            "Remove using {} instead of native package manager?",
            b.display_name()
        ),
        (Action::Search, b) => format!("Include {} in the search process?", b.display_name()),
        (_, b) => format!("Include {} in the update process?", b.display_name()),
    }
}

/// Whether an alternative backend takes part. Asked only when a system
/// backend exists; without one, every detected alternative is used.
fn include(
    available: &AvailabilitySet,
    backend: Backend,
    action: Action,
    prompter: &dyn Prompter,
) -> bool {
    if !available.contains(backend) {
        return false;
    }
    if !available.has_system() {
        return true;
    }
    prompter.confirm(&question(action, backend))
}

/// Targets for search and update: every system backend, then yay, then
/// flatpak. Flatpak is asked about first.
pub fn with_alternatives(
    available: &AvailabilitySet,
    action: Action,
    prompter: &dyn Prompter,
) -> Vec<Backend> {
    let flatpak = include(available, Backend::Flatpak, action, prompter);
    let yay = include(available, Backend::Yay, action, prompter);

    let mut targets: Vec<Backend> = available.system().collect();
    if yay {
        targets.push(Backend::Yay);
    }
    if flatpak {
        targets.push(Backend::Flatpak);
    }
    targets
}

/// The one backend install or remove runs against
pub fn single_target(
    available: &AvailabilitySet,
    action: Action,
    prompter: &dyn Prompter,
) -> Result<Backend> {
    let Some(system) = available.first_system() else {
        return available
            .alternatives()
            .next()
            .ok_or_else(|| AnypkgError::NoBackendAvailable(action.to_string()));
    };

    for alternative in [Backend::Flatpak, Backend::Yay] {
        if available.contains(alternative) && prompter.confirm(&question(action, alternative)) {
            return Ok(alternative);
        }
    }

    Ok(system)
}
