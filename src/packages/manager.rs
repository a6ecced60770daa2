use super::reports::{ListReport, SearchOutcome, SearchReport, StepReport};
use super::selection;
use crate::backends::commands::{self, CommandOptions, Operation};
use crate::backends::parsers::{self, ParseContext, flatpak};
use crate::backends::{AvailabilitySet, Backend};
use crate::core::types::Action;
use crate::error::{AnypkgError, Result};
use crate::traits::{CommandRunner, Prompter};
use crate::ui;
use crate::utils::sanitize;
use std::thread;
use std::time::Duration;

pub const DEFAULT_PACING: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct DispatchOptions {
    pub commands: CommandOptions,
    /// Pause between consecutive update runs
    pub pacing: Duration,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            commands: CommandOptions::default(),
            pacing: DEFAULT_PACING,
        }
    }
}

/// Routes operations to the detected backends
pub struct Dispatcher {
    available: AvailabilitySet,
    runner: Box<dyn CommandRunner>,
    prompter: Box<dyn Prompter>,
    options: DispatchOptions,
}

impl Dispatcher {
    pub fn new(
        available: AvailabilitySet,
        runner: Box<dyn CommandRunner>,
        prompter: Box<dyn Prompter>,
        options: DispatchOptions,
    ) -> Self {
        Self {
            available,
            runner,
            prompter,
            options,
        }
    }

    pub fn available(&self) -> &AvailabilitySet {
        &self.available
    }

    /// Resolve `--source`; an unknown name fails before anything runs
    fn explicit_source(&self, source: Option<&str>) -> Result<Option<Backend>> {
        source.map(|raw| self.available.resolve(raw)).transpose()
    }

    /// Search every selected backend, handing each report to `on_report` as
    /// soon as that backend finishes
    pub fn search(
        &self,
        packages: &[String],
        source: Option<&str>,
        on_report: &mut dyn FnMut(SearchReport),
    ) -> Result<()> {
        let packages = sanitize::validate_package_names(packages)?;
        let targets = match self.explicit_source(source)? {
            Some(backend) => vec![backend],
            None => selection::with_alternatives(
                &self.available,
                Action::Search,
                self.prompter.as_ref(),
            ),
        };
        if targets.is_empty() {
            return Err(AnypkgError::NoBackendAvailable(Action::Search.to_string()));
        }

        let ctx = if targets.contains(&Backend::Flatpak) {
            self.flatpak_context()?
        } else {
            ParseContext::default()
        };

        for backend in targets {
            ui::step(&format!("Searching for {} using {}", packages.join(", "), backend));
            let outcome = self.search_one(backend, &packages, &ctx)?;
            on_report(SearchReport { backend, outcome });
        }

        Ok(())
    }

    fn search_one(
        &self,
        backend: Backend,
        packages: &[String],
        ctx: &ParseContext,
    ) -> Result<SearchOutcome> {
        let invocation =
            commands::invocation(backend, Operation::Search, packages, &self.options.commands)?;

        let output = match self.runner.run(&invocation) {
            Ok(output) => output,
            Err(AnypkgError::Interrupted) => return Err(AnypkgError::Interrupted),
            Err(e) => {
                return Ok(SearchOutcome::Failed {
                    code: None,
                    message: e.to_string(),
                });
            }
        };

        if !output.success() {
            return Ok(SearchOutcome::Failed {
                code: Some(output.code),
                message: output.stderr.trim().to_string(),
            });
        }

        if output.stdout.trim().is_empty() {
            return Ok(SearchOutcome::NoMatches);
        }

        let entries = parsers::parse_search_output(backend, &output.stdout, ctx);
        if parsers::package_count(&entries) > 0 {
            return Ok(SearchOutcome::Entries { entries });
        }

        if backend == Backend::Flatpak {
            let rows = flatpak::fallback_rows(&output.stdout);
            if !rows.is_empty() {
                return Ok(SearchOutcome::Table { rows });
            }
        }

        Ok(SearchOutcome::Raw { output: output.stdout })
    }

    /// Installed flatpak app IDs. Failure leaves the set empty.
    fn flatpak_context(&self) -> Result<ParseContext> {
        let failure = match self.runner.run(&commands::flatpak_installed_invocation()) {
            Ok(output) if output.success() => {
                return Ok(ParseContext {
                    installed_apps: flatpak::parse_installed(&output.stdout),
                });
            }
            Ok(output) => format!("exit code {}", output.code),
            Err(AnypkgError::Interrupted) => return Err(AnypkgError::Interrupted),
            Err(e) => e.to_string(),
        };

        ui::warning(&format!("Failed to get list of installed flatpaks: {}", failure));
        Ok(ParseContext::default())
    }

    pub fn install(&self, packages: &[String], source: Option<&str>) -> Result<Vec<StepReport>> {
        let packages = sanitize::validate_package_names(packages)?;
        let backend = match self.explicit_source(source)? {
            Some(backend) => backend,
            None => selection::single_target(
                &self.available,
                Action::Install,
                self.prompter.as_ref(),
            )?,
        };

        ui::step(&format!("Installing {} using {}", packages.join(", "), backend));
        Ok(vec![self.execute(backend, Operation::Install, &packages)?])
    }

    /// Remove packages. A successful flatpak removal is followed by one
    /// cleanup of unused runtimes.
    pub fn remove(&self, packages: &[String], source: Option<&str>) -> Result<Vec<StepReport>> {
        let packages = sanitize::validate_package_names(packages)?;
        let backend = match self.explicit_source(source)? {
            Some(backend) => backend,
            None => selection::single_target(
                &self.available,
                Action::Remove,
                self.prompter.as_ref(),
            )?,
        };

        ui::step(&format!("Removing {} using {}", packages.join(", "), backend));
        let removal = self.execute(backend, Operation::Remove, &packages)?;
        let cleanup_needed = backend == Backend::Flatpak && removal.success();
        let mut reports = vec![removal];

        if cleanup_needed {
            ui::step("Cleaning up unused Flatpak runtimes");
            reports.push(self.execute(Backend::Flatpak, Operation::Cleanup, &[])?);
        }

        Ok(reports)
    }

    /// Update every selected backend in turn. A failing backend does not stop
    /// the others.
    pub fn update(&self, source: Option<&str>) -> Result<Vec<StepReport>> {
        let targets = match self.explicit_source(source)? {
            Some(backend) => vec![backend],
            None => selection::with_alternatives(
                &self.available,
                Action::Update,
                self.prompter.as_ref(),
            ),
        };
        if targets.is_empty() {
            return Err(AnypkgError::NoBackendAvailable(Action::Update.to_string()));
        }

        let mut reports = Vec::with_capacity(targets.len());
        for (i, backend) in targets.into_iter().enumerate() {
            if self.runner.interrupted() {
                return Err(AnypkgError::Interrupted);
            }
            if i > 0 {
                self.pace();
            }

            if backend == Backend::Flatpak {
                ui::step("Updating Flatpak applications");
            } else {
                ui::step(&format!("Updating packages using {}", backend));
            }
            reports.push(self.execute(backend, Operation::Update, &[])?);
        }

        Ok(reports)
    }

    /// Detected backends. `--source` changes nothing but must still name
    /// an available backend.
    pub fn list(&self, source: Option<&str>) -> Result<ListReport> {
        self.explicit_source(source)?;
        Ok(ListReport {
            system: self.available.system().collect(),
            alternatives: self.available.alternatives().collect(),
            missing_alternatives: Backend::ALL
                .into_iter()
                .filter(|b| !b.is_system() && !self.available.contains(*b))
                .collect(),
        })
    }

    /// Run one interactive operation and report how it ended.
    ///
    /// Start failures become a failed report; only an interrupt aborts.
    fn execute(&self, backend: Backend, op: Operation, packages: &[String]) -> Result<StepReport> {
        let invocation = commands::invocation(backend, op, packages, &self.options.commands)?;

        let report = match self.runner.run(&invocation) {
            Ok(output) => StepReport::finished(backend, op, output.code),
            Err(AnypkgError::Interrupted) => return Err(AnypkgError::Interrupted),
            Err(e) => StepReport::not_started(backend, op, e.to_string()),
        };

        if report.success() {
            ui::success(&report.describe());
        } else {
            ui::error(&report.describe());
        }

        Ok(report)
    }

    fn pace(&self) {
        if !self.options.pacing.is_zero() {
            thread::sleep(self.options.pacing);
        }
    }
}
