//! # Dispatch
//!
//! The [`Dispatcher`] owns the detected [`AvailabilitySet`] and decides which
//! backends an operation runs against:
//!
//! - an explicit `--source` selects exactly that backend, for every action
//! - otherwise [`selection`] applies the default policy, asking the user
//!   about flatpak and yay when a system backend is also present
//!
//! Processes are started through a [`CommandRunner`] and questions go through
//! a [`Prompter`], so the whole policy runs against fakes in tests.
//!
//! [`AvailabilitySet`]: crate::backends::AvailabilitySet
//! [`CommandRunner`]: crate::traits::CommandRunner
//! [`Prompter`]: crate::traits::Prompter

pub mod manager;
pub mod reports;
pub mod selection;

pub use manager::{DispatchOptions, Dispatcher};
pub use reports::{ListReport, SearchOutcome, SearchReport, StepReport};
