//! One module per action. Each prints its own output and returns the
//! process exit status.

pub mod completions;
pub mod install;
pub mod list;
pub mod remove;
pub mod search;
pub mod update;

use crate::packages::StepReport;

/// 0 when every step succeeded, 1 otherwise
pub(crate) fn exit_status(reports: &[StepReport]) -> i32 {
    if reports.iter().all(StepReport::success) { 0 } else { 1 }
}
