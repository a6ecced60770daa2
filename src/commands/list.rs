use crate::backends::Backend;
use crate::error::Result;
use crate::packages::{Dispatcher, ListReport};
use crate::ui;
use crate::utils::machine_output::{self, OutputFormat};

pub fn run(dispatcher: &Dispatcher, source: Option<&str>, format: OutputFormat) -> Result<i32> {
    let report = dispatcher.list(source)?;

    if format.is_machine() {
        machine_output::emit_v1("list", &report, Vec::new(), Vec::new(), format)?;
    } else {
        display(&report);
    }

    Ok(0)
}

fn display(report: &ListReport) {
    ui::header("Available Package Managers");

    if report.is_empty() {
        ui::warning("No package managers detected on this system");
        return;
    }

    ui::step("System Package Managers:");
    if report.system.is_empty() {
        ui::warning("No native package managers detected");
    }
    for backend in &report.system {
        ui::success(backend.display_name());
    }

    ui::step("Alternative Package Managers:");
    for backend in Backend::ALL.into_iter().filter(|b| !b.is_system()) {
        if report.alternatives.contains(&backend) {
            ui::success(backend.display_name());
        } else {
            ui::warning(&format!("{} not detected", backend.display_name()));
        }
    }
}
