use super::exit_status;
use crate::error::Result;
use crate::packages::Dispatcher;
use crate::ui;

pub fn run(dispatcher: &Dispatcher, source: Option<&str>) -> Result<i32> {
    ui::header("System Update");
    let reports = dispatcher.update(source)?;

    let failed = reports.iter().filter(|r| !r.success()).count();
    if failed > 0 && reports.len() > 1 {
        ui::warning(&format!("{} of {} updates failed", failed, reports.len()));
    }

    Ok(exit_status(&reports))
}
