use super::exit_status;
use crate::error::Result;
use crate::packages::Dispatcher;
use crate::ui;

pub fn run(dispatcher: &Dispatcher, packages: &[String], source: Option<&str>) -> Result<i32> {
    ui::header("Package Removal");
    let reports = dispatcher.remove(packages, source)?;
    Ok(exit_status(&reports))
}
