use crate::cli::args::Cli;
use crate::commands;
use crate::core::types::{Action, OperationRequest};
use crate::error::Result;
use crate::packages::Dispatcher;
use crate::ui;
use crate::utils::machine_output::OutputFormat;

/// The action selected on the command line; `None` for `--completions`
pub fn action(cli: &Cli) -> Option<Action> {
    if cli.search {
        Some(Action::Search)
    } else if cli.install {
        Some(Action::Install)
    } else if cli.update {
        Some(Action::Update)
    } else if cli.remove {
        Some(Action::Remove)
    } else if cli.list {
        Some(Action::List)
    } else {
        None
    }
}

pub fn request(cli: &Cli) -> Option<OperationRequest> {
    action(cli)
        .map(|action| OperationRequest::new(action, cli.packages.clone(), cli.source.clone()))
}

/// Route a parsed request to its command, returning the exit status
pub fn dispatch(
    request: &OperationRequest,
    dispatcher: &Dispatcher,
    format: OutputFormat,
) -> Result<i32> {
    let source = request.source.as_deref();

    if !request.action.takes_packages() && !request.packages.is_empty() {
        ui::warning(&format!(
            "Ignoring package arguments for {}: {}",
            request.action,
            request.packages.join(", ")
        ));
    }
    if format.is_machine() && !matches!(request.action, Action::Search | Action::List) {
        ui::warning(&format!("--format only applies to search and list, not {}", request.action));
    }

    match request.action {
        Action::Search => commands::search::run(dispatcher, &request.packages, source, format),
        Action::Install => commands::install::run(dispatcher, &request.packages, source),
        Action::Remove => commands::remove::run(dispatcher, &request.packages, source),
        Action::Update => commands::update::run(dispatcher, source),
        Action::List => commands::list::run(dispatcher, source, format),
    }
}
