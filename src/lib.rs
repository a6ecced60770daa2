pub mod backends;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod packages;
pub mod project_identity;
pub mod traits;
pub mod ui;
pub mod utils;

use backends::{AvailabilitySet, CommandOptions, Detector};
use clap::Parser;
use config::Settings;
use error::{AnypkgError, Result};
use packages::{DispatchOptions, Dispatcher};
use std::ffi::OsString;
use std::process::exit;
use traits::Prompter;
use ui::prompt::{DeclineAll, TerminalPrompter};
use utils::process::SystemRunner;

/// Run anypkg CLI entrypoint.
pub fn run_cli() {
    exit(run_with_args(std::env::args_os()));
}

/// Parse `args` and run the requested action, returning the exit status
pub fn run_with_args<I>(args: I) -> i32
where
    I: IntoIterator<Item = OsString>,
{
    // 1. Parse; `-so` has to be rewritten first
    let cli = match cli::Cli::try_parse_from(cli::normalization::normalize_args(args)) {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too, with status 0
            let _ = e.print();
            return e.exit_code();
        }
    };

    if let Some(shell) = cli.completions {
        return commands::completions::run(shell);
    }

    // 2. Settings, then CLI overrides
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            ui::init_colors(cli.global.color.unwrap_or_default());
            ui::error(&e.to_string());
            return e.exit_code();
        }
    };
    ui::init_colors(cli.global.color.unwrap_or(settings.color));
    ui::set_quiet(cli.global.quiet || cli.global.format.is_machine());
    ui::set_verbose(cli.global.verbose || settings.verbose);
    if let Ok(path) = utils::paths::settings_file()
        && path.exists()
    {
        ui::verbose(&format!("Loaded settings from {}", path.display()));
    }

    // 3. Signal handling: prompts read this as "no", runs abort with 130
    ctrlc::set_handler(move || {
        eprintln!();
        ui::mark_interrupted();
        ui::warning("Operation cancelled by user");
    })
    .expect("Error setting Ctrl-C handler");

    // 4. Elevation is requested per command, never for the whole tool
    if utils::privilege::running_elevated() {
        ui::error(&AnypkgError::AlreadyElevated.to_string());
        ui::error("Elevation will be requested automatically when needed");
        return AnypkgError::AlreadyElevated.exit_code();
    }

    match execute(&cli, &settings) {
        Ok(code) => code,
        Err(AnypkgError::Interrupted) => AnypkgError::Interrupted.exit_code(),
        Err(e) => {
            ui::error(&e.to_string());
            e.exit_code()
        }
    }
}

fn execute(cli: &cli::Cli, settings: &Settings) -> Result<i32> {
    let Some(request) = cli::dispatcher::request(cli) else {
        return Ok(0);
    };

    let detector = if settings.probe_fallback {
        Detector::default()
    } else {
        Detector::path_only()
    };
    let available = AvailabilitySet::detect(&detector);

    let runner = SystemRunner::new(settings.elevation_argv()?);
    let prompter: Box<dyn Prompter> = if cli.global.format.is_machine() {
        Box::new(DeclineAll)
    } else {
        Box::new(TerminalPrompter)
    };
    let options = DispatchOptions {
        commands: CommandOptions {
            flatpak_remote: settings.flatpak_remote.clone(),
        },
        pacing: settings.pacing(),
    };

    let dispatcher = Dispatcher::new(available, Box::new(runner), prompter, options);
    cli::dispatcher::dispatch(&request, &dispatcher, cli.global.format)
}
