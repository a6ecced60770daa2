use colored::Colorize;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

pub mod prompt;
pub mod table;

static QUIET: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicBool = AtomicBool::new(false);
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(format!(
                "Invalid color mode '{}'. Valid: auto, always, never",
                other
            )),
        }
    }
}

/// Apply the color mode. Must run before anything is printed.
pub fn init_colors(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {
            if !atty::is(atty::Stream::Stdout) {
                colored::control::set_override(false);
            }
        }
    }
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Record a Ctrl-C. Called from the signal handler thread.
pub fn mark_interrupted() {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Consume a pending interrupt, returning whether one was recorded
pub fn take_interrupted() -> bool {
    INTERRUPTED.swap(false, Ordering::SeqCst)
}

pub fn header(title: &str) {
    if is_quiet() {
        return;
    }
    println!("\n{}", title.bold().underline());
}

pub fn step(msg: &str) {
    if is_quiet() {
        return;
    }
    println!("\n{} {}", ">".blue().bold(), msg.bold());
}

pub fn success(msg: &str) {
    if is_quiet() {
        return;
    }
    println!("{} {}", "✓".green().bold(), msg);
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

/// Echo a command line before it runs
pub fn command(cmd: &str) {
    if is_quiet() {
        return;
    }
    println!("  {} {}", "$".dimmed(), cmd.dimmed());
}

/// Diagnostic line, only shown with --verbose
pub fn verbose(msg: &str) {
    if !is_verbose() || is_quiet() {
        return;
    }
    println!("  {}", msg.dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mode_parses_case_insensitively() {
        assert_eq!("AUTO".parse::<ColorMode>(), Ok(ColorMode::Auto));
        assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
        assert!("sometimes".parse::<ColorMode>().is_err());
    }
}
