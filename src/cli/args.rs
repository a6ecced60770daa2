use crate::project_identity;
use crate::ui::ColorMode;
use crate::utils::machine_output::OutputFormat;
use clap::{ArgGroup, Parser};
use clap_complete::Shell;

const EXAMPLES: &str = "\
Examples:
  anypkg -s firefox                # Search for firefox (asks which alternatives to include)
  anypkg -i firefox                # Install firefox (asks which package manager to use)
  anypkg -i firefox -so apt        # Install firefox using apt (case insensitive)
  anypkg -i firefox -so Flatpak    # Install firefox using Flatpak
  anypkg -u                        # Update all packages
  anypkg -r firefox                # Remove firefox (asks which package manager to use)
  anypkg -r firefox -so pacman     # Remove firefox specifically with pacman
  anypkg -l                        # List package managers available on this system
  anypkg -s lutris -so flatpak     # Search for lutris only in flatpak
  anypkg -i neofetch -so yay       # Install neofetch using the yay AUR helper";

#[derive(Parser, Debug)]
#[command(
    name = project_identity::BINARY_NAME,
    about = "Unified package manager interface",
    override_usage = "anypkg (-h | -u | -i | -r | -s | -l) [-so SOURCE] <packages...>",
    version,
    after_help = EXAMPLES,
    next_line_help = false,
    term_width = 80,
    group(
        ArgGroup::new("action")
            .required(true)
            .args(["update", "install", "remove", "search", "list", "completions"])
    )
)]
pub struct Cli {
    /// Update all packages
    #[arg(short = 'u', long)]
    pub update: bool,

    /// Install packages
    #[arg(short = 'i', long)]
    pub install: bool,

    /// Remove packages
    #[arg(short = 'r', long)]
    pub remove: bool,

    /// Search for packages
    #[arg(short = 's', long)]
    pub search: bool,

    /// List available package managers
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Print a shell completion script
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Package manager to use (also -so). Without it, anypkg asks which ones to use
    #[arg(long, value_name = "SOURCE")]
    pub source: Option<String>,

    /// Packages to operate on
    #[arg(value_name = "PACKAGES")]
    pub packages: Vec<String>,

    #[command(flatten)]
    pub global: GlobalFlags,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// When to use colors (overrides settings.kdl)
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Output format for --search and --list
    #[arg(long, value_enum, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,
}
