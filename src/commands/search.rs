use crate::backends::parsers::flatpak;
use crate::core::types::{ResultRow, SearchEntry};
use crate::error::Result;
use crate::packages::{Dispatcher, SearchOutcome, SearchReport};
use crate::ui;
use crate::ui::table;
use crate::utils::machine_output::{self, OutputFormat};
use colored::Colorize;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SearchData<'a> {
    query: &'a [String],
    results: Vec<SearchReport>,
}

pub fn run(
    dispatcher: &Dispatcher,
    packages: &[String],
    source: Option<&str>,
    format: OutputFormat,
) -> Result<i32> {
    if format.is_machine() {
        return run_machine(dispatcher, packages, source, format);
    }

    ui::header("Package Search");

    let mut failures = 0;
    dispatcher.search(packages, source, &mut |report: SearchReport| {
        if matches!(report.outcome, SearchOutcome::Failed { .. }) {
            failures += 1;
        }
        display(&report);
    })?;

    Ok(if failures == 0 { 0 } else { 1 })
}

fn run_machine(
    dispatcher: &Dispatcher,
    packages: &[String],
    source: Option<&str>,
    format: OutputFormat,
) -> Result<i32> {
    let mut results = Vec::new();
    dispatcher.search(packages, source, &mut |report| results.push(report))?;

    let errors = failure_messages(&results);
    let status = if errors.is_empty() { 0 } else { 1 };
    let data = SearchData {
        query: packages,
        results,
    };
    machine_output::emit_v1("search", data, Vec::new(), errors, format)?;

    Ok(status)
}

fn failure_messages(results: &[SearchReport]) -> Vec<String> {
    results
        .iter()
        .filter_map(|r| match &r.outcome {
            SearchOutcome::Failed { code, message } => Some(failure_line(r, *code, message)),
            _ => None,
        })
        .collect()
}

fn failure_line(report: &SearchReport, code: Option<i32>, message: &str) -> String {
    let base = match code {
        Some(code) => format!("{}: search failed with exit code {}", report.backend, code),
        None => format!("{}: search failed", report.backend),
    };
    if message.is_empty() {
        base
    } else {
        format!("{}: {}", base, message)
    }
}

fn display(report: &SearchReport) {
    match &report.outcome {
        SearchOutcome::Entries { entries } => {
            for entry in entries {
                println!("{}", format_entry(entry));
            }
            ui::success("Search completed");
        }
        SearchOutcome::Table { rows } => {
            table::print_table(&flatpak::TABLE_HEADERS, rows);
            ui::success("Search completed");
        }
        SearchOutcome::Raw { output } => {
            println!("{}", output.trim_end());
            ui::success("Search completed");
        }
        SearchOutcome::NoMatches => ui::warning("No packages found"),
        SearchOutcome::Failed { code, message } => {
            match code {
                Some(code) => ui::error(&format!("Search failed with exit code {}", code)),
                None => ui::error("Search failed"),
            }
            if !message.is_empty() {
                eprintln!("{}", message.red());
            }
        }
    }
}

fn format_entry(entry: &SearchEntry) -> String {
    match entry {
        SearchEntry::Package(row) => format_row(row),
        SearchEntry::Passthrough(line) => line.clone(),
    }
}

/// `name version origin [-i]`
pub fn format_row(row: &ResultRow) -> String {
    let mut line = format!(
        "{} {} {}",
        row.name.bold(),
        row.version.green(),
        row.origin.yellow()
    );
    if row.installed {
        line.push_str(&format!(" {}", "-i".red()));
    }
    line
}
