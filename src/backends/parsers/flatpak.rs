//! `flatpak search` and `flatpak list` output
//!
//! Both commands print tab-separated columns when stdout is not a terminal:
//!
//! ```text
//! GIMP	Image editor	org.gimp.GIMP	2.10.36	stable	flathub
//! ```

use super::row;
use crate::core::types::SearchEntry;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Name, Description, Application ID, Version, Branch (Remote optional)
const MIN_SEARCH_FIELDS: usize = 5;

pub const TABLE_HEADERS: [&str; 6] = [
    "Name",
    "Description",
    "Application ID",
    "Version",
    "Branch",
    "Origin",
];

/// Reverse-DNS application ID such as `org.gimp.GIMP`
static APP_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*(\.[A-Za-z0-9_-]+){2,}$").expect("Invalid regex pattern")
});

fn fields(line: &str) -> Vec<&str> {
    line.split('\t').map(str::trim).collect()
}

/// Parse search output, marking apps whose ID is in `installed`.
///
/// Single-column lines ("No matches found") are passed through verbatim.
pub fn parse_search(raw: &str, installed: &HashSet<String>) -> Vec<SearchEntry> {
    let mut entries = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let parts = fields(line);
        if parts.len() >= MIN_SEARCH_FIELDS {
            let (name, app_id, version, branch) = (parts[0], parts[2], parts[3], parts[4]);
            let origin = match parts.get(5) {
                Some(remote) if !remote.is_empty() => format!("{}/{}", remote, branch),
                _ => branch.to_string(),
            };
            entries.push(SearchEntry::Package(row(
                name,
                version,
                &origin,
                installed.contains(app_id),
            )));
        } else if parts.len() == 1 {
            entries.push(SearchEntry::Passthrough(parts[0].to_string()));
        }
    }

    entries
}

/// Application IDs from `flatpak list` (second column)
pub fn parse_installed(raw: &str) -> HashSet<String> {
    raw.lines()
        .filter_map(|line| {
            let parts = fields(line);
            match parts.get(1) {
                Some(id) if !id.is_empty() => Some(id.to_string()),
                _ => None,
            }
        })
        .collect()
}

/// Rows for the table shown when search output has too few columns to parse.
///
/// Rows with six or more columns are kept as-is; rows with two to five keep
/// name and description and recover the application ID when one of the
/// columns looks like one.
pub fn fallback_rows(raw: &str) -> Vec<Vec<String>> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let parts = fields(line);
            if parts.len() >= TABLE_HEADERS.len() {
                return Some(parts[..TABLE_HEADERS.len()].iter().map(|s| s.to_string()).collect());
            }
            if parts.len() < 2 {
                return None;
            }

            let app_id = parts
                .iter()
                .find(|p| APP_ID.is_match(p))
                .copied()
                .unwrap_or("");
            Some(vec![
                parts[0].to_string(),
                parts[1].to_string(),
                app_id.to_string(),
                String::new(),
                String::new(),
                String::new(),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests;
