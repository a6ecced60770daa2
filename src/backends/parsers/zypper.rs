//! `zypper search -s` output
//!
//! ```text
//! S  | Name | Type    | Version   | Arch   | Repository
//! ---+------+---------+-----------+--------+-----------
//! i+ | vim  | package | 9.0.2103-1.1 | x86_64 | repo-oss
//! ```

use super::row;
use crate::core::types::ResultRow;

const MIN_FIELDS: usize = 6;

pub fn parse_search(raw: &str) -> Vec<ResultRow> {
    raw.lines().filter_map(parse_line).collect()
}

fn is_header_or_separator(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with('-') || line.contains("Status")
}

fn parse_line(line: &str) -> Option<ResultRow> {
    if is_header_or_separator(line) {
        return None;
    }

    let fields: Vec<&str> = line.split('|').map(str::trim).collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let (status, name, version, repo) = (fields[0], fields[1], fields[3], fields[5]);

    // Newer zypper labels the status column "S"
    if status == "S" && name == "Name" {
        return None;
    }

    Some(row(name, version, repo, status.contains('i')))
}
