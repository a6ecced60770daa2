//! `apt search` output
//!
//! ```text
//! vim/stable 2:9.0.1378-2 amd64 [installed]
//!   Vi IMproved - enhanced vi editor
//! ```

use super::row;
use crate::core::types::ResultRow;

const INSTALLED_MARKER: &str = "[installed";

pub fn parse_search(raw: &str) -> Vec<ResultRow> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| looks_like_package(line))
        .filter_map(parse_line)
        .collect()
}

fn looks_like_package(line: &str) -> bool {
    if line.starts_with(char::is_whitespace) {
        return false;
    }
    // "WARNING: apt does not have a stable CLI interface..."
    if line.chars().take(10).any(|c| c == ':') {
        return false;
    }
    let alnum_start = line.chars().next().is_some_and(|c| c.is_alphanumeric());
    line.contains('/') || alnum_start
}

fn parse_line(line: &str) -> Option<ResultRow> {
    let (pkg_repo, rest) = match line.split_once(' ') {
        Some((head, rest)) => (head.trim(), rest.trim()),
        None => (line.trim(), ""),
    };
    if pkg_repo.is_empty() {
        return None;
    }

    let (pkg, repo) = match pkg_repo.split_once('/') {
        Some((pkg, repo)) => (pkg, repo),
        None => (pkg_repo, ""),
    };
    let version = rest.split_whitespace().next().unwrap_or("");

    Some(row(pkg, version, repo, rest.contains(INSTALLED_MARKER)))
}

#[cfg(test)]
mod tests;
