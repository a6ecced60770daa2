//! `pacman -Ss` output
//!
//! ```text
//! extra/firefox 120.0-1 [installed]
//!     Fast, Private & Safe Web Browser
//! ```

use super::{row, split_slash};
use crate::core::types::ResultRow;

const INSTALLED_MARKER: &str = "[installed]";

pub fn parse_search(raw: &str) -> Vec<ResultRow> {
    raw.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<ResultRow> {
    // Indented lines are package descriptions
    if line.starts_with(char::is_whitespace) {
        return None;
    }

    let mut tokens = line.split_whitespace();
    let repo_pkg = tokens.next()?;
    let version = tokens.next()?;
    let (repo, pkg) = split_slash(repo_pkg);

    Some(row(pkg, version, repo, line.contains(INSTALLED_MARKER)))
}
