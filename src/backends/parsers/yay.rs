//! `yay -Ss` output
//!
//! ```text
//! aur/yay-bin 12.3.5-1 (+180 4.21) (Installed: 12.3.1-1)
//!     Yet another yogurt. Pacman wrapper and AUR helper written in go.
//! ```

use super::{row, split_slash};
use crate::core::types::ResultRow;

const INSTALLED_MARKERS: &[&str] = &["(Installed:", "(Installed)", "[installed]"];

pub fn parse_search(raw: &str) -> Vec<ResultRow> {
    raw.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<ResultRow> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }

    let (repo_pkg, rest) = line.split_once(' ')?;
    let version = rest.split_whitespace().next()?;
    let (repo, pkg) = split_slash(repo_pkg);
    let installed = INSTALLED_MARKERS.iter().any(|m| line.contains(m));

    Some(row(pkg, version, repo, installed))
}
