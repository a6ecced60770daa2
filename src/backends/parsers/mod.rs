//! Search output parsers, one per backend
//!
//! Every parser turns the manager's own text format into [`ResultRow`]s.
//! Lines that do not fit the expected shape are skipped, never reported as
//! errors: manager output drifts between versions and a partial listing is
//! more useful than none. Callers fall back to the raw text when nothing
//! parses at all.

pub mod apt;
pub mod flatpak;
pub mod pacman;
pub mod yay;
pub mod zypper;

use super::Backend;
use crate::core::types::{ResultRow, SearchEntry};
use std::collections::HashSet;

/// Extra information some parsers need
#[derive(Debug, Clone, Default)]
pub struct ParseContext {
    /// Application IDs from `flatpak list`
    pub installed_apps: HashSet<String>,
}

/// Parse `raw` search output from `backend`
pub fn parse_search_output(backend: Backend, raw: &str, ctx: &ParseContext) -> Vec<SearchEntry> {
    let rows = match backend {
        Backend::Pacman => pacman::parse_search(raw),
        Backend::Apt => apt::parse_search(raw),
        Backend::Zypper => zypper::parse_search(raw),
        Backend::Yay => yay::parse_search(raw),
        Backend::Flatpak => return flatpak::parse_search(raw, &ctx.installed_apps),
    };

    rows.into_iter().map(SearchEntry::Package).collect()
}

/// Split `repo/pkg` (or `pkg/repo`) on the first slash
pub(crate) fn split_slash(token: &str) -> (&str, &str) {
    token.split_once('/').unwrap_or(("", token))
}

/// Count the package rows in a parse result
pub fn package_count(entries: &[SearchEntry]) -> usize {
    entries
        .iter()
        .filter(|e| matches!(e, SearchEntry::Package(_)))
        .count()
}

pub(crate) fn row(name: &str, version: &str, origin: &str, installed: bool) -> ResultRow {
    ResultRow::new(name, version, origin, installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_to_the_matching_parser() {
        let ctx = ParseContext::default();
        let entries = parse_search_output(
            Backend::Pacman,
            "extra/firefox 120.0-1 [installed]\n    Web browser\n",
            &ctx,
        );
        assert_eq!(
            entries,
            vec![SearchEntry::Package(row("firefox", "120.0-1", "extra", true))]
        );
    }

    #[test]
    fn garbage_yields_nothing() {
        let ctx = ParseContext::default();
        for backend in [Backend::Pacman, Backend::Zypper, Backend::Yay] {
            let entries = parse_search_output(backend, "   \n   indented only\n", &ctx);
            assert_eq!(package_count(&entries), 0, "{}", backend);
        }
    }

    #[test]
    fn split_slash_without_slash_has_empty_head() {
        assert_eq!(split_slash("extra/firefox"), ("extra", "firefox"));
        assert_eq!(split_slash("a/b/c"), ("a", "b/c"));
        assert_eq!(split_slash("firefox"), ("", "firefox"));
    }
}
