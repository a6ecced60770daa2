use super::*;

#[test]
fn parses_installed_automatic_package() {
    let rows = parse_search("vim/stable 2:8.2.0-1 amd64 [installed,automatic]");
    assert_eq!(rows, vec![row("vim", "2:8.2.0-1", "stable", true)]);
}

#[test]
fn parses_realistic_listing() {
    let raw = "\
WARNING: apt does not have a stable CLI interface. Use with caution in scripts.

vim/stable 2:9.0.1378-2 amd64 [installed]
  Vi IMproved - enhanced vi editor

vim-tiny/stable 2:9.0.1378-2 amd64
  Vi IMproved - enhanced vi editor - compact version
";
    let rows = parse_search(raw);
    assert_eq!(
        rows,
        vec![
            row("vim", "2:9.0.1378-2", "stable", true),
            row("vim-tiny", "2:9.0.1378-2", "stable", false),
        ]
    );
}

#[test]
fn upgradable_marker_counts_as_installed() {
    let rows = parse_search(
        "curl/jammy-updates 7.81.0-1ubuntu1.15 amd64 [installed,upgradable to: 7.81.0-1ubuntu1.16]",
    );
    assert_eq!(rows.len(), 1);
    assert!(rows[0].installed);
    assert_eq!(rows[0].origin, "jammy-updates");
}

#[test]
fn skips_punctuation_lines_without_slash() {
    assert!(parse_search("...\n  \n").is_empty());
}

#[test]
fn colon_in_first_ten_chars_is_skipped() {
    assert!(parse_search("N: Unable to locate package").is_empty());
}

#[test]
fn bare_token_has_empty_version() {
    let rows = parse_search("vim/stable");
    assert_eq!(rows, vec![row("vim", "", "stable", false)]);
}
