use super::*;
use crate::core::types::ResultRow;

fn installed(ids: &[&str]) -> HashSet<String> {
    ids.iter().map(|s| s.to_string()).collect()
}

fn package(entry: &SearchEntry) -> &ResultRow {
    match entry {
        SearchEntry::Package(row) => row,
        other => panic!("expected package, got {:?}", other),
    }
}

#[test]
fn parses_installed_app() {
    let entries = parse_search(
        "GIMP\tImage editor\torg.gimp.GIMP\t2.10\tstable\tflathub",
        &installed(&["org.gimp.GIMP"]),
    );
    assert_eq!(
        entries,
        vec![SearchEntry::Package(row("GIMP", "2.10", "flathub/stable", true))]
    );
}

#[test]
fn app_missing_from_installed_set() {
    let entries = parse_search(
        "Inkscape\tVector graphics\torg.inkscape.Inkscape\t1.3.2\tstable\tflathub\n",
        &installed(&["org.gimp.GIMP"]),
    );
    assert!(!package(&entries[0]).installed);
}

#[test]
fn five_columns_use_branch_as_origin() {
    let entries = parse_search("GIMP\tImage editor\torg.gimp.GIMP\t2.10\tbeta", &HashSet::new());
    assert_eq!(package(&entries[0]).origin, "beta");
}

#[test]
fn single_column_lines_pass_through() {
    let entries = parse_search("No matches found\n", &HashSet::new());
    assert_eq!(
        entries,
        vec![SearchEntry::Passthrough("No matches found".to_string())]
    );
}

#[test]
fn partial_rows_are_skipped() {
    let entries = parse_search("GIMP\tImage editor\torg.gimp.GIMP\n", &HashSet::new());
    assert!(entries.is_empty());
}

#[test]
fn installed_list_uses_second_column() {
    let raw = "\
GNU Image Manipulation Program\torg.gimp.GIMP\t2.10.36\tstable\tsystem
Freedesktop Platform\torg.freedesktop.Platform\t23.08.10\t23.08\tsystem
broken-line
";
    let ids = parse_installed(raw);
    assert_eq!(ids, installed(&["org.gimp.GIMP", "org.freedesktop.Platform"]));
}

#[test]
fn fallback_recovers_app_id_from_short_rows() {
    let raw = "GIMP\tImage editor\torg.gimp.GIMP\n\nLoose\tline\n";
    let rows = fallback_rows(raw);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][2], "org.gimp.GIMP");
    assert_eq!(rows[1][2], "");
    assert!(rows.iter().all(|r| r.len() == TABLE_HEADERS.len()));
}

#[test]
fn fallback_keeps_wide_rows() {
    let rows = fallback_rows("a\tb\tc.d.e\t1\tstable\tflathub\textra");
    assert_eq!(rows, vec![vec!["a", "b", "c.d.e", "1", "stable", "flathub"]]);
}
