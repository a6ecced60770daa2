//! Aligned plain-text tables
//!
//! Used for flatpak search output that does not match the expected column
//! layout closely enough to be shown as package lines.

use colored::Colorize;
use terminal_size::{Width, terminal_size};

const DEFAULT_TERM_WIDTH: usize = 80;
const MIN_COLUMN_WIDTH: usize = 4;
const ELLIPSIS: &str = "...";

pub fn terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_TERM_WIDTH)
}

/// Compute column widths: widest cell per column, capped so every column fits.
pub fn column_widths(headers: &[&str], rows: &[Vec<String>], term_width: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();

    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    if headers.is_empty() {
        return widths;
    }

    let cap = (term_width / headers.len())
        .saturating_sub(3)
        .max(MIN_COLUMN_WIDTH);
    widths.into_iter().map(|w| w.min(cap)).collect()
}

fn truncate(cell: &str, width: usize) -> String {
    if cell.chars().count() <= width {
        return cell.to_string();
    }
    let kept: String = cell.chars().take(width.saturating_sub(ELLIPSIS.len())).collect();
    format!("{}{}", kept, ELLIPSIS)
}

fn pad(cell: &str, width: usize) -> String {
    format!("{:<width$}", cell, width = width)
}

/// Render the table as plain lines: header, separator, then one line per row.
///
/// Returns nothing when there are no rows.
pub fn render_table(headers: &[&str], rows: &[Vec<String>], term_width: usize) -> Vec<String> {
    if rows.is_empty() {
        return Vec::new();
    }

    let widths = column_widths(headers, rows, term_width);

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| pad(h, widths[i]))
        .collect::<Vec<_>>()
        .join(" | ");
    let separator = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, separator];
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| match widths.get(i) {
                Some(&w) => pad(&truncate(cell, w), w),
                None => cell.clone(),
            })
            .collect();
        lines.push(cells.join(" | "));
    }

    lines
}

/// Print a table sized to the current terminal
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let lines = render_table(headers, rows, terminal_width());
    let mut iter = lines.into_iter();

    if let Some(header) = iter.next() {
        println!("{}", header.bold());
    }
    for line in iter {
        println!("{}", line);
    }
}
