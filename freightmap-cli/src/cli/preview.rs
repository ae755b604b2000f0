//! Plain-text table preview of the first result rows

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::transfer::Table;

const MAX_CELL_WIDTH: usize = 24;
const COLUMN_GAP: &str = "  ";

/// Render the header and the first `limit` rows as aligned lines.
/// The first line is the header, the second a rule.
pub fn render_preview(table: &Table, limit: usize) -> Vec<String> {
    let shown = &table.rows[..limit.min(table.rows.len())];

    let cells: Vec<Vec<String>> = shown
        .iter()
        .map(|row| row.iter().map(|v| fit(&v.to_string(), MAX_CELL_WIDTH)).collect())
        .collect();
    let header: Vec<String> = table
        .columns
        .iter()
        .map(|c| fit(c, MAX_CELL_WIDTH))
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            cells
                .iter()
                .map(|row| row[idx].width())
                .chain(std::iter::once(name.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(shown.len() + 3);
    lines.push(join_padded(&header, &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP),
    );
    for row in &cells {
        lines.push(join_padded(row, &widths));
    }

    let hidden = table.rows.len() - shown.len();
    if hidden > 0 {
        lines.push(format!("... {} more rows", hidden));
    }

    lines
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

/// Truncate to at most `max` display columns, marking cuts with an ellipsis
fn fit(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
