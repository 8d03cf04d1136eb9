// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Aligned column formatting for tabular output.

/// Column alignment for [`format_columns`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Format `rows` as aligned columns.
///
/// Every cell is padded to its column's widest entry, columns are joined
/// by two spaces, and trailing whitespace is trimmed per line. Columns
/// without an entry in `aligns` default to left alignment.
pub fn format_columns(rows: &[Vec<String>], aligns: &[Align]) -> Vec<String> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            // Width padding in `format!` counts chars, not bytes.
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    rows.iter()
        .map(|row| {
            let line = row
                .iter()
                .enumerate()
                .map(|(i, cell)| match aligns.get(i).copied().unwrap_or_default() {
                    Align::Left => format!("{cell:<width$}", width = widths[i]),
                    Align::Right => format!("{cell:>width$}", width = widths[i]),
                })
                .collect::<Vec<_>>()
                .join("  ");
            line.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
#[path = "columns_tests.rs"]
mod tests;
