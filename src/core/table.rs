//! Table and sheet renderers

use crate::core::bold::{bold_columns, bold_rows};
use crate::core::line::render_line;
use crate::core::splitter::split_tables;
use crate::core::vertical_merge::vertical_merge;
use crate::error::RedtableResult;
use crate::types::{Grid, HSPLIT_TOKEN};

/// Render one sub-table: bold rows, bold columns, vertical merge, then every
/// row as a line.
///
/// Rows left holding only blank cells after vertical merging render as a
/// bare `|`; those lines are collapsed away before the split markers are
/// stripped.
pub fn render_table(
    mut grid: Grid,
    bold_row_count: usize,
    bold_column_count: usize,
) -> RedtableResult<String> {
    bold_rows(bold_row_count, &mut grid);
    bold_columns(bold_column_count, &mut grid)?;
    vertical_merge(&mut grid);

    let mut markup: String = grid.iter_mut().map(|row| render_line(row)).collect();

    while markup.contains("|\n|\n") {
        markup = markup.replace("|\n|\n", "|\n\n");
        markup = markup.replace("\n\n", "\n");
    }

    Ok(markup.replace(HSPLIT_TOKEN, ""))
}

/// Render already split sub-tables and concatenate them in order
pub fn render_tables(
    tables: Vec<Grid>,
    bold_row_count: usize,
    bold_column_count: usize,
) -> RedtableResult<String> {
    let mut markup = String::new();
    for (idx, table) in tables.into_iter().enumerate() {
        tracing::debug!(table = idx, rows = table.len(), "rendering table");
        markup.push_str(&render_table(table, bold_row_count, bold_column_count)?);
    }
    Ok(markup)
}

/// Split a sheet at `#HSPLIT` rows and render each sub-table
pub fn render_sheet(
    grid: Grid,
    bold_row_count: usize,
    bold_column_count: usize,
) -> RedtableResult<String> {
    render_tables(split_tables(grid), bold_row_count, bold_column_count)
}
