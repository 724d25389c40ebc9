//! Table splitter - one sheet → independent sub-tables

use crate::types::{row_contains, Grid, Sentinel};

/// Split a sheet into sub-tables at `#HSPLIT` rows.
///
/// The split row stays in the sub-table it closes; its marker is stripped
/// later by the table renderer. Rows after the last split row form a final
/// sub-table. An empty grid yields no sub-tables.
pub fn split_tables(grid: Grid) -> Vec<Grid> {
    let mut tables = Vec::new();
    let mut current = Grid::new();

    for row in grid {
        let closes_table = row_contains(&row, Sentinel::HSplit);
        current.push(row);
        if closes_table {
            tables.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        tables.push(current);
    }

    tracing::debug!(tables = tables.len(), "split sheet");
    tables
}
