//! Vertical merge of `#VJOIN` runs into the cell above

use crate::types::{Cell, Grid, Sentinel};
use std::collections::BTreeMap;

/// Collapse vertical `#VJOIN` runs into `/N.` directives.
///
/// Every non-`#VJOIN` row becomes the target for the run beneath it. Each
/// `#VJOIN` cell adds one to its column's count and is removed from its row,
/// so merged rows shrink. When the run ends, the target's cell in every
/// recorded column becomes `/{count + 1}.{value}`.
///
/// Row 0 never starts a run, even if it holds `#VJOIN`.
pub fn vertical_merge(grid: &mut Grid) {
    let mut merging = false;
    let mut target_row = 0usize;
    // column index → rows merged beneath the target
    let mut spans: BTreeMap<usize, usize> = BTreeMap::new();

    for row_idx in 0..grid.len() {
        let joins: Vec<usize> = grid[row_idx]
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is(Sentinel::VJoin))
            .map(|(col, _)| col)
            .collect();

        if row_idx > 0 && !joins.is_empty() {
            for &col in &joins {
                *spans.entry(col).or_insert(0) += 1;
            }
            // Remove right to left so earlier indices stay valid
            let row = &mut grid[row_idx];
            for &col in joins.iter().rev() {
                row.remove(col);
            }
            merging = true;
        } else {
            if merging {
                close_run(grid, target_row, &spans);
                spans.clear();
                merging = false;
            }
            target_row = row_idx;
        }
    }

    if merging {
        close_run(grid, target_row, &spans);
    }
}

fn close_run(grid: &mut Grid, target_row: usize, spans: &BTreeMap<usize, usize>) {
    let row = &mut grid[target_row];
    for (&col, &merged) in spans {
        match row.get_mut(col) {
            Some(cell) => {
                *cell = Cell::Text(format!("/{}.{}", merged + 1, cell.as_str()));
            }
            None => tracing::warn!(
                row = target_row,
                column = col,
                "vertical merge target has no cell in this column, skipping"
            ),
        }
    }
    tracing::debug!(row = target_row, columns = spans.len(), "closed vertical merge");
}
