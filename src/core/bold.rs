//! Bold styling for leading rows and columns

use crate::error::{RedtableError, RedtableResult};
use crate::types::{is_string_line, Cell, Grid};

/// Wrap a cell in bold markers unless it is blank, a control token, or
/// already bold.
fn embolden(cell: &mut Cell) {
    if cell.is_bold() || cell.is_blank() || cell.is_control() {
        return;
    }
    let bold = format!("*{}*", cell.as_str().trim());
    *cell = Cell::Text(bold);
}

/// Bold the first `count` rows, starting at the first row that is not a
/// literal `#STR` line. Literal lines inside the window keep their content.
pub fn bold_rows(count: usize, grid: &mut Grid) {
    if count == 0 {
        return;
    }
    let Some(start) = grid.iter().position(|row| !is_string_line(row)) else {
        return;
    };
    let end = (start + count).min(grid.len());

    for row in &mut grid[start..end] {
        if is_string_line(row) {
            continue;
        }
        row.iter_mut().for_each(embolden);
    }
    tracing::debug!(start, end, "bolded rows");
}

/// Bold the first `count` cells of every row except literal `#STR` lines.
///
/// A row narrower than `count` is an error; vertical merging has not run yet
/// so every row still has its sheet width.
pub fn bold_columns(count: usize, grid: &mut Grid) -> RedtableResult<()> {
    if count == 0 {
        return Ok(());
    }
    for (row_idx, row) in grid.iter_mut().enumerate() {
        if is_string_line(row) {
            continue;
        }
        if row.len() < count {
            return Err(RedtableError::BoldColumnsOutOfRange {
                row: row_idx,
                width: row.len(),
                requested: count,
            });
        }
        row[..count].iter_mut().for_each(embolden);
    }
    tracing::debug!(count, "bolded columns");
    Ok(())
}
