//! Conversion pipeline: sheet grid → Redmine table markup

pub mod bold;
pub mod line;
pub mod splitter;
pub mod table;
pub mod vertical_merge;

pub use bold::{bold_columns, bold_rows};
pub use line::render_line;
pub use splitter::split_tables;
pub use table::{render_sheet, render_table, render_tables};
pub use vertical_merge::vertical_merge;

use crate::error::RedtableResult;
use crate::types::Grid;

/// Settings for one conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Leading rows to bold
    pub bold_rows: usize,
    /// Leading columns to bold
    pub bold_columns: usize,
    /// Render the whole grid as one table, skipping `#HSPLIT` splitting
    pub one_table: bool,
}

impl ConvertOptions {
    #[must_use]
    pub fn new(bold_rows: usize, bold_columns: usize) -> Self {
        Self {
            bold_rows,
            bold_columns,
            one_table: false,
        }
    }

    #[must_use]
    pub fn one_table(mut self, one_table: bool) -> Self {
        self.one_table = one_table;
        self
    }
}

/// Convert a whole sheet grid to Redmine markup
pub fn convert(grid: Grid, options: &ConvertOptions) -> RedtableResult<String> {
    tracing::info!(
        rows = grid.len(),
        bold_rows = options.bold_rows,
        bold_columns = options.bold_columns,
        one_table = options.one_table,
        "converting sheet"
    );
    if options.one_table {
        render_table(grid, options.bold_rows, options.bold_columns)
    } else {
        render_sheet(grid, options.bold_rows, options.bold_columns)
    }
}
