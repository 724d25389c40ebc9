//! Spreadsheet input
//!
//! Reads .xlsx, .xlsm, .xlsb, .xls and .ods workbooks through calamine and
//! hands the conversion pipeline a grid of string cells.

mod importer;

pub use importer::{cell_to_string, range_to_grid, SheetReader, SUPPORTED_EXTENSIONS};
