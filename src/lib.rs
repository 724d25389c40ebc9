//! Redtable - spreadsheet tables to Redmine markup
//!
//! This library converts a worksheet grid into Redmine (Textile) table
//! markup. Control cells embedded in the sheet drive the layout.
//!
//! # Features
//!
//! - Horizontal merges from runs of empty cells (`\N=.`)
//! - Vertical merges with `#VJOIN` cells (`/N.`)
//! - Several tables per sheet, separated by `#HSPLIT` rows
//! - Literal text lines with `#STR`, blank cells with `#EMPTY`
//! - Bold leading rows and columns
//! - .xlsx, .xlsm, .xlsb, .xls and .ods input
//!
//! # Example
//!
//! ```
//! use royalbit_redtable::core::{convert, ConvertOptions};
//! use royalbit_redtable::types::grid_from_strings;
//!
//! let grid = grid_from_strings(vec![
//!     vec!["Name", "Qty"],
//!     vec!["bolts", "12"],
//! ]);
//! let markup = convert(grid, &ConvertOptions::new(1, 0))?;
//! assert_eq!(markup, "|*Name*|*Qty*|\n|bolts|12|\n");
//! # Ok::<(), royalbit_redtable::error::RedtableError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use crate::core::{convert, ConvertOptions};
pub use error::{RedtableError, RedtableResult};
pub use types::{is_control_cell, Cell, Grid, Row, Sentinel};
