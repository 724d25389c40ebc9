use thiserror::Error;

pub type RedtableResult<T> = Result<T, RedtableError>;

#[derive(Error, Debug)]
pub enum RedtableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported spreadsheet format: {0}")]
    UnsupportedFormat(String),

    #[error("Read error: {0}")]
    Read(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Workbook has no sheets: {0}")]
    EmptyWorkbook(String),

    #[error("Cannot bold {requested} columns: row {row} has only {width} cells")]
    BoldColumnsOutOfRange {
        row: usize,
        width: usize,
        requested: usize,
    },

    #[error("Watch error: {0}")]
    Watch(String),
}
