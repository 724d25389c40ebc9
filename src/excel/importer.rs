//! Spreadsheet reader - workbook sheet → string grid

use crate::error::{RedtableError, RedtableResult};
use crate::types::{Cell, Grid};
use calamine::{open_workbook, Data, DataType, Range, Reader, Sheets};
use chrono::Timelike;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

type Workbook = Sheets<BufReader<File>>;

/// Extensions calamine can open
pub const SUPPORTED_EXTENSIONS: [&str; 7] = ["xlsx", "xlsm", "xlam", "xlsb", "xls", "xla", "ods"];

/// Reads one worksheet of a workbook into a grid of stringified cells
pub struct SheetReader {
    path: PathBuf,
}

impl SheetReader {
    /// Create a new reader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Names of all worksheets, in workbook order
    pub fn sheet_names(&self) -> RedtableResult<Vec<String>> {
        let workbook = self.open()?;
        Ok(workbook.sheet_names().to_vec())
    }

    /// Read a worksheet by name, or the first worksheet when `sheet` is None
    pub fn read(&self, sheet: Option<&str>) -> RedtableResult<Grid> {
        let mut workbook = self.open()?;
        let names = workbook.sheet_names().to_vec();

        let sheet_name = match sheet {
            Some(name) => names
                .iter()
                .find(|candidate| candidate.as_str() == name)
                .cloned()
                .ok_or_else(|| {
                    RedtableError::SheetNotFound(format!(
                        "'{}' in {} (available: {})",
                        name,
                        self.path.display(),
                        names.join(", ")
                    ))
                })?,
            None => names
                .first()
                .cloned()
                .ok_or_else(|| RedtableError::EmptyWorkbook(self.path.display().to_string()))?,
        };

        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            RedtableError::Read(format!("Failed to read sheet '{}': {}", sheet_name, e))
        })?;

        let grid = range_to_grid(&range);
        tracing::info!(
            sheet = %sheet_name,
            rows = grid.len(),
            columns = range.width(),
            "read worksheet"
        );
        Ok(grid)
    }

    /// Open the workbook, choosing the format from the file extension
    fn open(&self) -> RedtableResult<Workbook> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        tracing::debug!(path = %self.path.display(), format = %extension, "opening workbook");
        match extension.as_str() {
            "xlsx" | "xlsm" | "xlam" => self.open_as(Sheets::Xlsx),
            "xlsb" => self.open_as(Sheets::Xlsb),
            "xls" | "xla" => self.open_as(Sheets::Xls),
            "ods" => self.open_as(Sheets::Ods),
            _ => Err(RedtableError::UnsupportedFormat(format!(
                "{} (expected one of: {})",
                self.path.display(),
                SUPPORTED_EXTENSIONS.join(", ")
            ))),
        }
    }

    fn open_as<R>(&self, wrap: fn(R) -> Workbook) -> RedtableResult<Workbook>
    where
        R: Reader<BufReader<File>>,
        R::Error: std::fmt::Display,
    {
        open_workbook::<R, _>(&self.path).map(wrap).map_err(|e| {
            RedtableError::Read(format!("Failed to open {}: {}", self.path.display(), e))
        })
    }
}

/// Convert a worksheet range to a grid; cells outside the used area are empty
pub fn range_to_grid(range: &Range<Data>) -> Grid {
    range
        .rows()
        .map(|row| row.iter().map(|cell| Cell::from(cell_to_string(cell))).collect())
        .collect()
}

/// Stringify a worksheet cell the way it reads in the sheet
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(true) => "TRUE".to_string(),
        Data::Bool(false) => "FALSE".to_string(),
        Data::DateTime(_) => match cell.as_datetime() {
            Some(dt) if dt.num_seconds_from_midnight() == 0 => dt.format("%Y-%m-%d").to_string(),
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => cell.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cell_to_string_scalars() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("#VJOIN".to_string())), "#VJOIN");
        assert_eq!(cell_to_string(&Data::Int(42)), "42");
        assert_eq!(cell_to_string(&Data::Float(3.0)), "3");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::Bool(true)), "TRUE");
        assert_eq!(cell_to_string(&Data::Bool(false)), "FALSE");
    }

    #[test]
    fn test_range_to_grid_classifies_sentinels() {
        let mut range: Range<Data> = Range::new((0, 0), (1, 1));
        range.set_value((0, 0), Data::String("#STR".to_string()));
        range.set_value((0, 1), Data::String("title".to_string()));
        range.set_value((1, 0), Data::Float(1.0));

        let grid = range_to_grid(&range);
        assert_eq!(grid.len(), 2);
        assert!(grid[0][0].is(crate::types::Sentinel::StringLine));
        assert_eq!(grid[0][1], Cell::text("title"));
        assert_eq!(grid[1], vec![Cell::text("1"), Cell::text("")]);
    }

    #[test]
    fn test_unsupported_extension() {
        let reader = SheetReader::new("table.csv");
        let err = reader.read(None).unwrap_err();
        assert!(matches!(err, RedtableError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_extension() {
        let reader = SheetReader::new("table");
        assert!(matches!(
            reader.sheet_names().unwrap_err(),
            RedtableError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let reader = SheetReader::new("/nonexistent/dir/table.xlsx");
        assert!(matches!(reader.read(None).unwrap_err(), RedtableError::Read(_)));
    }
}
