//! Spreadsheet reader tests against workbooks written with rust_xlsxwriter

use pretty_assertions::assert_eq;
use royalbit_redtable::error::RedtableError;
use royalbit_redtable::excel::SheetReader;
use royalbit_redtable::types::{grid_to_strings, Cell, Sentinel};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(dir: &TempDir, name: &str, build: impl FnOnce(&mut Workbook)) -> PathBuf {
    let path = dir.path().join(name);
    let mut workbook = Workbook::new();
    build(&mut workbook);
    workbook.save(&path).unwrap();
    path
}

// ═══════════════════════════════════════════════════════════════════════════
// CELL VALUES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_read_text_and_sentinels() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "text.xlsx", |wb| {
        let ws = wb.add_worksheet();
        ws.write_string(0, 0, "#STR").unwrap();
        ws.write_string(0, 1, "Caption").unwrap();
        ws.write_string(1, 0, "a").unwrap();
        ws.write_string(1, 1, "#VJOIN").unwrap();
    });

    let grid = SheetReader::new(&path).read(None).unwrap();
    assert!(grid[0][0].is(Sentinel::StringLine));
    assert_eq!(grid[0][1], Cell::text("Caption"));
    assert!(grid[1][1].is(Sentinel::VJoin));
}

#[test]
fn test_read_numbers_and_booleans() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "numbers.xlsx", |wb| {
        let ws = wb.add_worksheet();
        ws.write_number(0, 0, 42.0).unwrap();
        ws.write_number(0, 1, 2.5).unwrap();
        ws.write_boolean(0, 2, true).unwrap();
        ws.write_boolean(0, 3, false).unwrap();
    });

    let grid = SheetReader::new(&path).read(None).unwrap();
    assert_eq!(grid_to_strings(&grid), vec![vec!["42", "2.5", "TRUE", "FALSE"]]);
}

#[test]
fn test_read_dates() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "dates.xlsx", |wb| {
        let date_format = Format::new().set_num_format("yyyy-mm-dd");
        let stamp_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
        let ws = wb.add_worksheet();
        let date = ExcelDateTime::from_ymd(2024, 3, 15).unwrap();
        let stamp = ExcelDateTime::from_ymd(2024, 3, 15)
            .unwrap()
            .and_hms(12, 0, 0)
            .unwrap();
        ws.write_datetime_with_format(0, 0, &date, &date_format).unwrap();
        ws.write_datetime_with_format(0, 1, &stamp, &stamp_format).unwrap();
    });

    let grid = SheetReader::new(&path).read(None).unwrap();
    assert_eq!(
        grid_to_strings(&grid),
        vec![vec!["2024-03-15", "2024-03-15 12:00:00"]]
    );
}

#[test]
fn test_gaps_become_empty_strings() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "gaps.xlsx", |wb| {
        let ws = wb.add_worksheet();
        ws.write_string(0, 0, "a1").unwrap();
        ws.write_string(0, 3, "a4").unwrap();
        ws.write_string(1, 0, "b1").unwrap();
    });

    let grid = SheetReader::new(&path).read(None).unwrap();
    assert_eq!(
        grid_to_strings(&grid),
        vec![vec!["a1", "", "", "a4"], vec!["b1", "", "", ""]]
    );
}

#[test]
fn test_grid_starts_at_first_used_cell() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "offset.xlsx", |wb| {
        let ws = wb.add_worksheet();
        ws.write_string(1, 1, "x").unwrap();
        ws.write_string(2, 2, "y").unwrap();
    });

    let grid = SheetReader::new(&path).read(None).unwrap();
    assert_eq!(grid_to_strings(&grid), vec![vec!["x", ""], vec!["", "y"]]);
}

// ═══════════════════════════════════════════════════════════════════════════
// SHEETS
// ═══════════════════════════════════════════════════════════════════════════

fn two_sheet_book(dir: &TempDir) -> PathBuf {
    fixture(dir, "book.xlsx", |wb| {
        let ws = wb.add_worksheet();
        ws.set_name("Summary").unwrap();
        ws.write_string(0, 0, "first").unwrap();
        let ws = wb.add_worksheet();
        ws.set_name("Details").unwrap();
        ws.write_string(0, 0, "second").unwrap();
    })
}

#[test]
fn test_sheet_names_in_order() {
    let dir = TempDir::new().unwrap();
    let path = two_sheet_book(&dir);
    let names = SheetReader::new(&path).sheet_names().unwrap();
    assert_eq!(names, vec!["Summary", "Details"]);
}

#[test]
fn test_first_sheet_by_default() {
    let dir = TempDir::new().unwrap();
    let path = two_sheet_book(&dir);
    let grid = SheetReader::new(&path).read(None).unwrap();
    assert_eq!(grid_to_strings(&grid), vec![vec!["first"]]);
}

#[test]
fn test_named_sheet() {
    let dir = TempDir::new().unwrap();
    let path = two_sheet_book(&dir);
    let grid = SheetReader::new(&path).read(Some("Details")).unwrap();
    assert_eq!(grid_to_strings(&grid), vec![vec!["second"]]);
}

#[test]
fn test_sheet_not_found_lists_available() {
    let dir = TempDir::new().unwrap();
    let path = two_sheet_book(&dir);
    let err = SheetReader::new(&path).read(Some("details")).unwrap_err();
    assert!(matches!(err, RedtableError::SheetNotFound(_)));
    let message = err.to_string();
    assert!(message.contains("Summary, Details"), "{message}");
}

// ═══════════════════════════════════════════════════════════════════════════
// FAILURES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_corrupt_workbook_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.xlsx");
    std::fs::write(&path, b"this is not a zip archive").unwrap();

    let err = SheetReader::new(&path).read(None).unwrap_err();
    assert!(matches!(err, RedtableError::Read(_)));
}

#[test]
fn test_extension_check_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    let path = fixture(&dir, "UPPER.XLSX", |wb| {
        wb.add_worksheet().write_string(0, 0, "ok").unwrap();
    });
    let grid = SheetReader::new(&path).read(None).unwrap();
    assert_eq!(grid_to_strings(&grid), vec![vec!["ok"]]);
}

#[test]
fn test_unsupported_extension() {
    let err = SheetReader::new("notes.txt").read(None).unwrap_err();
    assert!(matches!(err, RedtableError::UnsupportedFormat(_)));
    assert!(err.to_string().contains("notes.txt"));
}
