//! Common fixtures for end-to-end tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tidy_sheets::SheetSummary;
use umya_spreadsheet::Spreadsheet;

/// Workbook with the two sheets of the standard scenario
///
/// `added`:
/// ```text
///   A      B
/// 1 name   qty
/// 2 alpha  12
/// 3 be     0
/// ```
///
/// `common`:
/// ```text
///   A     B       C
/// 1 code  amount  when
/// 2 x     1234.5  2024-01-01 (serial 45292, yyyy-mm-dd)
/// ```
pub fn scenario_book() -> Spreadsheet {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();

    let added = book.new_sheet("added").unwrap();
    added.get_cell_mut("A1").set_value_string("name");
    added.get_cell_mut("B1").set_value_string("qty");
    added.get_cell_mut("A2").set_value_string("alpha");
    added.get_cell_mut("B2").set_value_number(12);
    added.get_cell_mut("A3").set_value_string("be");
    added.get_cell_mut("B3").set_value_number(0);

    let common = book.new_sheet("common").unwrap();
    common.get_cell_mut("A1").set_value_string("code");
    common.get_cell_mut("B1").set_value_string("amount");
    common.get_cell_mut("C1").set_value_string("when");
    common.get_cell_mut("A2").set_value_string("x");
    common.get_cell_mut("B2").set_value_number(1234.5);
    common.get_cell_mut("C2").set_value_number(45_292);
    common
        .get_style_mut("C2")
        .get_number_format_mut()
        .set_format_code("yyyy-mm-dd");

    book
}

/// Save `book` as `name` inside `dir`
pub fn write_book(book: &Spreadsheet, dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    tidy_sheets::save(book, &path).expect("fixture should save");
    path
}

/// Reload a workbook and summarize one of its sheets
pub fn summary_after_reload(path: &Path, sheet: &str) -> SheetSummary {
    let book = tidy_sheets::load(path).expect("output should load");
    let sheet = book
        .get_sheet_by_name(sheet)
        .unwrap_or_else(|| panic!("sheet {sheet} should exist"));
    SheetSummary::of(sheet)
}

/// Number format code of a cell, `General` when unset
pub fn format_code(book: &Spreadsheet, sheet: &str, addr: &str) -> String {
    book.get_sheet_by_name(sheet)
        .and_then(|s| s.get_cell(addr))
        .and_then(|c| c.get_style().get_number_format())
        .map(|f| f.get_format_code().to_string())
        .unwrap_or_else(|| "General".to_string())
}
