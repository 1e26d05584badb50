//! Number/date format application over a rectangle of cells

use crate::range::{self, BoundingBox, ResolvedBox};
use crate::value::CellValue;
use crate::width::ColumnRecords;
use umya_spreadsheet::Worksheet;

/// Set the number format of every cell in `bbox`
///
/// Cells that do not exist yet are created. Returns how many cells changed.
pub fn apply_number_format(sheet: &mut Worksheet, bbox: &ResolvedBox, code: &str) -> usize {
    let records = ColumnRecords::of(sheet);
    let mut changed = 0;

    for (row, col) in bbox.cells() {
        let format = sheet.get_style_mut((col, row)).get_number_format_mut();
        if format.get_format_code() != code {
            format.set_format_code(code);
            changed += 1;
        }
    }
    records.drop_added(sheet);

    log::debug!(
        "number format {:?} set on {} cells of '{}'",
        code,
        changed,
        sheet.get_name()
    );
    changed
}

/// Set the number format of the date/time cells in `bbox`
///
/// Every other cell, including missing ones, is left alone. Returns how many
/// cells changed.
pub fn apply_date_format(sheet: &mut Worksheet, bbox: &ResolvedBox, code: &str) -> usize {
    let records = ColumnRecords::of(sheet);
    let mut changed = 0;

    for (row, col) in bbox.cells() {
        let is_date = sheet
            .get_cell((col, row))
            .map(|cell| CellValue::of(cell).is_date())
            .unwrap_or(false);
        if !is_date {
            continue;
        }

        let format = sheet.get_style_mut((col, row)).get_number_format_mut();
        if format.get_format_code() != code {
            format.set_format_code(code);
            changed += 1;
        }
    }
    records.drop_added(sheet);

    log::debug!(
        "date format {:?} set on {} cells of '{}'",
        code,
        changed,
        sheet.get_name()
    );
    changed
}

/// [`apply_number_format`] over a partial box, resolved against the sheet once
pub fn format_numbers(sheet: &mut Worksheet, bbox: Option<&BoundingBox>, code: &str) -> usize {
    let resolved = range::resolve(sheet, bbox);
    apply_number_format(sheet, &resolved, code)
}

/// [`apply_date_format`] over a partial box, resolved against the sheet once
pub fn format_dates(sheet: &mut Worksheet, bbox: Option<&BoundingBox>, code: &str) -> usize {
    let resolved = range::resolve(sheet, bbox);
    apply_date_format(sheet, &resolved, code)
}
