//! Column auto-sizing from cell content length

use crate::value::CellValue;
use std::collections::{BTreeMap, BTreeSet};
use umya_spreadsheet::Worksheet;

/// Extra characters added to the longest value of a column
pub const WIDTH_PADDING: f64 = 3.0;

/// Longest string form per column, counting only truthy cells
///
/// Lengths are in characters and know nothing about fonts or number formats.
pub fn measure_columns(sheet: &Worksheet) -> BTreeMap<u32, usize> {
    let mut lengths: BTreeMap<u32, usize> = BTreeMap::new();

    for cell in sheet.get_cell_collection() {
        let value = CellValue::of(cell);
        if !value.is_truthy() {
            continue;
        }
        let len = value.to_string().chars().count();
        let col = *cell.get_coordinate().get_col_num();
        let longest = lengths.entry(col).or_insert(0);
        *longest = (*longest).max(len);
    }

    lengths
}

/// Set every measured column's width to its longest value plus padding
///
/// Columns without a truthy cell keep whatever width they had. Returns the
/// widths that were set, keyed by 1-based column index.
pub fn autofit_columns(sheet: &mut Worksheet) -> BTreeMap<u32, f64> {
    let widths: BTreeMap<u32, f64> = measure_columns(sheet)
        .into_iter()
        .map(|(col, len)| (col, len as f64 + WIDTH_PADDING))
        .collect();

    for (col, width) in &widths {
        let dimension = sheet.get_column_dimension_by_number_mut(col);
        dimension.set_width(*width);
        dimension.set_auto_width(false);
        dimension.set_best_fit(true);
    }

    log::debug!("column widths for '{}': {:?}", sheet.get_name(), widths);
    widths
}

/// Widths of the columns marked as sized to their content, keyed by
/// 1-based index
pub fn fitted_widths(sheet: &Worksheet) -> BTreeMap<u32, f64> {
    sheet
        .get_column_dimensions()
        .iter()
        .filter(|dimension| *dimension.get_best_fit())
        .map(|dimension| (*dimension.get_col_num(), *dimension.get_width()))
        .collect()
}

/// The columns that carry a dimension record at one point in time
///
/// Touching a cell through the model gives its column a dimension record,
/// which is saved as an explicit width. Take a snapshot before editing cells
/// and call [`ColumnRecords::drop_added`] afterwards so columns nobody sized
/// stay without a width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRecords {
    cols: BTreeSet<u32>,
}

impl ColumnRecords {
    /// Snapshot the column dimension records of `sheet`
    pub fn of(sheet: &Worksheet) -> Self {
        Self {
            cols: sheet
                .get_column_dimensions()
                .iter()
                .map(|dimension| *dimension.get_col_num())
                .collect(),
        }
    }

    /// Remove records added since the snapshot, keeping content-sized ones
    ///
    /// Returns how many records were removed.
    pub fn drop_added(&self, sheet: &mut Worksheet) -> usize {
        let dimensions = sheet.get_column_dimensions_mut();
        let before = dimensions.len();
        dimensions.retain(|dimension| {
            self.cols.contains(dimension.get_col_num()) || *dimension.get_best_fit()
        });
        before - dimensions.len()
    }
}
