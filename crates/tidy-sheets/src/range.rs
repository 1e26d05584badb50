//! Bounding boxes and their resolution against a worksheet's data extent
//!
//! Rows and columns are 1-based throughout, matching A1 notation.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use umya_spreadsheet::helper::coordinate::coordinate_from_index;
use umya_spreadsheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// The rectangle covering every stored cell of a worksheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    /// First used row
    pub min_row: u32,
    /// Last used row
    pub max_row: u32,
    /// First used column
    pub min_col: u32,
    /// Last used column
    pub max_col: u32,
}

impl Extent {
    /// Extent reported for a worksheet without cells: just A1
    pub const EMPTY: Extent = Extent {
        min_row: 1,
        max_row: 1,
        min_col: 1,
        max_col: 1,
    };

    /// Compute the extent of a worksheet from its stored cells
    pub fn of(sheet: &Worksheet) -> Self {
        let mut extent: Option<Extent> = None;

        for cell in sheet.get_cell_collection() {
            let coordinate = cell.get_coordinate();
            let row = *coordinate.get_row_num();
            let col = *coordinate.get_col_num();

            extent = Some(match extent {
                None => Extent {
                    min_row: row,
                    max_row: row,
                    min_col: col,
                    max_col: col,
                },
                Some(e) => Extent {
                    min_row: e.min_row.min(row),
                    max_row: e.max_row.max(row),
                    min_col: e.min_col.min(col),
                    max_col: e.max_col.max(col),
                },
            });
        }

        extent.unwrap_or(Self::EMPTY)
    }

    /// A1 address of the last used column and row
    pub fn bottom_right(&self) -> String {
        coordinate_from_index(&self.max_col, &self.max_row)
    }
}

/// A possibly partial row/column rectangle
///
/// Every bound is independently optional. Missing bounds are filled from the
/// worksheet extent by [`BoundingBox::resolve`]; bounds that are present are
/// kept exactly as given, even when they fall outside the sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingBox {
    /// Minimum row
    pub r0: Option<i64>,
    /// Maximum row
    pub r1: Option<i64>,
    /// Minimum column
    pub c0: Option<i64>,
    /// Maximum column
    pub c1: Option<i64>,
}

impl BoundingBox {
    /// A box with no bounds set (resolves to the whole extent)
    pub fn new() -> Self {
        Self::default()
    }

    /// A box with all four bounds set
    pub fn exact(r0: i64, r1: i64, c0: i64, c1: i64) -> Self {
        Self {
            r0: Some(r0),
            r1: Some(r1),
            c0: Some(c0),
            c1: Some(c1),
        }
    }

    /// Set the row bounds
    pub fn with_rows(mut self, r0: i64, r1: i64) -> Self {
        self.r0 = Some(r0);
        self.r1 = Some(r1);
        self
    }

    /// Set the column bounds
    pub fn with_columns(mut self, c0: i64, c1: i64) -> Self {
        self.c0 = Some(c0);
        self.c1 = Some(c1);
        self
    }

    /// Fill every missing bound from `extent`
    pub fn resolve(&self, extent: &Extent) -> ResolvedBox {
        ResolvedBox {
            r0: self.r0.unwrap_or(i64::from(extent.min_row)),
            r1: self.r1.unwrap_or(i64::from(extent.max_row)),
            c0: self.c0.unwrap_or(i64::from(extent.min_col)),
            c1: self.c1.unwrap_or(i64::from(extent.max_col)),
        }
    }
}

/// Resolve an optional partial box against a worksheet's extent
pub fn resolve(sheet: &Worksheet, bbox: Option<&BoundingBox>) -> ResolvedBox {
    let extent = Extent::of(sheet);
    let resolved = bbox.copied().unwrap_or_default().resolve(&extent);
    log::debug!("resolved {:?} on '{}' to {:?}", bbox, sheet.get_name(), resolved);
    resolved
}

/// A rectangle with every bound present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedBox {
    pub r0: i64,
    pub r1: i64,
    pub c0: i64,
    pub c1: i64,
}

impl ResolvedBox {
    /// Iterate the addressable `(row, col)` pairs, column by column
    ///
    /// Coordinates below 1 or past the sheet limits are skipped, so an
    /// inverted or out-of-range box yields nothing.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> {
        let rows = addressable(self.r0, self.r1, MAX_ROWS);
        let cols = addressable(self.c0, self.c1, MAX_COLS);
        cols.flat_map(move |col| rows.clone().map(move |row| (row, col)))
    }
}

fn addressable(lo: i64, hi: i64, max: u32) -> RangeInclusive<u32> {
    let lo = lo.max(1);
    let hi = hi.min(i64::from(max));
    if lo > hi {
        return RangeInclusive::new(1, 0);
    }
    (lo as u32)..=(hi as u32)
}

/// A1-style reference from A1 to the last used column and row
pub fn full_reference(extent: &Extent) -> String {
    format!("A1:{}", extent.bottom_right())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_extent() -> Extent {
        Extent {
            min_row: 2,
            max_row: 40,
            min_col: 3,
            max_col: 7,
        }
    }

    #[test]
    fn test_empty_box_resolves_to_extent() {
        let resolved = BoundingBox::new().resolve(&sample_extent());
        assert_eq!(
            resolved,
            ResolvedBox {
                r0: 2,
                r1: 40,
                c0: 3,
                c1: 7
            }
        );
    }

    #[test]
    fn test_explicit_bounds_are_kept() {
        let bbox = BoundingBox {
            r0: Some(0),
            c1: Some(-4),
            ..Default::default()
        };
        let resolved = bbox.resolve(&sample_extent());
        assert_eq!(resolved.r0, 0);
        assert_eq!(resolved.r1, 40);
        assert_eq!(resolved.c0, 3);
        assert_eq!(resolved.c1, -4);
    }

    #[test]
    fn test_exact_box_ignores_extent() {
        let bbox = BoundingBox::exact(2, 4, 3, 3);
        assert_eq!(bbox.resolve(&Extent::EMPTY), bbox.resolve(&sample_extent()));
    }

    #[test]
    fn test_cells_column_major() {
        let resolved = BoundingBox::exact(1, 2, 1, 2).resolve(&Extent::EMPTY);
        let cells: Vec<_> = resolved.cells().collect();
        assert_eq!(cells, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn test_cells_skip_unaddressable() {
        let resolved = BoundingBox::exact(-3, 1, 0, 1).resolve(&Extent::EMPTY);
        assert_eq!(resolved.cells().collect::<Vec<_>>(), vec![(1, 1)]);

        let inverted = BoundingBox::exact(5, 2, 1, 1).resolve(&Extent::EMPTY);
        assert_eq!(inverted.cells().count(), 0);

        let negative = BoundingBox::exact(-5, -2, 1, 1).resolve(&Extent::EMPTY);
        assert_eq!(negative.cells().count(), 0);
    }

    #[test]
    fn test_full_reference_starts_at_a1() {
        assert_eq!(full_reference(&sample_extent()), "A1:G40");
        assert_eq!(full_reference(&Extent::EMPTY), "A1:A1");

        let wide = Extent {
            max_col: 28,
            ..sample_extent()
        };
        assert_eq!(full_reference(&wide), "A1:AB40");
    }

    #[test]
    fn test_extent_of_sheet() {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_by_name_mut("Sheet1").unwrap();
        assert_eq!(Extent::of(sheet), Extent::EMPTY);

        sheet.get_cell_mut("C2").set_value("a");
        sheet.get_cell_mut("E9").set_value("b");
        assert_eq!(
            Extent::of(sheet),
            Extent {
                min_row: 2,
                max_row: 9,
                min_col: 3,
                max_col: 5
            }
        );
    }
}
