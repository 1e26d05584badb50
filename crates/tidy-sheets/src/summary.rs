//! Presentation state of a worksheet, as read back from the model

use crate::range::Extent;
use crate::width::fitted_widths;
use std::collections::BTreeMap;
use umya_spreadsheet::{HorizontalAlignmentValues, Worksheet};

/// What the table pass sets on a worksheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSummary {
    /// Sheet title
    pub name: String,
    /// Used area
    pub extent: Extent,
    /// Top-left cell of the scrolling pane of the first view, if frozen
    pub frozen_at: Option<String>,
    /// Whether the first view shows gridlines
    pub gridlines: bool,
    /// `(name, A1 reference)` for every table
    pub tables: Vec<(String, String)>,
    /// Whether every used cell of row 1 is left-aligned
    pub header_left_aligned: bool,
    /// Widths of the columns sized to their content, keyed by 1-based index
    pub column_widths: BTreeMap<u32, f64>,
}

impl SheetSummary {
    /// Read the summary of a worksheet
    pub fn of(sheet: &Worksheet) -> Self {
        let extent = Extent::of(sheet);

        let first_view = sheet.get_sheets_views().get_sheet_view_list().first();
        let frozen_at = first_view
            .and_then(|view| view.get_pane())
            .map(|pane| pane.get_top_left_cell().get_coordinate());
        let gridlines = first_view
            .map(|view| *view.get_show_grid_lines())
            .unwrap_or(true);

        let tables = sheet
            .get_tables()
            .iter()
            .map(|table| {
                let (start, end) = table.get_area();
                (
                    table.get_name().to_string(),
                    format!("{}:{}", start.get_coordinate(), end.get_coordinate()),
                )
            })
            .collect();

        let header_left_aligned = (1..=extent.max_col).all(|col| {
            sheet
                .get_cell((col, 1))
                .and_then(|cell| cell.get_style().get_alignment())
                .map(|alignment| {
                    matches!(alignment.get_horizontal(), HorizontalAlignmentValues::Left)
                })
                .unwrap_or(false)
        });

        let column_widths = fitted_widths(sheet);

        Self {
            name: sheet.get_name().to_string(),
            extent,
            frozen_at,
            gridlines,
            tables,
            header_left_aligned,
            column_widths,
        }
    }
}
