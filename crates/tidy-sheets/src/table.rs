//! Standard table presentation pass for one worksheet
//!
//! The pass freezes the header row, left-aligns the headers, hides gridlines,
//! registers the used area as a table named after the sheet and auto-sizes
//! the columns.

use crate::error::{Error, Result};
use crate::range::{full_reference, Extent};
use crate::value::CellValue;
use crate::width::{autofit_columns, ColumnRecords};
use std::collections::BTreeSet;
use umya_spreadsheet::{
    Coordinate, HorizontalAlignmentValues, Pane, PaneStateValues, PaneValues, SheetView,
    Spreadsheet, Table, TableColumn, Worksheet,
};

/// Maximum length of a table name
pub const MAX_TABLE_NAME_LEN: usize = 255;

/// Table and defined names already used in a workbook
///
/// Names are compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct TakenNames {
    names: BTreeSet<String>,
}

impl TakenNames {
    /// Collect every table name and defined name of a workbook
    pub fn of(book: &Spreadsheet) -> Self {
        let mut taken = Self::default();

        for defined in book.get_defined_names() {
            taken.insert(defined.get_name());
        }
        for sheet in book.get_sheet_collection() {
            for table in sheet.get_tables() {
                taken.insert(table.get_name());
            }
            for defined in sheet.get_defined_names() {
                taken.insert(defined.get_name());
            }
        }

        taken
    }

    /// Record a name as used
    pub fn insert(&mut self, name: &str) {
        self.names.insert(name.to_lowercase());
    }

    /// Check if a name is already used
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }
}

/// Check that `name` can be registered as a new table
pub fn check_table_name(name: &str, taken: &TakenNames) -> Result<()> {
    if !is_valid_table_name(name) {
        return Err(Error::InvalidTableName(name.to_string()));
    }
    if taken.contains(name) {
        return Err(Error::NameCollision(name.to_string()));
    }
    Ok(())
}

/// Check the characters and shape of a table name
pub fn is_valid_table_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if name.chars().count() > MAX_TABLE_NAME_LEN {
        return false;
    }
    if !(first.is_alphabetic() || first == '_' || first == '\\') {
        return false;
    }
    if !chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '\\')) {
        return false;
    }

    !looks_like_reference(name)
}

/// Names Excel would read as a cell reference (`AB12`, `R1C1`, `R`, `C`)
fn looks_like_reference(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    if upper == "R" || upper == "C" {
        return true;
    }

    let letters = upper.chars().take_while(|c| c.is_ascii_alphabetic()).count();
    let digits = &upper[letters..];
    if (1..=3).contains(&letters) && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
    {
        return true;
    }

    // R1C1 style: R<digits?>C<digits?>
    if let Some(rest) = upper.strip_prefix('R') {
        let row_digits = rest.chars().take_while(|c| c.is_ascii_digit()).count();
        if let Some(col) = rest[row_digits..].strip_prefix('C') {
            return col.chars().all(|c| c.is_ascii_digit());
        }
    }

    false
}

/// Run the standard presentation pass on one worksheet
///
/// The table name is checked before anything is changed, so a rejected sheet
/// is left exactly as it was. Running the pass twice on the same sheet fails
/// with [`Error::NameCollision`] because its table already exists.
pub fn format_sheet(sheet: &mut Worksheet, taken: &TakenNames) -> Result<()> {
    let name = sheet.get_name().to_string();

    check_table_name(&name, taken)?;

    let extent = Extent::of(sheet);
    let records = ColumnRecords::of(sheet);

    freeze_header_row(sheet);
    align_header_left(sheet, extent.max_col);
    hide_gridlines(sheet);
    let reference = add_table(sheet, &name, &extent);
    let widths = autofit_columns(sheet);
    records.drop_added(sheet);

    log::info!(
        "formatted sheet '{}' as table {} ({} columns sized)",
        name,
        reference,
        widths.len()
    );
    Ok(())
}

/// Run [`format_sheet`] on the sheet called `name`
pub fn format_sheet_in(book: &mut Spreadsheet, name: &str) -> Result<()> {
    let taken = TakenNames::of(book);
    let sheet = book
        .get_sheet_by_name_mut(name)
        .ok_or_else(|| Error::SheetNotFound(name.to_string()))?;
    format_sheet(sheet, &taken)
}

fn for_each_view(sheet: &mut Worksheet, mut apply: impl FnMut(&mut SheetView)) {
    let views = sheet.get_sheet_views_mut();
    if views.get_sheet_view_list().is_empty() {
        views.add_sheet_view_list_mut(SheetView::default());
    }
    for view in views.get_sheet_view_list_mut().iter_mut() {
        apply(view);
    }
}

/// Freeze row 1 so the header stays visible
pub fn freeze_header_row(sheet: &mut Worksheet) {
    for_each_view(sheet, |view| {
        let mut top_left = Coordinate::default();
        top_left.set_coordinate("A2");

        // ySplit counts the frozen rows
        let mut pane = Pane::default();
        pane.set_vertical_split(1.0);
        pane.set_top_left_cell(top_left);
        pane.set_active_pane(PaneValues::BottomLeft);
        pane.set_state(PaneStateValues::Frozen);

        view.set_pane(pane);
    });
}

/// Left-align row 1 from column A to `max_col`
pub fn align_header_left(sheet: &mut Worksheet, max_col: u32) {
    for col in 1..=max_col {
        sheet
            .get_style_mut((col, 1))
            .get_alignment_mut()
            .set_horizontal(HorizontalAlignmentValues::Left);
    }
}

/// Hide gridlines in every view of the sheet
pub fn hide_gridlines(sheet: &mut Worksheet) {
    for_each_view(sheet, |view| {
        view.set_show_grid_lines(false);
    });
}

/// Register the area from A1 to the extent's corner as a table
///
/// Returns the A1 reference of the table.
fn add_table(sheet: &mut Worksheet, name: &str, extent: &Extent) -> String {
    let corner = extent.bottom_right();

    let mut table = Table::new(name, ("A1", corner.as_str()));
    for header in header_names(sheet, extent.max_col) {
        table.add_column(TableColumn::new(&header));
    }
    sheet.add_table(table);

    full_reference(extent)
}

/// Table column names from row 1
///
/// Blank headers become `ColumnN` and repeats get a numeric suffix, since
/// table columns must have unique, non-empty names.
pub fn header_names(sheet: &Worksheet, max_col: u32) -> Vec<String> {
    let mut used = BTreeSet::new();
    let mut names = Vec::with_capacity(max_col as usize);

    for col in 1..=max_col {
        let text = sheet
            .get_cell((col, 1))
            .map(|cell| CellValue::of(cell).to_string())
            .unwrap_or_default();
        let base = if text.trim().is_empty() {
            format!("Column{}", col)
        } else {
            text
        };

        let mut candidate = base.clone();
        let mut suffix = 2;
        while !used.insert(candidate.to_lowercase()) {
            candidate = format!("{}{}", base, suffix);
            suffix += 1;
        }
        names.push(candidate);
    }

    names
}
