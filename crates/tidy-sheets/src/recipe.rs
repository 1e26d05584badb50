//! Targeted numeric/date format recipes
//!
//! A recipe is a list of steps, each naming a sheet, a box and a format code.
//! Recipes are plain data and can be stored as JSON:
//!
//! ```json
//! {
//!   "steps": [
//!     { "sheet": "common", "range": { "r0": 2, "r1": 4, "c0": 3, "c1": 3 },
//!       "format": "#,##0.00;(#,##0.00);-" },
//!     { "sheet": "added", "range": { "r0": 2, "r1": 3, "c0": 2, "c1": 2 },
//!       "format": "mm/dd/yyyy", "only_dates": true }
//!   ]
//! }
//! ```

use crate::cell_format::{apply_date_format, apply_number_format};
use crate::error::{Error, Result};
use crate::number_format::{ACCOUNTING_FORMAT, DATE_FORMAT};
use crate::range::{self, BoundingBox};
use serde::{Deserialize, Serialize};
use std::path::Path;
use umya_spreadsheet::Spreadsheet;

/// One format application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatStep {
    /// Target sheet name
    pub sheet: String,
    /// Cells to format; missing bounds span the sheet's extent
    #[serde(default)]
    pub range: BoundingBox,
    /// Number format code
    pub format: String,
    /// Only format cells holding a date/time
    #[serde(default)]
    pub only_dates: bool,
}

impl FormatStep {
    /// Format every cell of `range` on `sheet`
    pub fn numbers<S: Into<String>, F: Into<String>>(sheet: S, range: BoundingBox, format: F) -> Self {
        Self {
            sheet: sheet.into(),
            range,
            format: format.into(),
            only_dates: false,
        }
    }

    /// Format the date/time cells of `range` on `sheet`
    pub fn dates<S: Into<String>, F: Into<String>>(sheet: S, range: BoundingBox, format: F) -> Self {
        Self {
            sheet: sheet.into(),
            range,
            format: format.into(),
            only_dates: true,
        }
    }
}

/// An ordered list of format steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetedRecipe {
    pub steps: Vec<FormatStep>,
}

impl Default for TargetedRecipe {
    /// Accounting format on `common` C2:C4 and date format on the dates of
    /// `added` B2:B3
    fn default() -> Self {
        Self {
            steps: vec![
                FormatStep::numbers("common", BoundingBox::exact(2, 4, 3, 3), ACCOUNTING_FORMAT),
                FormatStep::dates("added", BoundingBox::exact(2, 3, 2, 2), DATE_FORMAT),
            ],
        }
    }
}

impl TargetedRecipe {
    /// Parse a recipe from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a recipe from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serialize the recipe as pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Apply every step in order
    ///
    /// Fails with [`Error::SheetNotFound`] on the first step naming a missing
    /// sheet. Returns the names of the sheets touched, in step order.
    pub fn apply(&self, book: &mut Spreadsheet) -> Result<Vec<String>> {
        let mut touched = Vec::new();

        for step in &self.steps {
            let sheet = book
                .get_sheet_by_name_mut(&step.sheet)
                .ok_or_else(|| Error::SheetNotFound(step.sheet.clone()))?;

            let resolved = range::resolve(sheet, Some(&step.range));
            let changed = if step.only_dates {
                apply_date_format(sheet, &resolved, &step.format)
            } else {
                apply_number_format(sheet, &resolved, &step.format)
            };
            log::info!(
                "applied {:?} to {} cells of '{}'",
                step.format,
                changed,
                step.sheet
            );

            if !touched.contains(&step.sheet) {
                touched.push(step.sheet.clone());
            }
        }

        Ok(touched)
    }
}
