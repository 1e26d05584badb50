//! # tidy-sheets
//!
//! Presentation pass for XLSX workbooks: freeze the header row, left-align
//! the headers, hide gridlines, turn each sheet into a table and size the
//! columns to their content. A second mode applies number and date formats
//! to fixed cell ranges described by a [`TargetedRecipe`].
//!
//! Workbooks are read and written with `umya-spreadsheet`; everything here
//! mutates its in-memory model.
//!
//! ## Example
//!
//! ```no_run
//! use tidy_sheets::prelude::*;
//!
//! let report = FormatJob::new("report.xlsx")
//!     .with_output("report-formatted.xlsx")
//!     .with_mode(Mode::Selected(Some(vec!["added".into(), "common".into()])))
//!     .run()?;
//! println!("formatted {:?}", report.sheets);
//! # Ok::<(), tidy_sheets::Error>(())
//! ```

pub mod cell_format;
pub mod error;
pub mod number_format;
pub mod prelude;
pub mod range;
pub mod recipe;
pub mod summary;
pub mod table;
pub mod value;
pub mod width;
pub mod workbook;

pub use cell_format::{apply_date_format, apply_number_format, format_dates, format_numbers};
pub use error::{Error, Result};
pub use number_format::{is_date_format, ACCOUNTING_FORMAT, DATE_FORMAT};
pub use range::{full_reference, resolve, BoundingBox, Extent, ResolvedBox};
pub use recipe::{FormatStep, TargetedRecipe};
pub use summary::SheetSummary;
pub use table::{format_sheet, format_sheet_in, TakenNames};
pub use value::CellValue;
pub use width::{autofit_columns, measure_columns, WIDTH_PADDING};
pub use workbook::{format_book, load, save, sheet_names, FormatJob, FormatReport, Mode};
