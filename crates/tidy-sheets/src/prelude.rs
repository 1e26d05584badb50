//! Prelude module - common imports for tidy-sheets users
//!
//! ```rust
//! use tidy_sheets::prelude::*;
//! ```

pub use crate::{
    BoundingBox, Error, FormatJob, FormatReport, FormatStep, Mode, Result, SheetSummary,
    TargetedRecipe, ACCOUNTING_FORMAT, DATE_FORMAT,
};
