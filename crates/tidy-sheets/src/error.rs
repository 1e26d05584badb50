//! Error types for tidy-sheets

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while formatting a workbook
#[derive(Debug, Error)]
pub enum Error {
    /// Input workbook does not exist
    #[error("Workbook not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Table display name already used by a table or defined name
    #[error("Name already used in workbook: {0}")]
    NameCollision(String),

    /// Sheet title cannot be used as a table display name
    #[error("Invalid table name: {0}")]
    InvalidTableName(String),

    /// The spreadsheet library failed to load a workbook
    #[error("Failed to read '{}': {message}", path.display())]
    Read { path: PathBuf, message: String },

    /// The spreadsheet library failed to save a workbook
    #[error("Failed to write '{}': {message}", path.display())]
    Write { path: PathBuf, message: String },

    /// Malformed recipe document
    #[error("Invalid recipe: {0}")]
    Recipe(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
