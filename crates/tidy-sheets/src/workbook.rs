//! Workbook-level formatting: pick sheets, format them, save

use crate::error::{Error, Result};
use crate::recipe::TargetedRecipe;
use crate::table::format_sheet_in;
use std::path::{Path, PathBuf};
use umya_spreadsheet::Spreadsheet;

/// Which formatting a run applies
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Table pass on every sheet, in workbook order
    #[default]
    AllSheets,
    /// Table pass on the listed sheets in list order, or on every sheet
    Selected(Option<Vec<String>>),
    /// Number/date formats from a recipe
    Targeted(TargetedRecipe),
}

/// Sheet names in workbook order
pub fn sheet_names(book: &Spreadsheet) -> Vec<String> {
    book.get_sheet_collection()
        .iter()
        .map(|sheet| sheet.get_name().to_string())
        .collect()
}

/// Apply `mode` to an in-memory workbook
///
/// Returns the names of the sheets that were formatted. Stops at the first
/// error; sheets already processed keep their changes in memory.
pub fn format_book(book: &mut Spreadsheet, mode: &Mode) -> Result<Vec<String>> {
    match mode {
        Mode::AllSheets | Mode::Selected(None) => {
            let names = sheet_names(book);
            format_sheets(book, &names)
        }
        Mode::Selected(Some(names)) => format_sheets(book, names),
        Mode::Targeted(recipe) => recipe.apply(book),
    }
}

fn format_sheets(book: &mut Spreadsheet, names: &[String]) -> Result<Vec<String>> {
    for name in names {
        format_sheet_in(book, name)?;
    }
    Ok(names.to_vec())
}

/// Load a workbook from disk
pub fn load(path: &Path) -> Result<Spreadsheet> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    umya_spreadsheet::reader::xlsx::read(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Save a workbook to disk, replacing any existing file
pub fn save(book: &Spreadsheet, path: &Path) -> Result<()> {
    umya_spreadsheet::writer::xlsx::write(book, path).map_err(|e| Error::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Outcome of a [`FormatJob`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatReport {
    /// Where the workbook was written
    pub output: PathBuf,
    /// Sheets that were formatted
    pub sheets: Vec<String>,
}

/// One load → format → save run
///
/// Nothing is written unless every requested change succeeded.
#[derive(Debug, Clone)]
pub struct FormatJob {
    input: PathBuf,
    output: Option<PathBuf>,
    mode: Mode,
}

impl FormatJob {
    /// Format `input` in place with [`Mode::AllSheets`]
    pub fn new<P: Into<PathBuf>>(input: P) -> Self {
        Self {
            input: input.into(),
            output: None,
            mode: Mode::default(),
        }
    }

    /// Write the result to `output` instead of overwriting the input
    pub fn with_output<P: Into<PathBuf>>(mut self, output: P) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Set the formatting mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Input path
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Path the result is written to
    pub fn output(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }

    /// Formatting mode
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Run the job
    pub fn run(&self) -> Result<FormatReport> {
        let mut book = load(&self.input)?;
        log::info!("loaded '{}'", self.input.display());

        let sheets = format_book(&mut book, &self.mode)?;

        let output = self.output().to_path_buf();
        save(&book, &output)?;
        log::info!(
            "saved '{}' ({} sheets formatted)",
            output.display(),
            sheets.len()
        );

        Ok(FormatReport { output, sheets })
    }
}
