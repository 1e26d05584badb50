//! tidy-sheets CLI - table-style formatting for XLSX workbooks

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tidy_sheets::prelude::*;
use tidy_sheets::{load, sheet_names};

#[derive(Parser)]
#[command(name = "tidy-sheets")]
#[command(author, version, about = "Table-style formatting for XLSX workbooks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a workbook and save it
    Format {
        /// Input workbook
        input: PathBuf,

        /// Output workbook (default: overwrite the input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// What to apply
        #[arg(short, long, value_enum, default_value_t = ModeArg::All)]
        mode: ModeArg,

        /// Sheet to format in `selected` mode (repeatable, in order)
        #[arg(short, long = "sheet")]
        sheets: Vec<String>,

        /// JSON recipe for `targeted` mode (default: built-in recipe)
        #[arg(short, long)]
        recipe: Option<PathBuf>,
    },

    /// List the sheets of a workbook and their tables
    Sheets {
        /// Input workbook
        input: PathBuf,
    },

    /// Print the built-in targeted recipe as JSON
    Recipe,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Table pass on every sheet
    All,
    /// Table pass on the sheets given with --sheet
    Selected,
    /// Number/date formats from a recipe
    Targeted,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Format {
            input,
            output,
            mode,
            sheets,
            recipe,
        } => {
            let mode = build_mode(mode, sheets, recipe.as_deref())?;
            run_format(input, output, mode)
        }
        Commands::Sheets { input } => list_sheets(&input),
        Commands::Recipe => print_recipe(),
    }
}

fn build_mode(mode: ModeArg, sheets: Vec<String>, recipe: Option<&Path>) -> Result<Mode> {
    if mode != ModeArg::Selected && !sheets.is_empty() {
        anyhow::bail!("--sheet only applies to --mode selected");
    }
    if mode != ModeArg::Targeted && recipe.is_some() {
        anyhow::bail!("--recipe only applies to --mode targeted");
    }

    Ok(match mode {
        ModeArg::All => Mode::AllSheets,
        ModeArg::Selected if sheets.is_empty() => Mode::Selected(None),
        ModeArg::Selected => Mode::Selected(Some(sheets)),
        ModeArg::Targeted => {
            let recipe = match recipe {
                Some(path) => TargetedRecipe::from_path(path)
                    .with_context(|| format!("Failed to load recipe '{}'", path.display()))?,
                None => TargetedRecipe::default(),
            };
            Mode::Targeted(recipe)
        }
    })
}

fn run_format(input: PathBuf, output: Option<PathBuf>, mode: Mode) -> Result<()> {
    let mut job = FormatJob::new(&input).with_mode(mode);
    if let Some(output) = output {
        job = job.with_output(output);
    }

    let report = job
        .run()
        .with_context(|| format!("Failed to format '{}'", input.display()))?;

    eprintln!(
        "Formatted {} sheet(s) [{}] into '{}'",
        report.sheets.len(),
        report.sheets.join(", "),
        report.output.display()
    );
    Ok(())
}

fn list_sheets(input: &Path) -> Result<()> {
    let book = load(input).with_context(|| format!("Failed to open '{}'", input.display()))?;

    for (i, name) in sheet_names(&book).iter().enumerate() {
        let Some(sheet) = book.get_sheet_by_name(name) else {
            continue;
        };
        let summary = SheetSummary::of(sheet);

        let tables: Vec<String> = summary
            .tables
            .iter()
            .map(|(name, reference)| format!("{name}={reference}"))
            .collect();
        println!(
            "{}\t{}\t{}\t{}",
            i,
            summary.name,
            summary.frozen_at.as_deref().unwrap_or("-"),
            if tables.is_empty() {
                "-".to_string()
            } else {
                tables.join(",")
            }
        );
    }

    Ok(())
}

fn print_recipe() -> Result<()> {
    let json = TargetedRecipe::default()
        .to_json_string()
        .context("Failed to serialize recipe")?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_selected_without_sheets_means_all() {
        let mode = build_mode(ModeArg::Selected, Vec::new(), None).unwrap();
        assert_eq!(mode, Mode::Selected(None));
    }

    #[test]
    fn test_selected_keeps_order() {
        let sheets = vec!["common".to_string(), "added".to_string()];
        let mode = build_mode(ModeArg::Selected, sheets.clone(), None).unwrap();
        assert_eq!(mode, Mode::Selected(Some(sheets)));
    }

    #[test]
    fn test_sheet_flag_rejected_outside_selected() {
        assert!(build_mode(ModeArg::All, vec!["a".to_string()], None).is_err());
        assert!(build_mode(ModeArg::All, Vec::new(), Some(Path::new("r.json"))).is_err());
    }

    #[test]
    fn test_targeted_defaults_to_builtin_recipe() {
        let mode = build_mode(ModeArg::Targeted, Vec::new(), None).unwrap();
        assert_eq!(mode, Mode::Targeted(TargetedRecipe::default()));
    }

    #[test]
    fn test_parse_format_arguments() {
        let cli = Cli::try_parse_from([
            "tidy-sheets",
            "format",
            "in.xlsx",
            "-o",
            "out.xlsx",
            "--mode",
            "selected",
            "-s",
            "added",
            "-s",
            "common",
        ])
        .unwrap();

        match cli.command {
            Commands::Format {
                input,
                output,
                mode,
                sheets,
                recipe,
            } => {
                assert_eq!(input, PathBuf::from("in.xlsx"));
                assert_eq!(output, Some(PathBuf::from("out.xlsx")));
                assert_eq!(mode, ModeArg::Selected);
                assert_eq!(sheets, vec!["added", "common"]);
                assert!(recipe.is_none());
            }
            _ => panic!("expected format command"),
        }
    }
}
