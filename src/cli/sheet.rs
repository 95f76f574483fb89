//! Non-interactive sheet commands: show, export and clear-month

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use tracing::info;

use crate::config::{BudgetPaths, SessionConfig, Settings};
use crate::display::format_sheet;
use crate::error::BudgetResult;
use crate::export::export_sheet_csv;
use crate::models::period::{month_label, parse_month};
use crate::storage::{CellValue, SheetStore};

use super::open_store;

/// Print a sheet as a table
pub fn handle_show(paths: &BudgetPaths, sheet: &str) -> BudgetResult<()> {
    let store = open_store(paths)?;
    println!("{}", format_sheet(store.workbook().sheet(sheet)?));
    Ok(())
}

/// Write a sheet as CSV to `output`, or to stdout
pub fn handle_export(paths: &BudgetPaths, sheet: &str, output: Option<PathBuf>) -> BudgetResult<()> {
    let store = open_store(paths)?;
    let sheet = store.workbook().sheet(sheet)?;

    match output {
        Some(path) => {
            let file = File::create(&path)?;
            export_sheet_csv(sheet, BufWriter::new(file))?;
            info!(sheet = %sheet.name, path = %path.display(), "sheet exported");
            println!("Exported '{}' to {}", sheet.name, path.display());
        }
        None => export_sheet_csv(sheet, std::io::stdout().lock())?,
    }
    Ok(())
}

/// Erase one month's row of a sheet, keeping the month label in column A
pub fn handle_clear_month(
    paths: &BudgetPaths,
    settings: &Settings,
    sheet: &str,
    month: Option<String>,
) -> BudgetResult<()> {
    let month = match month {
        Some(name) => parse_month(&name)?,
        None => SessionConfig::from_settings(settings)?.month,
    };
    let label = month_label(month);

    let mut store = open_store(paths)?;
    let row = store.find_row(sheet, label)?;
    store.batch_clear_row(sheet, row)?;
    store.update_cell(sheet, row, 1, CellValue::text(label))?;

    info!(sheet, month = label, row, "month row cleared");
    println!("Cleared {} in '{}'", label, sheet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::handle_init;
    use crate::models::Money;
    use crate::storage::JsonWorkbookStore;
    use tempfile::TempDir;

    fn initialized() -> (TempDir, BudgetPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        handle_init(&paths, &Settings::default(), false).unwrap();
        (temp_dir, paths)
    }

    #[test]
    fn test_clear_month_keeps_label() {
        let (_temp_dir, paths) = initialized();
        {
            let mut store = JsonWorkbookStore::open(paths.workbook_file()).unwrap();
            store
                .update_labelled("general", "April", "monthly income", Money::from_units(2000).into())
                .unwrap();
        }

        handle_clear_month(&paths, &Settings::default(), "general", Some("april".into())).unwrap();

        let store = JsonWorkbookStore::open(paths.workbook_file()).unwrap();
        assert_eq!(store.workbook().cell("general", 5, 1).unwrap(), CellValue::text("April"));
        assert!(store.workbook().cell("general", 5, 2).unwrap().is_empty());
    }

    #[test]
    fn test_clear_month_ignores_header_with_month_name() {
        let (_temp_dir, paths) = initialized();
        {
            let mut store = JsonWorkbookStore::open(paths.workbook_file()).unwrap();
            store.update_cell("needs", 1, 2, CellValue::text("May")).unwrap();
        }

        handle_clear_month(&paths, &Settings::default(), "needs", Some("may".into())).unwrap();

        let store = JsonWorkbookStore::open(paths.workbook_file()).unwrap();
        assert_eq!(store.workbook().cell("needs", 1, 2).unwrap(), CellValue::text("May"));
        assert_eq!(store.workbook().cell("needs", 6, 1).unwrap(), CellValue::text("May"));
    }

    #[test]
    fn test_export_to_file() {
        let (temp_dir, paths) = initialized();
        let output = temp_dir.path().join("needs.csv");

        handle_export(&paths, "needs", Some(output.clone())).unwrap();

        let text = std::fs::read_to_string(output).unwrap();
        assert!(text.starts_with("month\nJanuary\n"));
        assert!(text.ends_with("December\n"));
    }

    #[test]
    fn test_unknown_sheet() {
        let (_temp_dir, paths) = initialized();
        let err = handle_show(&paths, "savings").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_uninitialized_workbook() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert!(handle_show(&paths, "general").is_err());
    }
}
