//! `budget init`

use tracing::info;

use crate::config::{BudgetPaths, Settings};
use crate::error::{BudgetError, BudgetResult};
use crate::storage::{standard_workbook, JsonWorkbookStore, SheetStore};

/// Create the settings file and a workbook with the standard layout
pub fn handle_init(paths: &BudgetPaths, settings: &Settings, force: bool) -> BudgetResult<()> {
    if paths.is_initialized() && !force {
        return Err(BudgetError::Validation(format!(
            "A workbook already exists at {}. Use --force to replace it.",
            paths.workbook_file().display()
        )));
    }

    println!("Initializing budget-sheets at: {}", paths.base_dir().display());
    settings.save(paths)?;
    let store = JsonWorkbookStore::create(paths.workbook_file(), standard_workbook())?;
    info!(path = %store.path().display(), force, "workbook created");

    println!("Initialization complete!");
    println!();
    println!("Sheets created: {}", store.workbook().sheet_names().join(", "));
    println!("Run 'budget' to plan this month's budget.");
    Ok(())
}
