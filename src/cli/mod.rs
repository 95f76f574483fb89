//! CLI command handlers
//!
//! Bridges clap argument parsing in `main` with the storage and service
//! layers.

pub mod init;
pub mod session;
pub mod sheet;

pub use init::handle_init;
pub use session::handle_run;
pub use sheet::{handle_clear_month, handle_export, handle_show};

use crate::config::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::storage::JsonWorkbookStore;

/// Open the workbook, failing with a hint when `init` has not been run
pub fn open_store(paths: &BudgetPaths) -> BudgetResult<JsonWorkbookStore> {
    if !paths.is_initialized() {
        return Err(BudgetError::Config(format!(
            "No workbook found at {}. Run 'budget init' first.",
            paths.workbook_file().display()
        )));
    }
    JsonWorkbookStore::open(paths.workbook_file())
}
