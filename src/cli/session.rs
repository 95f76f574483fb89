//! `budget run`, the interactive session

use tracing::info;

use crate::config::{BudgetPaths, SessionConfig, Settings};
use crate::error::BudgetResult;
use crate::prompt::TerminalPrompter;
use crate::services::BudgetSession;

use super::open_store;

/// Run the interactive budget session against the workbook on disk
pub fn handle_run(paths: &BudgetPaths, settings: &Settings) -> BudgetResult<()> {
    let mut store = open_store(paths)?;
    let config = SessionConfig::from_settings(settings)?;
    let mut prompter = TerminalPrompter::new();

    info!(month = config.month_label(), workbook = %paths.workbook_file().display(), "starting session");
    let summaries = BudgetSession::new(&mut store, &mut prompter, &config).run()?;

    for summary in &summaries {
        println!(
            "{} budget saved ({} plan). Savings: {}",
            config.month_label(),
            summary.allocation.plan,
            config.format_money(summary.savings)
        );
    }
    println!("Goodbye!");
    Ok(())
}
