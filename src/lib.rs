//! budget-sheets - terminal budget planner backed by a spreadsheet-style workbook
//!
//! Splits a monthly income into needs, wants and savings with a fixed plan,
//! collects per-category spendings and settles every bucket's surplus or
//! deficit against savings.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, persisted settings and the per-session configuration
//! - `error`: Custom error types
//! - `models`: Money, plans, buckets, category sets, spendings and savings
//! - `storage`: The sheet store abstraction and its JSON-backed workbook
//! - `prompt`: Interactive input (terminal and scripted)
//! - `services`: Allocation, category building, spending collection,
//!   reconciliation and the session loop
//! - `display` / `export`: Tables for the terminal and CSV output
//! - `cli`: Command handlers used by the `budget` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_sheets::config::{BudgetPaths, SessionConfig, Settings};
//! use budget_sheets::prompt::TerminalPrompter;
//! use budget_sheets::services::BudgetSession;
//! use budget_sheets::storage::JsonWorkbookStore;
//!
//! let paths = BudgetPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let config = SessionConfig::from_settings(&settings)?;
//! let mut store = JsonWorkbookStore::open(paths.workbook_file())?;
//! let mut prompter = TerminalPrompter::new();
//! BudgetSession::new(&mut store, &mut prompter, &config).run()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod prompt;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
