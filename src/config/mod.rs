//! Configuration module for budget-sheets
//!
//! This module provides configuration management including:
//! - Path resolution
//! - User settings persistence
//! - The per-run session configuration

pub mod paths;
pub mod session;
pub mod settings;

pub use paths::BudgetPaths;
pub use session::SessionConfig;
pub use settings::Settings;
