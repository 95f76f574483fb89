//! Display formatting for terminal output
//!
//! Renders allocations, spendings and raw sheets as tables.

pub mod allocation;
pub mod sheet;
pub mod spending;

pub use allocation::format_allocation;
pub use sheet::format_sheet;
pub use spending::format_spendings;
