//! Service layer
//!
//! Each service borrows the sheet store, the prompter and the session
//! configuration for the length of one step of a budget pass.

pub mod allocation;
pub mod category_set;
pub mod reconciliation;
pub mod session;
pub mod spending;

pub use allocation::AllocationService;
pub use category_set::{BuildOutcome, CategorySetBuilder, CategorySource};
pub use reconciliation::{Reconciliation, ReconciliationService, SurplusDestination};
pub use session::{BucketReport, BudgetSession, MainMenuChoice, PassOutcome, SessionSummary};
pub use spending::SpendingCollector;
