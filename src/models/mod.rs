//! Core data models for budget-sheets
//!
//! This module contains the data structures of the budgeting domain: money,
//! plans and allocations, buckets, category sets, spendings and savings.

pub mod bucket;
pub mod category;
pub mod money;
pub mod period;
pub mod plan;
pub mod savings;
pub mod spending;

pub use bucket::{Bucket, BucketKind};
pub use category::{
    CategorySet, CategoryValidationError, CATEGORY_DELIMITER, SURPLUS_LABEL, TOTAL_LABEL,
};
pub use money::{Money, MoneyParseError};
pub use plan::{Allocation, Plan, PlanChoice, PlanShares, ABOUT_PLANS};
pub use savings::SavingsBalance;
pub use spending::{CategorySpend, Spendings};
