//! Spending buckets
//!
//! A bucket is one of the two spending groups of a plan (needs or wants). It
//! owns its ceiling, its category set and, once collected, its spendings.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategorySet;
use super::money::Money;
use super::spending::Spendings;

/// Which spending group a bucket represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketKind {
    Needs,
    Wants,
}

impl BucketKind {
    /// Buckets in the order a session processes them
    pub fn all() -> &'static [BucketKind] {
        &[BucketKind::Needs, BucketKind::Wants]
    }

    /// Name of the sheet holding this bucket
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Self::Needs => "needs",
            Self::Wants => "wants",
        }
    }

    /// Capitalized name for prompts
    pub fn title(&self) -> &'static str {
        match self {
            Self::Needs => "Needs",
            Self::Wants => "Wants",
        }
    }
}

impl fmt::Display for BucketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sheet_name())
    }
}

/// A spending bucket for the active month
#[derive(Debug, Clone)]
pub struct Bucket {
    pub kind: BucketKind,
    pub ceiling: Money,
    pub categories: CategorySet,
    pub spendings: Option<Spendings>,
}

impl Bucket {
    pub fn new(kind: BucketKind, ceiling: Money, categories: CategorySet) -> Self {
        Self {
            kind,
            ceiling,
            categories,
            spendings: None,
        }
    }

    /// Surplus of the last collection, if spendings were collected
    pub fn surplus(&self) -> Option<Money> {
        self.spendings.as_ref().map(|s| s.surplus)
    }
}
