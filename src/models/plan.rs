//! Budget plans and the allocation they produce
//!
//! A plan is a fixed split of income into needs, wants and savings. Shares are
//! whole percentages so the split can be computed on cents without floats.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::bucket::BucketKind;
use super::money::Money;

/// Percent shares of a plan. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanShares {
    pub needs: u32,
    pub wants: u32,
    pub savings: u32,
}

/// A supported budget plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plan {
    /// 50% needs, 30% wants, 20% savings
    #[serde(rename = "50/30/20")]
    FiftyThirtyTwenty,
    /// 70% needs, 20% wants, 10% savings
    #[serde(rename = "70/20/10")]
    SeventyTwentyTen,
}

impl Plan {
    /// Every supported plan, in menu order
    pub fn all() -> &'static [Plan] {
        &[Plan::FiftyThirtyTwenty, Plan::SeventyTwentyTen]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FiftyThirtyTwenty => "50/30/20",
            Self::SeventyTwentyTen => "70/20/10",
        }
    }

    pub fn shares(&self) -> PlanShares {
        match self {
            Self::FiftyThirtyTwenty => PlanShares {
                needs: 50,
                wants: 30,
                savings: 20,
            },
            Self::SeventyTwentyTen => PlanShares {
                needs: 70,
                wants: 20,
                savings: 10,
            },
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An entry of the plan selection menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanChoice {
    Plan(Plan),
    /// Shows the explanation and returns to the menu
    About,
}

impl PlanChoice {
    /// Menu entries: the given plans, then the informational entry
    pub fn menu(plans: &[Plan]) -> Vec<PlanChoice> {
        plans
            .iter()
            .copied()
            .map(PlanChoice::Plan)
            .chain(std::iter::once(PlanChoice::About))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Plan(plan) => plan.label(),
            Self::About => "About plans",
        }
    }
}

/// Explanation shown for the "About plans" entry
pub const ABOUT_PLANS: &str = "\
The 50/30/20 rule is a money management technique that divides your income into three categories:
50% Needs (essentials)
30% Wants (non-essentials)
20% Savings

By default this app provides the following sub-categories:
Needs: Housing, Vehicle, Insurance, Food and Banking
Wants: Entertainment, Wellbeing and Travel
Savings is meant to be left untouched and used only when there is an absolute need for it.
It covers unexpected costs and any overspend in needs or wants.

The 70/20/10 rule is a less saving-oriented split:
70% Needs
20% Wants
10% Savings
";

/// Monetary ceilings derived from income and a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    pub plan: Plan,
    pub income: Money,
    pub needs: Money,
    pub wants: Money,
    pub savings: Money,
}

impl Allocation {
    /// Split income by the plan's shares, each rounded to one decimal place
    pub fn new(income: Money, plan: Plan) -> Self {
        let shares = plan.shares();
        Self {
            plan,
            income,
            needs: income.tenth_rounded_share(shares.needs),
            wants: income.tenth_rounded_share(shares.wants),
            savings: income.tenth_rounded_share(shares.savings),
        }
    }

    /// Ceiling for a spending bucket
    pub fn ceiling(&self, kind: BucketKind) -> Money {
        match kind {
            BucketKind::Needs => self.needs,
            BucketKind::Wants => self.wants,
        }
    }

    /// Difference between income and the rounded parts
    pub fn rounding_drift(&self) -> Money {
        self.income - (self.needs + self.wants + self.savings)
    }
}
