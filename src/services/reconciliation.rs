//! Reconciliation service
//!
//! Settles a bucket's surplus against savings. A deficit is taken out of
//! savings, or ends the session when savings are too small. A surplus goes to
//! savings or to the discretionary balance, as the user chooses.

use std::fmt;

use tracing::{error, info};

use crate::config::SessionConfig;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BucketKind, Money, SavingsBalance, SURPLUS_LABEL, TOTAL_LABEL};
use crate::prompt::Prompter;
use crate::storage::{CellValue, SheetStore, DISCRETIONARY_COLUMN, GENERAL_SHEET, SAVINGS_COLUMN};

/// Where a positive surplus goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurplusDestination {
    Savings,
    Discretionary,
}

impl SurplusDestination {
    pub fn all() -> &'static [SurplusDestination] {
        &[SurplusDestination::Savings, SurplusDestination::Discretionary]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Savings => "Add to Savings",
            Self::Discretionary => "Move to Discretionary",
        }
    }
}

/// What a reconciliation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Deficit taken out of savings; holds the new savings balance
    DeficitCovered { savings: Money },
    /// Surplus added to savings; holds the new savings balance
    AddedToSavings { savings: Money },
    /// Surplus written as the discretionary balance
    MovedToDiscretionary { amount: Money },
}

impl fmt::Display for Reconciliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeficitCovered { savings } => {
                write!(f, "deficit covered from savings, savings now {}", savings)
            }
            Self::AddedToSavings { savings } => {
                write!(f, "surplus added to savings, savings now {}", savings)
            }
            Self::MovedToDiscretionary { amount } => {
                write!(f, "{} moved to discretionary", amount)
            }
        }
    }
}

pub struct ReconciliationService<'a, S: ?Sized, P: ?Sized> {
    store: &'a mut S,
    prompter: &'a mut P,
    config: &'a SessionConfig,
}

impl<'a, S, P> ReconciliationService<'a, S, P>
where
    S: SheetStore + ?Sized,
    P: Prompter + ?Sized,
{
    pub fn new(store: &'a mut S, prompter: &'a mut P, config: &'a SessionConfig) -> Self {
        Self {
            store,
            prompter,
            config,
        }
    }

    /// Settle `surplus` of one bucket against `savings`
    ///
    /// # Errors
    ///
    /// `InsufficientSavings` when the deficit exceeds savings. Nothing is
    /// written in that case and `savings` is unchanged.
    pub fn reconcile(
        &mut self,
        kind: BucketKind,
        surplus: Money,
        savings: &mut SavingsBalance,
    ) -> BudgetResult<Reconciliation> {
        if surplus.is_negative() {
            return self.cover_deficit(kind, surplus, savings);
        }

        let labels: Vec<String> = SurplusDestination::all()
            .iter()
            .map(|d| d.label().to_string())
            .collect();
        let index = self.prompter.select(
            &format!(
                "Your {} surplus is {}. Where should it go?",
                kind.title(),
                self.config.format_money(surplus)
            ),
            &labels,
        )?;

        let outcome = match SurplusDestination::all()[index] {
            SurplusDestination::Savings => {
                let balance = savings.deposit(surplus);
                self.write_general(SAVINGS_COLUMN, balance)?;
                Reconciliation::AddedToSavings { savings: balance }
            }
            SurplusDestination::Discretionary => {
                self.write_general(DISCRETIONARY_COLUMN, surplus)?;
                Reconciliation::MovedToDiscretionary { amount: surplus }
            }
        };
        self.write_surplus_cell(kind, CellValue::Empty)?;

        info!(bucket = %kind, %surplus, outcome = %outcome, "surplus reconciled");
        Ok(outcome)
    }

    fn cover_deficit(
        &mut self,
        kind: BucketKind,
        surplus: Money,
        savings: &mut SavingsBalance,
    ) -> BudgetResult<Reconciliation> {
        let Some(balance) = savings.cover_deficit(surplus) else {
            error!(bucket = %kind, deficit = %surplus.abs(), savings = %savings.amount(), "savings cannot cover deficit");
            return Err(BudgetError::InsufficientSavings {
                bucket: kind,
                deficit: surplus.abs(),
                savings: savings.amount(),
            });
        };

        self.write_surplus_cell(kind, CellValue::Amount(Money::zero()))?;
        self.write_general(SAVINGS_COLUMN, balance)?;
        self.prompter.message(&format!(
            "Your {} overspend of {} was covered from savings. Savings left: {}",
            kind.title(),
            self.config.format_money(surplus.abs()),
            self.config.format_money(balance)
        ));

        info!(bucket = %kind, %surplus, savings = %balance, "deficit covered from savings");
        Ok(Reconciliation::DeficitCovered { savings: balance })
    }

    fn write_general(&mut self, column: &str, amount: Money) -> BudgetResult<()> {
        self.store.update_labelled(
            GENERAL_SHEET,
            self.config.month_label(),
            column,
            CellValue::Amount(amount),
        )
    }

    /// The surplus column is not part of the written header; when no
    /// `SURPLUS` label exists it is the column right after `TOTAL`.
    fn write_surplus_cell(&mut self, kind: BucketKind, value: CellValue) -> BudgetResult<()> {
        let sheet = kind.sheet_name();
        let row = self.store.find_row(sheet, self.config.month_label())?;
        let col = match self.store.find_col(sheet, SURPLUS_LABEL) {
            Ok(col) => col,
            Err(e) if e.is_not_found() => self.store.find_col(sheet, TOTAL_LABEL)? + 1,
            Err(e) => return Err(e),
        };
        self.store.update_cell(sheet, row, col, value)
    }
}
