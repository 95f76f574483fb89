//! Budget session
//!
//! Drives one month of budgeting: income, plan, then for each bucket the
//! category set, the spendings and the reconciliation. Passes repeat from a
//! main menu until the user quits.

use chrono::Month;
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::display::{format_allocation, format_spendings};
use crate::error::BudgetResult;
use crate::models::{Allocation, Bucket, BucketKind, CategorySet, Money, SavingsBalance, Spendings};
use crate::prompt::Prompter;
use crate::storage::SheetStore;

use super::allocation::AllocationService;
use super::category_set::{BuildOutcome, CategorySetBuilder};
use super::reconciliation::{Reconciliation, ReconciliationService};
use super::spending::SpendingCollector;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    PlanBudget,
    Quit,
}

impl MainMenuChoice {
    pub fn all() -> &'static [MainMenuChoice] {
        &[MainMenuChoice::PlanBudget, MainMenuChoice::Quit]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::PlanBudget => "Plan this month's budget",
            Self::Quit => "Quit",
        }
    }
}

/// What happened to one bucket during a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketReport {
    pub kind: BucketKind,
    pub ceiling: Money,
    pub categories: CategorySet,
    pub spendings: Spendings,
    pub reconciliation: Reconciliation,
}

/// Result of a completed pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub month: Month,
    pub allocation: Allocation,
    pub buckets: Vec<BucketReport>,
    /// Savings after every bucket was reconciled
    pub savings: Money,
}

impl SessionSummary {
    pub fn bucket(&self, kind: BucketKind) -> Option<&BucketReport> {
        self.buckets.iter().find(|b| b.kind == kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    Completed(SessionSummary),
    /// Category management was abandoned; nothing after the allocation ran
    BackToMainMenu,
}

pub struct BudgetSession<'a, S: ?Sized, P: ?Sized> {
    store: &'a mut S,
    prompter: &'a mut P,
    config: &'a SessionConfig,
}

impl<'a, S, P> BudgetSession<'a, S, P>
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

    /// Show the main menu until the user quits.
    ///
    /// Returns the summaries of all completed passes. An insufficient savings
    /// error ends the session immediately; writes made before it remain.
    pub fn run(&mut self) -> BudgetResult<Vec<SessionSummary>> {
        let labels: Vec<String> = MainMenuChoice::all()
            .iter()
            .map(|c| c.label().to_string())
            .collect();
        let mut completed = Vec::new();

        loop {
            let index = self.prompter.select("What would you like to do?", &labels)?;
            match MainMenuChoice::all()[index] {
                MainMenuChoice::Quit => break,
                MainMenuChoice::PlanBudget => match self.run_pass()? {
                    PassOutcome::BackToMainMenu => {
                        info!("pass abandoned, back to main menu");
                    }
                    PassOutcome::Completed(summary) => {
                        completed.push(summary);
                        if !self.prompter.confirm("Do you want to go back to main menu?")? {
                            break;
                        }
                    }
                },
            }
        }

        info!(passes = completed.len(), "session finished");
        Ok(completed)
    }

    /// Run a single pass from income entry to the last reconciliation
    pub fn run_pass(&mut self) -> BudgetResult<PassOutcome> {
        let allocation = {
            let mut service =
                AllocationService::new(&mut *self.store, &mut *self.prompter, self.config);
            let income = service.collect_income()?;
            let plan = service.choose_plan()?;
            let allocation = Allocation::new(income, plan);
            service.record(&allocation)?;
            allocation
        };
        if !allocation.rounding_drift().is_zero() {
            debug!(drift = %allocation.rounding_drift(), "allocation rounding drift");
        }
        self.prompter
            .message(&format_allocation(&allocation, self.config));

        let mut savings = SavingsBalance::new(allocation.savings);
        let mut buckets = Vec::with_capacity(BucketKind::all().len());

        for &kind in BucketKind::all() {
            let outcome =
                CategorySetBuilder::new(&mut *self.store, &mut *self.prompter, self.config)
                    .build(kind)?;
            let categories = match outcome {
                BuildOutcome::Built(set) => set,
                BuildOutcome::BackToMainMenu => return Ok(PassOutcome::BackToMainMenu),
            };

            let mut bucket = Bucket::new(kind, allocation.ceiling(kind), categories);
            let spendings =
                SpendingCollector::new(&mut *self.store, &mut *self.prompter, self.config)
                    .collect(&mut bucket)?;
            self.prompter.message(&format_spendings(
                kind,
                bucket.ceiling,
                &spendings,
                self.config,
            ));

            let reconciliation =
                ReconciliationService::new(&mut *self.store, &mut *self.prompter, self.config)
                    .reconcile(kind, spendings.surplus, &mut savings)?;

            buckets.push(BucketReport {
                kind,
                ceiling: bucket.ceiling,
                categories: bucket.categories,
                spendings,
                reconciliation,
            });
        }

        info!(
            month = self.config.month_label(),
            savings = %savings.amount(),
            "budget pass completed"
        );
        Ok(PassOutcome::Completed(SessionSummary {
            month: self.config.month,
            allocation,
            buckets,
            savings: savings.amount(),
        }))
    }
}
