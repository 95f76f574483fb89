//! Allocation service
//!
//! Collects the monthly income, lets the user pick a plan and records the
//! resulting split in the general sheet.

use tracing::info;

use crate::config::SessionConfig;
use crate::error::BudgetResult;
use crate::models::{Allocation, Money, Plan, PlanChoice, ABOUT_PLANS};
use crate::prompt::Prompter;
use crate::storage::{CellValue, SheetStore, GENERAL_SHEET, INCOME_COLUMN, SAVINGS_COLUMN};

/// Service for income and plan selection
pub struct AllocationService<'a, S: ?Sized, P: ?Sized> {
    store: &'a mut S,
    prompter: &'a mut P,
    config: &'a SessionConfig,
}

impl<'a, S, P> AllocationService<'a, S, P>
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

    /// Ask for the monthly income until a non-negative amount is given
    pub fn collect_income(&mut self) -> BudgetResult<Money> {
        loop {
            let income = self
                .prompter
                .input_amount("Enter your monthly income (after tax)")?;
            if !income.is_negative() {
                return Ok(income);
            }
            self.prompter.message("Income cannot be negative. Try again.");
        }
    }

    /// Ask for a plan; "About plans" explains them and asks again
    pub fn choose_plan(&mut self) -> BudgetResult<Plan> {
        let choices = PlanChoice::menu(self.config.plans());
        let labels: Vec<String> = choices.iter().map(|c| c.label().to_string()).collect();

        loop {
            let index = self
                .prompter
                .select("Please select which budget plan you choose", &labels)?;
            match choices[index] {
                PlanChoice::Plan(plan) => return Ok(plan),
                PlanChoice::About => self.prompter.message(ABOUT_PLANS),
            }
        }
    }

    /// Persist income and the initial savings figure for the active month
    pub fn record(&mut self, allocation: &Allocation) -> BudgetResult<()> {
        let month = self.config.month_label();

        self.prompter.message("Updating monthly income in worksheet...");
        self.store.update_labelled(
            GENERAL_SHEET,
            month,
            INCOME_COLUMN,
            CellValue::Amount(allocation.income),
        )?;
        self.store.update_labelled(
            GENERAL_SHEET,
            month,
            SAVINGS_COLUMN,
            CellValue::Amount(allocation.savings),
        )?;
        self.prompter.message("Monthly income updated successfully!");

        info!(
            month,
            plan = %allocation.plan,
            income = %allocation.income,
            needs = %allocation.needs,
            wants = %allocation.wants,
            savings = %allocation.savings,
            "allocation recorded"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use crate::storage::{standard_workbook, Workbook};
    use chrono::Month;

    fn setup(answers: &[&str]) -> (Workbook, ScriptedPrompter, SessionConfig) {
        (
            standard_workbook(),
            ScriptedPrompter::new(answers.iter().copied()),
            SessionConfig::new(Month::March),
        )
    }

    #[test]
    fn test_about_loops_back_to_menu() {
        let (mut store, mut prompter, config) = setup(&["About plans", "About plans", "70/20/10"]);
        let plan = AllocationService::new(&mut store, &mut prompter, &config)
            .choose_plan()
            .unwrap();
        assert_eq!(plan, Plan::SeventyTwentyTen);
        assert_eq!(
            prompter
                .transcript()
                .iter()
                .filter(|line| line.contains("The 70/20/10 rule"))
                .count(),
            2
        );
    }

    #[test]
    fn test_negative_income_is_reprompted() {
        let (mut store, mut prompter, config) = setup(&["-10", "2500"]);
        let income = AllocationService::new(&mut store, &mut prompter, &config)
            .collect_income()
            .unwrap();
        assert_eq!(income, Money::from_units(2500));
        assert!(prompter.saw("cannot be negative"));
    }

    #[test]
    fn test_record_writes_income_and_savings() {
        let (mut store, mut prompter, config) = setup(&[]);
        let allocation = Allocation::new(Money::from_units(3000), Plan::FiftyThirtyTwenty);
        AllocationService::new(&mut store, &mut prompter, &config)
            .record(&allocation)
            .unwrap();

        // March is row 4; income in column 2, savings in column 3
        assert_eq!(
            store.cell(GENERAL_SHEET, 4, 2).unwrap(),
            CellValue::Amount(Money::from_units(3000))
        );
        assert_eq!(
            store.cell(GENERAL_SHEET, 4, 3).unwrap(),
            CellValue::Amount(Money::from_units(600))
        );
    }
}
