//! Spending collector
//!
//! Asks for one amount per real category of a bucket, computes `TOTAL` and
//! `SURPLUS` and writes the entered values into the month row.

use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::error::BudgetResult;
use crate::models::{Bucket, CategorySpend, Spendings, TOTAL_LABEL};
use crate::prompt::Prompter;
use crate::storage::{CellValue, SheetStore};

pub struct SpendingCollector<'a, S: ?Sized, P: ?Sized> {
    store: &'a mut S,
    prompter: &'a mut P,
    config: &'a SessionConfig,
}

impl<'a, S, P> SpendingCollector<'a, S, P>
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

    /// Collect spendings for `bucket` and store them on it
    pub fn collect(&mut self, bucket: &mut Bucket) -> BudgetResult<Spendings> {
        let sheet = bucket.kind.sheet_name();
        let month = self.config.month_label();
        let month_row = self.store.find_row(sheet, month)?;

        let mut remaining = bucket.ceiling;
        let mut entries = Vec::with_capacity(bucket.categories.len());
        for category in bucket.categories.names() {
            self.prompter.message(&format!(
                "Your {} value for {} is: {}",
                bucket.kind.title(),
                month,
                self.config.format_money(remaining)
            ));
            let amount = self
                .prompter
                .input_amount(&format!("Enter value for {}", category))?;
            remaining -= amount;
            entries.push(CategorySpend {
                category: category.clone(),
                amount,
            });
        }

        let spendings = Spendings::compute(bucket.ceiling, entries);

        self.prompter.message(&format!(
            "Updating {} worksheet with passed values...",
            bucket.kind.title()
        ));
        for entry in &spendings.entries {
            let col = self.store.find_col(sheet, &entry.category)?;
            self.store
                .update_cell(sheet, month_row, col, CellValue::Amount(entry.amount))?;
            debug!(bucket = %bucket.kind, category = %entry.category, amount = %entry.amount, "spending written");
        }
        let total_col = self.store.find_col(sheet, TOTAL_LABEL)?;
        self.store
            .update_cell(sheet, month_row, total_col, CellValue::Amount(spendings.total))?;

        self.prompter.message(&format!(
            "{} worksheet updated successfully!\nYour summarized cost for {} is: {}",
            bucket.kind.title(),
            bucket.kind.title(),
            self.config.format_money(spendings.total)
        ));
        info!(
            bucket = %bucket.kind,
            total = %spendings.total,
            surplus = %spendings.surplus,
            "spendings collected"
        );

        bucket.spendings = Some(spendings.clone());
        Ok(spendings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BucketKind, CategorySet, Money};
    use crate::prompt::ScriptedPrompter;
    use crate::storage::{standard_workbook, Workbook};
    use chrono::Month;

    fn store_with_header(labels: &[&str]) -> Workbook {
        let mut store = standard_workbook();
        for (offset, label) in labels.iter().enumerate() {
            store.update_cell("needs", 1, offset + 2, (*label).into()).unwrap();
        }
        store
    }

    #[test]
    fn test_collect_writes_month_row() {
        let mut store = store_with_header(&["Housing", "Food", "TOTAL"]);
        let mut prompter = ScriptedPrompter::new(["800", "500"]);
        let config = SessionConfig::new(Month::February);
        let mut bucket = Bucket::new(
            BucketKind::Needs,
            Money::from_units(1500),
            CategorySet::new(["Housing", "Food"]).unwrap(),
        );

        let spendings = SpendingCollector::new(&mut store, &mut prompter, &config)
            .collect(&mut bucket)
            .unwrap();

        assert_eq!(spendings.total, Money::from_units(1300));
        assert_eq!(spendings.surplus, Money::from_units(200));
        assert_eq!(bucket.surplus(), Some(Money::from_units(200)));

        // February is row 3
        assert_eq!(store.cell("needs", 3, 2).unwrap(), CellValue::Amount(Money::from_units(800)));
        assert_eq!(store.cell("needs", 3, 3).unwrap(), CellValue::Amount(Money::from_units(500)));
        assert_eq!(store.cell("needs", 3, 4).unwrap(), CellValue::Amount(Money::from_units(1300)));
        assert!(store.cell("needs", 3, 5).unwrap().is_empty());
        assert!(prompter.saw("Your Needs value for February is: $700.00"));
    }

    #[test]
    fn test_category_named_after_month_keeps_header() {
        let mut store = store_with_header(&["March", "Food", "TOTAL"]);
        let header_before = store.get_all_values("needs").unwrap()[0].clone();
        let mut prompter = ScriptedPrompter::new(["100", "50"]);
        let config = SessionConfig::new(Month::March);
        let mut bucket = Bucket::new(
            BucketKind::Needs,
            Money::from_units(500),
            CategorySet::new(["March", "Food"]).unwrap(),
        );

        SpendingCollector::new(&mut store, &mut prompter, &config)
            .collect(&mut bucket)
            .unwrap();

        assert_eq!(store.get_all_values("needs").unwrap()[0], header_before);
        // March is row 4
        assert_eq!(store.cell("needs", 4, 1).unwrap(), CellValue::text("March"));
        assert_eq!(store.cell("needs", 4, 2).unwrap(), CellValue::Amount(Money::from_units(100)));
        assert_eq!(store.cell("needs", 4, 3).unwrap(), CellValue::Amount(Money::from_units(50)));
        assert_eq!(store.cell("needs", 4, 4).unwrap(), CellValue::Amount(Money::from_units(150)));
    }

    #[test]
    fn test_collect_without_categories() {
        let mut store = store_with_header(&["TOTAL"]);
        let mut prompter = ScriptedPrompter::default();
        let config = SessionConfig::new(Month::January);
        let mut bucket = Bucket::new(BucketKind::Needs, Money::from_units(900), CategorySet::default());

        let spendings = SpendingCollector::new(&mut store, &mut prompter, &config)
            .collect(&mut bucket)
            .unwrap();

        assert!(spendings.total.is_zero());
        assert_eq!(spendings.surplus, Money::from_units(900));
        assert_eq!(store.cell("needs", 2, 2).unwrap(), CellValue::Amount(Money::zero()));
    }

    #[test]
    fn test_missing_category_column_propagates() {
        let mut store = store_with_header(&["TOTAL"]);
        let mut prompter = ScriptedPrompter::new(["10"]);
        let config = SessionConfig::new(Month::January);
        let mut bucket = Bucket::new(
            BucketKind::Needs,
            Money::from_units(100),
            CategorySet::new(["Housing"]).unwrap(),
        );

        let err = SpendingCollector::new(&mut store, &mut prompter, &config)
            .collect(&mut bucket)
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
