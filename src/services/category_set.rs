//! Category set builder
//!
//! Resolves the categories of a bucket from the defaults, from user entry or
//! from the labels already present in the bucket's sheet. New sets are
//! written into the sheet header; fetched sets keep the header as it is.

use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::error::BudgetResult;
use crate::models::category::{capitalize_name, validate_category_name};
use crate::models::{BucketKind, CategorySet, CategoryValidationError, TOTAL_LABEL};
use crate::prompt::Prompter;
use crate::storage::{CellValue, SheetStore, MONTH_HEADER};

/// Answer that ends custom category entry
const FINISH_TOKEN: &str = "q";

/// Entries of the category menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySource {
    Default,
    Customize,
    FetchFromStore,
    BackToMainMenu,
}

impl CategorySource {
    pub fn all() -> &'static [CategorySource] {
        &[
            CategorySource::Default,
            CategorySource::Customize,
            CategorySource::FetchFromStore,
            CategorySource::BackToMainMenu,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Default Categories",
            Self::Customize => "Customize Categories",
            Self::FetchFromStore => "Get Categories from Spreadsheet",
            Self::BackToMainMenu => "Back to Main Menu",
        }
    }
}

/// Result of the category menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Built(CategorySet),
    /// The user abandoned category management; the session starts over
    BackToMainMenu,
}

/// Builds the category set of a bucket
pub struct CategorySetBuilder<'a, S: ?Sized, P: ?Sized> {
    store: &'a mut S,
    prompter: &'a mut P,
    config: &'a SessionConfig,
}

impl<'a, S, P> CategorySetBuilder<'a, S, P>
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

    /// Run the category menu until a set is built or the user backs out
    pub fn build(&mut self, kind: BucketKind) -> BudgetResult<BuildOutcome> {
        let labels: Vec<String> = CategorySource::all()
            .iter()
            .map(|s| s.label().to_string())
            .collect();

        loop {
            let index = self.prompter.select(
                &format!("Select how do you want to manage your {}", kind.title()),
                &labels,
            )?;
            let source = CategorySource::all()[index];

            let set = match source {
                CategorySource::BackToMainMenu => return Ok(BuildOutcome::BackToMainMenu),
                CategorySource::FetchFromStore => match self.fetch_from_store(kind)? {
                    Some(set) => {
                        // existing columns stay where they are
                        self.ensure_total_column(kind)?;
                        info!(bucket = %kind, source = ?source, categories = %set, "category set built");
                        return Ok(BuildOutcome::Built(set));
                    }
                    None => {
                        self.prompter.message(&format!(
                            "Your categories are empty. Use Default or customize {} categories yourself.",
                            kind.title()
                        ));
                        continue;
                    }
                },
                CategorySource::Default | CategorySource::Customize => {
                    self.prompter.message(&format!(
                        "{} will delete all values in the {} worksheet.",
                        source.label(),
                        kind.title()
                    ));
                    if !self.prompter.confirm("Do you want to continue?")? {
                        continue;
                    }
                    self.clear_sheet(kind)?;
                    let set = if source == CategorySource::Default {
                        self.config.default_categories(kind).clone()
                    } else {
                        self.enter_custom()?
                    };
                    self.write_header(kind, &set)?;
                    set
                }
            };

            info!(bucket = %kind, source = ?source, categories = %set, "category set built");
            return Ok(BuildOutcome::Built(set));
        }
    }

    /// Read category labels from the sheet header, skipping `TOTAL`
    pub fn fetch_from_store(&mut self, kind: BucketKind) -> BudgetResult<Option<CategorySet>> {
        let rows = self.store.get_all_values(kind.sheet_name())?;
        let header = rows.first().map(Vec::as_slice).unwrap_or_default();
        let set = CategorySet::from_header_labels(header.iter().skip(1).map(|c| c.to_string()));

        debug!(bucket = %kind, found = set.len(), "fetched categories from sheet");
        Ok(if set.is_empty() { None } else { Some(set) })
    }

    /// Append a `TOTAL` label after the last header label when none exists
    fn ensure_total_column(&mut self, kind: BucketKind) -> BudgetResult<()> {
        let sheet = kind.sheet_name();
        match self.store.find_col(sheet, TOTAL_LABEL) {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => {
                let rows = self.store.get_all_values(sheet)?;
                let last = rows
                    .first()
                    .and_then(|header| header.iter().rposition(|cell| !cell.is_empty()))
                    .map_or(1, |index| index + 1);
                debug!(bucket = %kind, col = last + 1, "appending TOTAL column");
                self.store
                    .update_cell(sheet, 1, last + 1, CellValue::text(TOTAL_LABEL))
            }
            Err(e) => Err(e),
        }
    }

    /// Wipe the sheet, keeping only the labels of column A
    pub fn clear_sheet(&mut self, kind: BucketKind) -> BudgetResult<()> {
        let sheet = kind.sheet_name();
        self.prompter
            .message(&format!("Erasing {} worksheet...", kind.title()));

        let first_column: Vec<Vec<CellValue>> = self
            .store
            .get_all_values(sheet)?
            .into_iter()
            .map(|row| vec![row.into_iter().next().unwrap_or_default()])
            .collect();

        self.store.clear(sheet)?;
        self.store.insert_rows(sheet, first_column)?;

        self.prompter
            .message(&format!("{} worksheet is now empty.", kind.title()));
        info!(bucket = %kind, "sheet cleared");
        Ok(())
    }

    /// Write real names and `TOTAL` into the header row from column B on
    pub fn write_header(&mut self, kind: BucketKind, set: &CategorySet) -> BudgetResult<()> {
        let sheet = kind.sheet_name();
        self.prompter
            .message(&format!("Updating {} worksheet...", kind.title()));

        let header_row = self.store.find(sheet, MONTH_HEADER)?.row;
        let labels = set.header_labels();
        for (offset, label) in labels.iter().enumerate() {
            self.store
                .update_cell(sheet, header_row, offset + 2, CellValue::text(label.as_str()))?;
        }

        // Drop leftovers of a longer header
        let rows = self.store.get_all_values(sheet)?;
        let width = rows.get(header_row - 1).map(Vec::len).unwrap_or(0);
        for col in (labels.len() + 2)..=width {
            if !rows[header_row - 1][col - 1].is_empty() {
                self.store.update_cell(sheet, header_row, col, CellValue::Empty)?;
            }
        }

        self.prompter
            .message(&format!("{} worksheet updated successfully!", kind.title()));
        Ok(())
    }

    /// Collect one category per answer until the user types `q`
    fn enter_custom(&mut self) -> BudgetResult<CategorySet> {
        self.prompter.message(
            "Enter your categories WITHOUT whitespaces such as spaces or tabs.\n\
             Every entry should be for ONE category only! DO NOT use commas (,).\n\
             Example: Vehicle",
        );

        let validator = |input: &str| -> Result<(), String> {
            if input.eq_ignore_ascii_case(FINISH_TOKEN) {
                return Ok(());
            }
            validate_category_name(input).map_err(|e| e.to_string())
        };

        let mut set = CategorySet::default();
        loop {
            let answer = self.prompter.input_text(
                "Enter your category and hit Enter. If you finish, type 'q' and hit Enter",
                &validator,
            )?;

            if answer.eq_ignore_ascii_case(FINISH_TOKEN) {
                if set.is_empty() {
                    self.prompter
                        .message("You did not enter any category! Try again.");
                    continue;
                }
                return Ok(set);
            }

            match set.push(capitalize_name(&answer)) {
                Ok(()) => {}
                Err(CategoryValidationError::Duplicate(name)) => {
                    self.prompter
                        .message(&format!("{} is already on your list.", name));
                }
                Err(e) => self.prompter.message(&e.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::prompt::ScriptedPrompter;
    use crate::storage::{standard_workbook, Workbook};
    use chrono::Month;

    fn config() -> SessionConfig {
        SessionConfig::new(Month::January)
    }

    fn header(store: &Workbook, kind: BucketKind) -> Vec<String> {
        store.get_all_values(kind.sheet_name()).unwrap()[0]
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn test_default_categories_written_to_header() {
        let mut store = standard_workbook();
        let mut prompter = ScriptedPrompter::new(["Default Categories", "yes"]);
        let config = config();

        let outcome = CategorySetBuilder::new(&mut store, &mut prompter, &config)
            .build(BucketKind::Needs)
            .unwrap();

        let BuildOutcome::Built(set) = outcome else {
            panic!("expected a category set");
        };
        assert_eq!(
            set.to_string(),
            "Housing,Vehicle,Insurance,Food,Banking,TOTAL,SURPLUS"
        );
        assert_eq!(
            header(&store, BucketKind::Needs),
            vec!["month", "Housing", "Vehicle", "Insurance", "Food", "Banking", "TOTAL"]
        );
    }

    #[test]
    fn test_declined_clear_returns_to_menu_without_changes() {
        let mut store = standard_workbook();
        store
            .update_cell("wants", 2, 2, CellValue::Amount(Money::from_units(7)))
            .unwrap();
        let before = store.clone();

        let mut prompter = ScriptedPrompter::new(["Default Categories", "no", "Back to Main Menu"]);
        let config = config();
        let outcome = CategorySetBuilder::new(&mut store, &mut prompter, &config)
            .build(BucketKind::Wants)
            .unwrap();

        assert_eq!(outcome, BuildOutcome::BackToMainMenu);
        assert_eq!(store, before);
    }

    #[test]
    fn test_clear_keeps_month_column() {
        let mut store = standard_workbook();
        store.update_cell("needs", 1, 2, "Old".into()).unwrap();
        store
            .update_cell("needs", 2, 2, CellValue::Amount(Money::from_units(50)))
            .unwrap();

        let mut prompter = ScriptedPrompter::default();
        let config = config();
        CategorySetBuilder::new(&mut store, &mut prompter, &config)
            .clear_sheet(BucketKind::Needs)
            .unwrap();

        let rows = store.get_all_values("needs").unwrap();
        assert_eq!(rows.len(), 13);
        assert!(rows.iter().all(|r| r.len() == 1));
        assert_eq!(rows[0][0], CellValue::text("month"));
        assert_eq!(rows[12][0], CellValue::text("December"));
    }

    #[test]
    fn test_customize_validates_and_capitalizes() {
        let mut store = standard_workbook();
        let mut prompter = ScriptedPrompter::new([
            "Customize Categories",
            "yes",
            "q",           // nothing entered yet
            "car loan",    // whitespace, re-prompted
            "rent,food",   // comma, re-prompted
            "rENT",
            "gym",
            "rent",        // duplicate after capitalization
            "Q",
        ]);
        let config = config();

        let outcome = CategorySetBuilder::new(&mut store, &mut prompter, &config)
            .build(BucketKind::Wants)
            .unwrap();

        assert_eq!(
            outcome,
            BuildOutcome::Built(CategorySet::new(["Rent", "Gym"]).unwrap())
        );
        assert!(prompter.saw("You did not enter any category!"));
        assert!(prompter.saw("Rent is already on your list."));
        assert_eq!(header(&store, BucketKind::Wants), vec!["month", "Rent", "Gym", "TOTAL"]);
    }

    #[test]
    fn test_fetch_skips_total_and_does_not_clear() {
        let mut store = standard_workbook();
        for (col, label) in ["Rent", "Gym", "TOTAL"].iter().enumerate() {
            store.update_cell("wants", 1, col + 2, (*label).into()).unwrap();
        }
        store
            .update_cell("wants", 2, 2, CellValue::Amount(Money::from_units(900)))
            .unwrap();

        let mut prompter = ScriptedPrompter::new(["Get Categories from Spreadsheet"]);
        let config = config();
        let outcome = CategorySetBuilder::new(&mut store, &mut prompter, &config)
            .build(BucketKind::Wants)
            .unwrap();

        assert_eq!(
            outcome,
            BuildOutcome::Built(CategorySet::new(["Rent", "Gym"]).unwrap())
        );
        assert_eq!(
            store.cell("wants", 2, 2).unwrap(),
            CellValue::Amount(Money::from_units(900))
        );
    }

    #[test]
    fn test_fetch_keeps_column_positions() {
        let mut store = standard_workbook();
        for (col, label) in ["Rent", "", "Gym", "TOTAL"].iter().enumerate() {
            store.update_cell("wants", 1, col + 2, (*label).into()).unwrap();
        }
        store
            .update_cell("wants", 2, 4, CellValue::Amount(Money::from_units(45)))
            .unwrap();
        let before = store.clone();

        let mut prompter = ScriptedPrompter::new(["Get Categories from Spreadsheet"]);
        let config = config();
        let outcome = CategorySetBuilder::new(&mut store, &mut prompter, &config)
            .build(BucketKind::Wants)
            .unwrap();

        assert_eq!(
            outcome,
            BuildOutcome::Built(CategorySet::new(["Rent", "Gym"]).unwrap())
        );
        assert_eq!(store, before);
        assert_eq!(store.find_col("wants", "Gym").unwrap(), 4);
    }

    #[test]
    fn test_fetch_appends_missing_total() {
        let mut store = standard_workbook();
        for (col, label) in ["Rent", "", "Gym"].iter().enumerate() {
            store.update_cell("wants", 1, col + 2, (*label).into()).unwrap();
        }

        let mut prompter = ScriptedPrompter::new(["Get Categories from Spreadsheet"]);
        let config = config();
        CategorySetBuilder::new(&mut store, &mut prompter, &config)
            .build(BucketKind::Wants)
            .unwrap();

        assert_eq!(
            header(&store, BucketKind::Wants),
            vec!["month", "Rent", "", "Gym", "TOTAL"]
        );
    }

    #[test]
    fn test_fetch_from_empty_sheet_reprompts() {
        let mut store = standard_workbook();
        let mut prompter = ScriptedPrompter::new([
            "Get Categories from Spreadsheet",
            "Default Categories",
            "yes",
        ]);
        let config = config();
        let outcome = CategorySetBuilder::new(&mut store, &mut prompter, &config)
            .build(BucketKind::Wants)
            .unwrap();

        assert!(prompter.saw("Your categories are empty."));
        assert_eq!(
            outcome,
            BuildOutcome::Built(CategorySet::new(["Entertainment", "Wellbeing", "Travel"]).unwrap())
        );
    }

    #[test]
    fn test_write_header_removes_stale_labels() {
        let mut store = standard_workbook();
        for (col, label) in ["A", "B", "C", "TOTAL"].iter().enumerate() {
            store.update_cell("needs", 1, col + 2, (*label).into()).unwrap();
        }

        let mut prompter = ScriptedPrompter::default();
        let config = config();
        CategorySetBuilder::new(&mut store, &mut prompter, &config)
            .write_header(BucketKind::Needs, &CategorySet::new(["Rent"]).unwrap())
            .unwrap();

        assert_eq!(
            header(&store, BucketKind::Needs),
            vec!["month", "Rent", "TOTAL", "", ""]
        );
    }
}
