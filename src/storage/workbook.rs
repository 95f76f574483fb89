//! In-memory workbook
//!
//! Holds every sheet in memory. Used directly by tests and wrapped by
//! [`JsonWorkbookStore`](super::JsonWorkbookStore) for persistence.

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};

use super::sheet::{CellRef, CellValue, Sheet};
use super::SheetStore;

/// A named collection of sheets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty sheet, or return the existing one with that name
    pub fn add_sheet(&mut self, name: &str) -> &mut Sheet {
        if let Some(index) = self.sheets.iter().position(|s| s.name == name) {
            return &mut self.sheets[index];
        }
        self.sheets.push(Sheet::new(name));
        let last = self.sheets.len() - 1;
        &mut self.sheets[last]
    }

    pub fn sheet(&self, name: &str) -> BudgetResult<&Sheet> {
        self.sheets
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| BudgetError::sheet_not_found(name))
    }

    pub fn sheet_mut(&mut self, name: &str) -> BudgetResult<&mut Sheet> {
        self.sheets
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| BudgetError::sheet_not_found(name))
    }

    /// Read one cell
    pub fn cell(&self, sheet: &str, row: usize, col: usize) -> BudgetResult<CellValue> {
        Ok(self.sheet(sheet)?.get(row, col))
    }
}

impl SheetStore for Workbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|s| s.name.clone()).collect()
    }

    fn find(&self, sheet: &str, label: &str) -> BudgetResult<CellRef> {
        self.sheet(sheet)?
            .find(label)
            .ok_or_else(|| BudgetError::label_not_found(sheet, label))
    }

    fn find_row(&self, sheet: &str, label: &str) -> BudgetResult<usize> {
        self.sheet(sheet)?
            .find_row(label)
            .ok_or_else(|| BudgetError::label_not_found(sheet, label))
    }

    fn find_col(&self, sheet: &str, label: &str) -> BudgetResult<usize> {
        self.sheet(sheet)?
            .find_col(label)
            .ok_or_else(|| BudgetError::label_not_found(sheet, label))
    }

    fn update_cell(
        &mut self,
        sheet: &str,
        row: usize,
        col: usize,
        value: CellValue,
    ) -> BudgetResult<()> {
        if row == 0 || col == 0 {
            return Err(BudgetError::Validation(format!(
                "Cell coordinates are 1-based, got row {} col {}",
                row, col
            )));
        }
        self.sheet_mut(sheet)?.set(row, col, value);
        Ok(())
    }

    fn get_all_values(&self, sheet: &str) -> BudgetResult<Vec<Vec<CellValue>>> {
        Ok(self.sheet(sheet)?.rows.clone())
    }

    fn clear(&mut self, sheet: &str) -> BudgetResult<()> {
        self.sheet_mut(sheet)?.clear();
        Ok(())
    }

    fn batch_clear_row(&mut self, sheet: &str, row: usize) -> BudgetResult<()> {
        self.sheet_mut(sheet)?.clear_row(row);
        Ok(())
    }

    fn insert_rows(&mut self, sheet: &str, rows: Vec<Vec<CellValue>>) -> BudgetResult<()> {
        self.sheet_mut(sheet)?.insert_rows(rows);
        Ok(())
    }
}
