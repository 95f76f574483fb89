//! Storage layer for budget-sheets
//!
//! The budget is persisted in a workbook of labelled sheets. Cells are found
//! by label (a month name in column A, a column name in the header row) and
//! written one at a time, like a remote spreadsheet.

pub mod file_io;
pub mod json_store;
pub mod layout;
pub mod sheet;
pub mod workbook;

pub use json_store::JsonWorkbookStore;
pub use layout::{
    standard_workbook, DISCRETIONARY_COLUMN, GENERAL_SHEET, INCOME_COLUMN, MONTH_HEADER,
    SAVINGS_COLUMN,
};
pub use sheet::{CellRef, CellValue, Sheet};
pub use workbook::Workbook;

use crate::error::BudgetResult;

/// Row/column addressed store the budget session writes to
///
/// Rows and columns are 1-based. Implementations report missing sheets and
/// labels as `NotFound`; callers do not retry.
pub trait SheetStore {
    /// Names of all sheets, in workbook order
    fn sheet_names(&self) -> Vec<String>;

    /// Locate the first cell whose text equals `label`
    fn find(&self, sheet: &str, label: &str) -> BudgetResult<CellRef>;

    /// Row number of the month label in column A
    fn find_row(&self, sheet: &str, label: &str) -> BudgetResult<usize>;

    /// Column number of a label in the header row
    fn find_col(&self, sheet: &str, label: &str) -> BudgetResult<usize>;

    /// Write a single cell
    fn update_cell(&mut self, sheet: &str, row: usize, col: usize, value: CellValue)
        -> BudgetResult<()>;

    /// Read the full grid of a sheet
    fn get_all_values(&self, sheet: &str) -> BudgetResult<Vec<Vec<CellValue>>>;

    /// Erase every cell of a sheet
    fn clear(&mut self, sheet: &str) -> BudgetResult<()>;

    /// Erase every cell of one row
    fn batch_clear_row(&mut self, sheet: &str, row: usize) -> BudgetResult<()>;

    /// Insert rows at the top of a sheet
    fn insert_rows(&mut self, sheet: &str, rows: Vec<Vec<CellValue>>) -> BudgetResult<()>;

    /// Write `value` at the intersection of a row label and a column label
    fn update_labelled(
        &mut self,
        sheet: &str,
        row_label: &str,
        column_label: &str,
        value: CellValue,
    ) -> BudgetResult<()> {
        let row = self.find_row(sheet, row_label)?;
        let col = self.find_col(sheet, column_label)?;
        self.update_cell(sheet, row, col, value)
    }
}
