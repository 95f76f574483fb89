//! File-backed workbook store
//!
//! Wraps a [`Workbook`] and writes the whole file atomically after every
//! mutating call, so a write has reached disk once the call returns.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::BudgetResult;

use super::file_io::{read_json_required, write_json_atomic};
use super::sheet::{CellRef, CellValue};
use super::workbook::Workbook;
use super::SheetStore;

pub struct JsonWorkbookStore {
    path: PathBuf,
    workbook: Workbook,
}

impl JsonWorkbookStore {
    /// Open an existing workbook file
    pub fn open(path: impl Into<PathBuf>) -> BudgetResult<Self> {
        let path = path.into();
        let workbook: Workbook = read_json_required(&path)?;
        debug!(path = %path.display(), sheets = workbook.sheets.len(), "opened workbook");
        Ok(Self { path, workbook })
    }

    /// Write `workbook` to `path`, replacing any existing file
    pub fn create(path: impl Into<PathBuf>, workbook: Workbook) -> BudgetResult<Self> {
        let store = Self {
            path: path.into(),
            workbook,
        };
        store.persist()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    fn persist(&self) -> BudgetResult<()> {
        write_json_atomic(&self.path, &self.workbook)
    }
}

impl SheetStore for JsonWorkbookStore {
    fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    fn find(&self, sheet: &str, label: &str) -> BudgetResult<CellRef> {
        self.workbook.find(sheet, label)
    }

    fn find_row(&self, sheet: &str, label: &str) -> BudgetResult<usize> {
        self.workbook.find_row(sheet, label)
    }

    fn find_col(&self, sheet: &str, label: &str) -> BudgetResult<usize> {
        self.workbook.find_col(sheet, label)
    }

    fn update_cell(
        &mut self,
        sheet: &str,
        row: usize,
        col: usize,
        value: CellValue,
    ) -> BudgetResult<()> {
        self.workbook.update_cell(sheet, row, col, value)?;
        self.persist()
    }

    fn get_all_values(&self, sheet: &str) -> BudgetResult<Vec<Vec<CellValue>>> {
        self.workbook.get_all_values(sheet)
    }

    fn clear(&mut self, sheet: &str) -> BudgetResult<()> {
        self.workbook.clear(sheet)?;
        self.persist()
    }

    fn batch_clear_row(&mut self, sheet: &str, row: usize) -> BudgetResult<()> {
        self.workbook.batch_clear_row(sheet, row)?;
        self.persist()
    }

    fn insert_rows(&mut self, sheet: &str, rows: Vec<Vec<CellValue>>) -> BudgetResult<()> {
        self.workbook.insert_rows(sheet, rows)?;
        self.persist()
    }
}
