//! Sheet grid and cell values
//!
//! A sheet is a ragged grid of cells addressed with 1-based row and column
//! numbers, like a spreadsheet. Cells outside the stored grid read as empty.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Money;

/// A single cell value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Amount(Money),
    Text(String),
    #[default]
    Empty,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            Self::Amount(_) => false,
        }
    }

    /// Exact label match, as a spreadsheet search would do
    pub fn matches_label(&self, label: &str) -> bool {
        matches!(self, Self::Text(text) if text == label)
    }

    pub fn as_amount(&self) -> Option<Money> {
        match self {
            Self::Amount(amount) => Some(*amount),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(amount) => write!(f, "{}", amount.to_decimal_string()),
            Self::Text(text) => write!(f, "{}", text),
            Self::Empty => Ok(()),
        }
    }
}

impl From<Money> for CellValue {
    fn from(amount: Money) -> Self {
        Self::Amount(amount)
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Location of a cell, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

/// A named grid of cells
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    #[serde(default)]
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// First cell whose text equals `label`, scanning row by row
    pub fn find(&self, label: &str) -> Option<CellRef> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|cell| cell.matches_label(label))
                .map(|c| CellRef { row: r + 1, col: c + 1 })
        })
    }

    /// Row number of the first column-A cell equal to `label`
    pub fn find_row(&self, label: &str) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| matches!(row.first(), Some(cell) if cell.matches_label(label)))
            .map(|r| r + 1)
    }

    /// Column number of the first header-row cell equal to `label`
    pub fn find_col(&self, label: &str) -> Option<usize> {
        self.rows
            .first()?
            .iter()
            .position(|cell| cell.matches_label(label))
            .map(|c| c + 1)
    }

    /// Read a cell; anything outside the grid is empty
    pub fn get(&self, row: usize, col: usize) -> CellValue {
        if row == 0 || col == 0 {
            return CellValue::Empty;
        }
        self.rows
            .get(row - 1)
            .and_then(|r| r.get(col - 1))
            .cloned()
            .unwrap_or_default()
    }

    /// Write a cell, growing the grid as needed
    pub fn set(&mut self, row: usize, col: usize, value: CellValue) {
        debug_assert!(row > 0 && col > 0, "cells are 1-based");
        if self.rows.len() < row {
            self.rows.resize_with(row, Vec::new);
        }
        let cells = &mut self.rows[row - 1];
        if cells.len() < col {
            cells.resize_with(col, CellValue::default);
        }
        cells[col - 1] = value;
    }

    /// Erase every cell of a row, keeping the row itself
    pub fn clear_row(&mut self, row: usize) {
        if let Some(cells) = row.checked_sub(1).and_then(|r| self.rows.get_mut(r)) {
            cells.clear();
        }
    }

    /// Erase the whole sheet
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Insert rows at the top, shifting existing rows down
    pub fn insert_rows(&mut self, rows: Vec<Vec<CellValue>>) {
        let existing = std::mem::take(&mut self.rows);
        self.rows = rows;
        self.rows.extend(existing);
    }

    /// Number of columns of the widest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}
