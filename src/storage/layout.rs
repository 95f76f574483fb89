//! Standard workbook layout
//!
//! Handles first-run creation of the sheets a budget session writes to.

use crate::models::period::{all_months, month_label};
use crate::models::BucketKind;

use super::sheet::CellValue;
use super::workbook::Workbook;

/// Sheet holding income, savings and the discretionary balance
pub const GENERAL_SHEET: &str = "general";

/// Header of column A in every sheet; month names sit below it
pub const MONTH_HEADER: &str = "month";

pub const INCOME_COLUMN: &str = "monthly income";
pub const SAVINGS_COLUMN: &str = "savings";
pub const DISCRETIONARY_COLUMN: &str = "discretionary";

/// Build an empty workbook with the general sheet and one sheet per bucket
pub fn standard_workbook() -> Workbook {
    let mut workbook = Workbook::new();

    let general = workbook.add_sheet(GENERAL_SHEET);
    general.rows.push(
        [MONTH_HEADER, INCOME_COLUMN, SAVINGS_COLUMN, DISCRETIONARY_COLUMN]
            .into_iter()
            .map(CellValue::from)
            .collect(),
    );
    general.rows.extend(month_rows());

    for kind in BucketKind::all() {
        let sheet = workbook.add_sheet(kind.sheet_name());
        sheet.rows.push(vec![CellValue::from(MONTH_HEADER)]);
        sheet.rows.extend(month_rows());
    }

    workbook
}

/// One row per month, label in column A
pub fn month_rows() -> Vec<Vec<CellValue>> {
    all_months()
        .into_iter()
        .map(|m| vec![CellValue::from(month_label(m))])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sheet::CellRef;
    use crate::storage::SheetStore;

    #[test]
    fn test_standard_sheets() {
        let workbook = standard_workbook();
        assert_eq!(workbook.sheet_names(), vec!["general", "needs", "wants"]);
    }

    #[test]
    fn test_general_header() {
        let workbook = standard_workbook();
        assert_eq!(
            workbook.find(GENERAL_SHEET, DISCRETIONARY_COLUMN).unwrap(),
            CellRef { row: 1, col: 4 }
        );
        assert_eq!(
            workbook.find(GENERAL_SHEET, "December").unwrap(),
            CellRef { row: 13, col: 1 }
        );
    }

    #[test]
    fn test_bucket_sheets_have_month_rows() {
        let workbook = standard_workbook();
        for kind in BucketKind::all() {
            let rows = workbook.get_all_values(kind.sheet_name()).unwrap();
            assert_eq!(rows.len(), 13);
            assert_eq!(rows[1][0], CellValue::text("January"));
        }
    }
}
