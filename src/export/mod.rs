//! Export of sheets to other formats

pub mod csv;

pub use self::csv::export_sheet_csv;
