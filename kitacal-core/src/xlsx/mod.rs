//! Spreadsheet export: one worksheet, one row per event.

mod rows;
mod writer;

pub use rows::{COLUMN_WIDTHS, HEADERS, SheetRow};
pub use writer::{build_workbook, write_xlsx};

/// Excel worksheet maximum row count, header included.
pub const MAX_SHEET_ROWS: usize = 1_048_576;
