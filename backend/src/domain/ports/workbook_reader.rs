//! Driven port for reading uploaded spreadsheets.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Failures that reject a whole workbook before any row is examined.
    pub enum WorkbookError {
        /// The bytes are not a workbook format the reader understands.
        Unreadable { message: String } => "workbook could not be read: {message}",
        /// The workbook parsed but contains no worksheets.
        NoSheets => "workbook contains no sheets",
    }
}

/// Cell text of one worksheet, row by row.
///
/// Rows keep their position in the sheet; trailing empty cells are dropped
/// so `row.len()` is the number of populated leading columns.
pub type SheetRows = Vec<Vec<String>>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorkbookReader: Send + Sync {
    /// Read the first worksheet of `bytes`, including its header row.
    async fn read_first_sheet(&self, bytes: Vec<u8>) -> Result<SheetRows, WorkbookError>;
}
