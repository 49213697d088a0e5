//! Driving port for bulk inventory imports.

use async_trait::async_trait;

use crate::domain::{Error, ImportOutcome};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryImport: Send + Sync {
    /// Import every data row of the first sheet of `workbook`.
    ///
    /// Row-level problems are tallied in the outcome. Only a workbook that
    /// cannot be opened, or that has no sheets, fails the whole call.
    async fn import(&self, workbook: Vec<u8>) -> Result<ImportOutcome, Error>;
}
