//! Inventory import pipeline.
//!
//! Reads the first sheet of an uploaded workbook, skips the header, parses
//! each remaining row into a part and inserts it. Every row is its own unit
//! of work: a bad or unstorable row is tallied and skipped, and rows already
//! stored are never rolled back. Concurrent imports are not coordinated.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::domain::ports::{CatalogueRepository, InventoryImport, WorkbookError, WorkbookReader};
use crate::domain::{Error, Part};

mod outcome;
mod row;


pub use outcome::{ImportOutcome, RejectedRow};
pub use row::{InventoryRow, REQUIRED_CELLS, RowRejection, parse_row};

/// Import service implementing the [`InventoryImport`] driving port.
#[derive(Clone)]
pub struct InventoryImportService<W, R> {
    reader: Arc<W>,
    parts: Arc<R>,
}

impl<W, R> InventoryImportService<W, R> {
    pub fn new(reader: Arc<W>, parts: Arc<R>) -> Self {
        Self { reader, parts }
    }
}

fn map_workbook_error(error: WorkbookError) -> Error {
    match error {
        WorkbookError::Unreadable { message } => {
            debug!(%message, "rejecting unreadable workbook");
            Error::invalid_request("uploaded file is not a readable workbook")
        }
        WorkbookError::NoSheets => Error::invalid_request("workbook contains no sheets"),
    }
}

#[async_trait]
impl<W, R> InventoryImport for InventoryImportService<W, R>
where
    W: WorkbookReader,
    R: CatalogueRepository<Part>,
{
    async fn import(&self, workbook: Vec<u8>) -> Result<ImportOutcome, Error> {
        let rows = self
            .reader
            .read_first_sheet(workbook)
            .await
            .map_err(map_workbook_error)?;

        let mut outcome = ImportOutcome::default();
        for (line, cells) in rows.iter().enumerate().skip(1) {
            let row = match parse_row(line, cells) {
                Ok(row) => row,
                Err(reason) => {
                    warn!(line, %reason, "skipping inventory row");
                    outcome.record_rejected(line, reason);
                    continue;
                }
            };
            match self.parts.insert(&row.part).await {
                Ok(part) => {
                    debug!(line, part_id = part.id, "inventory row imported");
                    outcome.record_accepted();
                }
                Err(err) => {
                    warn!(line, error = %err, "inventory row insert failed");
                    outcome.record_rejected(
                        line,
                        RowRejection::Persistence {
                            message: err.to_string(),
                        },
                    );
                }
            }
        }

        info!(
            examined = outcome.examined(),
            accepted = outcome.accepted(),
            rejected = outcome.rejected().len(),
            "inventory import finished"
        );
        Ok(outcome)
    }
}
