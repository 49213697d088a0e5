//! Per-import tally.

use super::RowRejection;

/// A data row that was not imported, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    pub line: usize,
    pub reason: RowRejection,
}

/// Aggregate result of one import call. Never persisted.
///
/// `examined == accepted + rejected.len()` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    examined: usize,
    accepted: usize,
    rejected: Vec<RejectedRow>,
}

impl ImportOutcome {
    pub(super) fn record_accepted(&mut self) {
        self.examined += 1;
        self.accepted += 1;
    }

    pub(super) fn record_rejected(&mut self, line: usize, reason: RowRejection) {
        self.examined += 1;
        self.rejected.push(RejectedRow { line, reason });
    }

    /// Data rows looked at, header excluded.
    pub fn examined(&self) -> usize {
        self.examined
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }

    pub fn rejected(&self) -> &[RejectedRow] {
        &self.rejected
    }

    /// Message shown to the admin after the import.
    ///
    /// # Examples
    /// ```
    /// use autoparts::domain::ImportOutcome;
    ///
    /// assert_eq!(ImportOutcome::default().summary(), "Imported items: 0");
    /// ```
    pub fn summary(&self) -> String {
        format!("Imported items: {}", self.accepted)
    }
}
