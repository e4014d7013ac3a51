//! Payload of the best-effort recording POST.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::Serialize;

use crate::entry::Submission;

/// JSON body sent to the spreadsheet endpoint for every new entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordPayload {
    pub name: String,
    pub message: String,
    /// Local date-time string, formatted by the browser.
    pub timestamp: String,
}

impl RecordPayload {
    /// Body for a resolved submission. Built before the entry is stored, so
    /// the record goes out even if storing fails.
    #[must_use]
    pub fn new(submission: &Submission, timestamp: String) -> Self {
        Self { name: submission.name.clone(), message: submission.message.clone(), timestamp }
    }
}
