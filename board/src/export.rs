//! In-memory workbook mirroring the live entries.
//!
//! The workbook is rebuilt from scratch whenever the entry list changes and is
//! kept for a spreadsheet export that nothing triggers yet.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use serde::Serialize;

use crate::entry::Entry;

pub const SHEET_NAME: &str = "방명록";
pub const NAME_COLUMN: &str = "이름";
pub const MESSAGE_COLUMN: &str = "한마디";

/// One spreadsheet row. Serializes with the sheet's column headers as keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "이름")]
    pub name: String,
    #[serde(rename = "한마디")]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sheet {
    pub name: String,
    pub columns: [&'static str; 2],
    pub rows: Vec<ExportRow>,
}

impl Sheet {
    fn from_entries(name: &str, entries: &[Entry]) -> Self {
        Self {
            name: name.to_owned(),
            columns: [NAME_COLUMN, MESSAGE_COLUMN],
            rows: entries
                .iter()
                .map(|e| ExportRow { name: e.name.clone(), message: e.message.clone() })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every sheet and append a fresh guestbook sheet for `entries`.
    pub fn rebuild(&mut self, entries: &[Entry]) {
        self.sheets.clear();
        self.sheets.push(Sheet::from_entries(SHEET_NAME, entries));
    }

    #[must_use]
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    #[must_use]
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Row count of the guestbook sheet, zero before the first rebuild.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.sheet(SHEET_NAME).map_or(0, |s| s.rows.len())
    }
}
