//! Export rows for spreadsheet and PDF output.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

/// Rendered headers and rows, ready to hand to a spreadsheet or PDF writer.
///
/// Produced by [`DataTable::export`](crate::DataTable::export) from every
/// filtered and sorted row, not just the current page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Export {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Export {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Converts each row into a JSON object keyed by header.
    ///
    /// This is the shape sheet writers expect. Duplicate headers keep the
    /// right-most cell.
    pub fn to_objects(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .zip(row)
                    .map(|(header, cell)| (header.clone(), Value::String(cell.clone())))
                    .collect()
            })
            .collect()
    }
}
