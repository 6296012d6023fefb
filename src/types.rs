//! Core data types: records as returned by the API, one page of them, and
//! the summary of a completed run.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Name of the top-level timestamp key that never reaches the output file
pub const CREATED_TIME_KEY: &str = "createdTime";

/// One row of the source table
///
/// Kept as the untyped JSON object the API returned. Nothing about its shape
/// is checked: a record may lack `id`, and `createdTime` may hold any JSON
/// value. Key order is preserved from input to output.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// The record identifier, if present and a string
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Look up a top-level key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up one entry of the `fields` object
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get("fields").and_then(|f| f.get(name))
    }

    /// Remove the top-level creation timestamp, keeping the order of the
    /// remaining keys
    pub fn strip_created_time(&mut self) {
        self.0.retain(|key, _| key != CREATED_TIME_KEY);
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Take the underlying JSON object
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Record(map)
    }
}

/// One page of a list-records response
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Page {
    /// Records in this batch, in API order
    #[serde(default)]
    pub records: Vec<Record>,

    /// Continuation token; present while more pages remain
    #[serde(default)]
    pub offset: Option<String>,
}

impl Page {
    /// The continuation token, treating an empty string as absent
    pub fn next_offset(&self) -> Option<&str> {
        self.offset.as_deref().filter(|o| !o.is_empty())
    }
}

/// Outcome of a successful pipeline run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchSummary {
    /// Table that was fetched
    pub table: String,
    /// Number of records written
    pub record_count: usize,
    /// Location of the output file
    pub output_path: PathBuf,
}
