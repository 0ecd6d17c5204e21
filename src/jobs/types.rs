// src/jobs/types.rs
//! Job records as exchanged with the job source and the job store

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

pub const SEARCH_RESULTS_TITLE: &str = "Search Results from USAJobs";
pub const SAVED_JOBS_TITLE: &str = "Saved Jobs";
pub const SEARCH_CHART_TITLE: &str = "Job Distribution from Search Results";

/// Identifier assigned by the job store. Opaque: any JSON value, kept as sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(Value);

impl JobId {
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl fmt::Display for JobId {
    /// Strings print bare, anything else as its JSON text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        JobId(Value::String(value.to_string()))
    }
}

impl From<u64> for JobId {
    fn from(value: u64) -> Self {
        JobId(Value::from(value))
    }
}

impl From<Value> for JobId {
    fn from(value: Value) -> Self {
        JobId(value)
    }
}

/// A job posting exactly as the source or store sent it.
///
/// The JSON object is kept untouched and is what gets sent back when the job
/// is saved; the accessors only derive display text from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobRecord {
    raw: Map<String, Value>,
}

impl JobRecord {
    pub fn new(title: &str, company: &str, location: &str, posted_date: &str, url: &str) -> Self {
        let mut raw = Map::new();
        raw.insert("title".to_string(), title.into());
        raw.insert("company".to_string(), company.into());
        raw.insert("location".to_string(), location.into());
        raw.insert("posted_date".to_string(), posted_date.into());
        raw.insert("url".to_string(), url.into());
        Self { raw }
    }

    pub fn with_id(mut self, id: impl Into<JobId>) -> Self {
        self.raw.insert("id".to_string(), id.into().0);
        self
    }

    /// Present once the store has assigned one. A `null` id counts as absent.
    pub fn id(&self) -> Option<JobId> {
        match self.raw.get("id") {
            None | Some(Value::Null) => None,
            Some(value) => Some(JobId(value.clone())),
        }
    }

    pub fn title(&self) -> Cow<'_, str> {
        self.display_field("title")
    }

    pub fn company(&self) -> Cow<'_, str> {
        self.display_field("company")
    }

    pub fn location(&self) -> Cow<'_, str> {
        self.display_field("location")
    }

    pub fn posted_date(&self) -> Cow<'_, str> {
        self.display_field("posted_date")
    }

    pub fn url(&self) -> Cow<'_, str> {
        self.display_field("url")
    }

    pub fn as_json(&self) -> &Map<String, Value> {
        &self.raw
    }

    // Upstream APIs are loose about types: numbers and nulls show up in display fields.
    fn display_field(&self, key: &str) -> Cow<'_, str> {
        match self.raw.get(key) {
            None | Some(Value::Null) => Cow::Borrowed(""),
            Some(Value::String(s)) => Cow::Borrowed(s),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }
}

/// Which view a job list belongs to. Decides whether items get delete actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    SearchResults,
    SavedJobs,
}

impl ViewMode {
    pub fn allows_delete(self) -> bool {
        matches!(self, ViewMode::SavedJobs)
    }
}
