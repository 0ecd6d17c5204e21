// src/jobs/selection.rs
//! Selection state of a rendered list and ordered persistence of the selection

use super::remote::JobStore;
use super::types::JobRecord;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, error};
use uuid::Uuid;

/// Stable key tying a selection control to the record it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionKey(Uuid);

impl SelectionKey {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SelectionKey {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionControl {
    pub key: SelectionKey,
    pub checked: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("selection control {0} has no job record attached")]
    UnknownKey(SelectionKey),
    #[error("item {index} out of range, list has {len} items")]
    OutOfRange { index: usize, len: usize },
    #[error("item {0} has no selection control")]
    NotSelectable(usize),
    #[error("no job list is rendered")]
    NoList,
}

/// Records behind the selection controls of one rendered list.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    records: HashMap<SelectionKey, JobRecord>,
}

impl SelectionState {
    /// Attach a record and hand back the control that refers to it.
    pub fn attach(&mut self, job: &JobRecord) -> SelectionControl {
        let key = SelectionKey::new();
        self.records.insert(key, job.clone());
        SelectionControl {
            key,
            checked: false,
        }
    }

    pub fn resolve(&self, key: &SelectionKey) -> Result<&JobRecord, SelectionError> {
        self.records.get(key).ok_or(SelectionError::UnknownKey(*key))
    }

    /// Rebuild the records of checked controls, in control order.
    pub fn collect<'a, I>(&self, controls: I) -> Result<Vec<JobRecord>, SelectionError>
    where
        I: IntoIterator<Item = &'a SelectionControl>,
    {
        controls
            .into_iter()
            .filter(|control| control.checked)
            .map(|control| self.resolve(&control.key).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Result of persisting a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(usize),
    Failed { saved: usize },
}

/// Persist jobs one at a time in the given order, awaiting each before the next.
/// Stops at the first failure; later jobs are never sent.
pub async fn persist_in_order(store: &dyn JobStore, jobs: &[JobRecord]) -> SaveOutcome {
    for (saved, job) in jobs.iter().enumerate() {
        if let Err(e) = store.add_job(job).await {
            error!("Error saving jobs: {:#}", e);
            return SaveOutcome::Failed { saved };
        }
        debug!("Saved job {} of {}: {}", saved + 1, jobs.len(), job.title());
    }
    SaveOutcome::Saved(jobs.len())
}
