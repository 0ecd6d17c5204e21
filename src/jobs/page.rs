// src/jobs/page.rs
//! The page the job board draws into: a results region, a chart container
//! and the persist-selection trigger. Any of them may be absent.

use super::selection::{SelectionControl, SelectionError, SelectionState};
use super::types::{JobId, JobRecord, ViewMode};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteAction {
    pub job_id: JobId,
}

#[derive(Debug, Clone)]
pub struct ListItem {
    pub title: String,
    pub company: String,
    pub location: String,
    pub posted_date: String,
    pub url: String,
    pub selection: Option<SelectionControl>,
    pub delete: Option<DeleteAction>,
}

impl ListItem {
    pub fn from_job(job: &JobRecord) -> Self {
        Self {
            title: job.title().into_owned(),
            company: job.company().into_owned(),
            location: job.location().into_owned(),
            posted_date: job.posted_date().into_owned(),
            url: job.url().into_owned(),
            selection: None,
            delete: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JobListView {
    pub heading: String,
    pub mode: ViewMode,
    pub items: Vec<ListItem>,
    pub selection: SelectionState,
}

impl JobListView {
    pub fn selection_controls(&self) -> impl Iterator<Item = &SelectionControl> {
        self.items.iter().filter_map(|item| item.selection.as_ref())
    }

    pub fn delete_actions(&self) -> impl Iterator<Item = &DeleteAction> {
        self.items.iter().filter_map(|item| item.delete.as_ref())
    }

    /// Check or uncheck the control of the item at `index` (0-based).
    pub fn set_checked(&mut self, index: usize, checked: bool) -> Result<(), SelectionError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(SelectionError::OutOfRange { index, len })?;
        let control = item
            .selection
            .as_mut()
            .ok_or(SelectionError::NotSelectable(index))?;
        control.checked = checked;
        Ok(())
    }

    pub fn toggle(&mut self, index: usize) -> Result<bool, SelectionError> {
        let checked = self
            .items
            .get(index)
            .and_then(|item| item.selection.as_ref())
            .map(|control| !control.checked)
            .unwrap_or(true);
        self.set_checked(index, checked)?;
        Ok(checked)
    }

    /// Records behind every checked control, in list order.
    pub fn checked_jobs(&self) -> Result<Vec<JobRecord>, SelectionError> {
        self.selection.collect(self.selection_controls())
    }
}

#[derive(Debug, Clone, Default)]
pub enum ResultsContent {
    #[default]
    Empty,
    List(JobListView),
    Error(String),
}

#[derive(Debug, Clone, Default)]
pub struct ResultsRegion {
    pub content: ResultsContent,
}

#[derive(Debug, Clone, Default)]
pub struct ChartContainer {
    pub visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SaveTrigger {
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct Page {
    pub results: Option<ResultsRegion>,
    pub chart_container: Option<ChartContainer>,
    pub save_trigger: Option<SaveTrigger>,
}

impl Default for Page {
    /// A page with every region present. The chart and the trigger start hidden.
    fn default() -> Self {
        Self {
            results: Some(ResultsRegion::default()),
            chart_container: Some(ChartContainer::default()),
            save_trigger: Some(SaveTrigger::default()),
        }
    }
}

impl Page {
    pub fn job_list(&self) -> Option<&JobListView> {
        match self.results.as_ref().map(|r| &r.content) {
            Some(ResultsContent::List(list)) => Some(list),
            _ => None,
        }
    }

    pub fn job_list_mut(&mut self) -> Option<&mut JobListView> {
        match self.results.as_mut().map(|r| &mut r.content) {
            Some(ResultsContent::List(list)) => Some(list),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self.results.as_ref().map(|r| &r.content) {
            Some(ResultsContent::Error(message)) => Some(message),
            _ => None,
        }
    }

    pub fn save_trigger_visible(&self) -> bool {
        self.save_trigger.as_ref().is_some_and(|t| t.visible)
    }

    pub fn chart_visible(&self) -> bool {
        self.chart_container.as_ref().is_some_and(|c| c.visible)
    }

    /// Text rendition of the results region and the trigger.
    pub fn draw(&self) -> String {
        let mut out = String::new();

        match self.results.as_ref().map(|r| &r.content) {
            Some(ResultsContent::List(list)) => draw_list(&mut out, list),
            Some(ResultsContent::Error(message)) => {
                let _ = writeln!(out, "! {}", message);
            }
            Some(ResultsContent::Empty) | None => {}
        }

        if self.save_trigger_visible() {
            let _ = writeln!(out, "[Save Selected Jobs]");
        }
        out
    }
}

fn draw_list(out: &mut String, list: &JobListView) {
    let _ = writeln!(out, "== {} ==", list.heading);
    if list.items.is_empty() {
        let _ = writeln!(out, "(no jobs)");
    }
    for (n, item) in list.items.iter().enumerate() {
        let checkbox = match &item.selection {
            Some(control) if control.checked => "[x] ",
            Some(_) => "[ ] ",
            None => "",
        };
        let _ = writeln!(out, "{:>3}. {}{} - {}", n + 1, checkbox, item.title, item.company);
        let _ = writeln!(out, "     Location: {}", item.location);
        let _ = writeln!(out, "     Posted on: {}", item.posted_date);
        let _ = writeln!(out, "     View Job: {}", item.url);
        if let Some(action) = &item.delete {
            let _ = writeln!(out, "     [Delete {}]", action.job_id);
        }
    }
}
