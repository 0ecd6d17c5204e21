// src/jobs/renderer.rs
use super::page::{DeleteAction, JobListView, ListItem, Page, ResultsContent};
use super::selection::SelectionState;
use super::types::{JobRecord, ViewMode};
use tracing::{error, info, warn};

/// Replace the results region with a list of `jobs` under `title`.
///
/// With `enable_selection` every item gets a selection control backed by the
/// full record, and the persist-selection trigger is shown; otherwise it is
/// hidden. In [`ViewMode::SavedJobs`] every item with an id gets a delete action.
/// A page without a results region is left untouched.
pub fn render_job_list(
    page: &mut Page,
    jobs: &[JobRecord],
    title: &str,
    mode: ViewMode,
    enable_selection: bool,
) {
    let Some(results) = page.results.as_mut() else {
        error!("Results section not found on the page.");
        return;
    };

    let mut selection = SelectionState::default();
    let items = jobs
        .iter()
        .map(|job| {
            let mut item = ListItem::from_job(job);
            if enable_selection {
                item.selection = Some(selection.attach(job));
            }
            if mode.allows_delete() {
                match job.id() {
                    Some(id) => item.delete = Some(DeleteAction { job_id: id }),
                    None => warn!("Saved job '{}' has no id, cannot offer delete", job.title()),
                }
            }
            item
        })
        .collect();

    results.content = ResultsContent::List(JobListView {
        heading: title.to_string(),
        mode,
        items,
        selection,
    });
    info!("Rendered {} jobs under '{}'", jobs.len(), title);

    match page.save_trigger.as_mut() {
        Some(trigger) => trigger.visible = enable_selection,
        None => error!("Save jobs button not found on the page."),
    }
}

/// Replace the results region with an inline error message.
pub fn display_error(page: &mut Page, message: &str) {
    let Some(results) = page.results.as_mut() else {
        error!("Results section not found on the page.");
        return;
    };
    results.content = ResultsContent::Error(message.to_string());
}
