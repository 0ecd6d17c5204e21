// src/app.rs
//! Page controller: runs the search, saved-jobs, save-selection and delete flows
//! against the page and threads the chart handle between renders.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::jobs::chart::{render_chart, ChartHandle, ChartRenderer};
use crate::jobs::page::Page;
use crate::jobs::renderer::{display_error, render_job_list};
use crate::jobs::selection::{persist_in_order, SaveOutcome, SelectionError};
use crate::jobs::types::{
    JobId, ViewMode, SAVED_JOBS_TITLE, SEARCH_CHART_TITLE, SEARCH_RESULTS_TITLE,
};
use crate::jobs::{JobSource, JobStore, Notification, Notifier};

const FETCH_JOBS_ERROR: &str = "Error fetching jobs. Please try again later.";
const FETCH_SAVED_ERROR: &str = "Error fetching saved jobs. Please try again later.";
const SAVE_SUCCESS: &str = "Selected jobs saved successfully!";
const SAVE_ERROR: &str = "Error saving jobs. Please try again later.";
const DELETE_SUCCESS: &str = "Job deleted successfully!";
const DELETE_ERROR: &str = "Error deleting job. Please try again later.";

pub struct JobBoard<C: ChartRenderer> {
    source: Arc<dyn JobSource>,
    store: Arc<dyn JobStore>,
    notifier: Arc<dyn Notifier>,
    charts: C,
    chart: Option<ChartHandle>,
    page: Page,
}

impl<C: ChartRenderer> JobBoard<C> {
    pub fn new(
        source: Arc<dyn JobSource>,
        store: Arc<dyn JobStore>,
        notifier: Arc<dyn Notifier>,
        charts: C,
    ) -> Self {
        Self::with_page(source, store, notifier, charts, Page::default())
    }

    pub fn with_page(
        source: Arc<dyn JobSource>,
        store: Arc<dyn JobStore>,
        notifier: Arc<dyn Notifier>,
        charts: C,
        page: Page,
    ) -> Self {
        Self {
            source,
            store,
            notifier,
            charts,
            chart: None,
            page,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn charts(&self) -> &C {
        &self.charts
    }

    pub fn chart(&self) -> Option<&ChartHandle> {
        self.chart.as_ref()
    }

    /// Search the external source, show the results with selection enabled and
    /// chart their company distribution.
    pub async fn fetch_external_jobs(&mut self, keyword: &str) {
        info!("Fetching jobs for keyword: {}", keyword);

        match self.source.search(keyword).await {
            Ok(jobs) => {
                render_job_list(
                    &mut self.page,
                    &jobs,
                    SEARCH_RESULTS_TITLE,
                    ViewMode::SearchResults,
                    true,
                );
                let previous = self.chart.take();
                self.chart = render_chart(
                    &mut self.page,
                    &mut self.charts,
                    previous,
                    &jobs,
                    SEARCH_CHART_TITLE,
                );
            }
            Err(e) => {
                error!("Error fetching jobs: {:#}", e);
                display_error(&mut self.page, FETCH_JOBS_ERROR);
            }
        }
    }

    /// Load the saved-jobs view.
    pub async fn fetch_saved_jobs(&mut self) {
        info!("Fetching saved jobs...");

        match self.store.list_jobs().await {
            Ok(jobs) => render_job_list(
                &mut self.page,
                &jobs,
                SAVED_JOBS_TITLE,
                ViewMode::SavedJobs,
                false,
            ),
            Err(e) => {
                error!("Error fetching saved jobs: {:#}", e);
                display_error(&mut self.page, FETCH_SAVED_ERROR);
            }
        }
    }

    /// Persist every checked job, one request at a time in list order.
    ///
    /// Reports one notification for the whole batch. A checked control whose
    /// record cannot be recovered aborts before any request and is only logged.
    /// The list is not refreshed afterwards.
    pub async fn save_selected(&mut self) -> Result<SaveOutcome, SelectionError> {
        let jobs = match self.page.job_list() {
            Some(list) => list.checked_jobs().inspect_err(|e| {
                error!("Error collecting selected jobs: {}", e);
            })?,
            None => Vec::new(),
        };
        info!("Saving {} selected jobs", jobs.len());

        let outcome = persist_in_order(self.store.as_ref(), &jobs).await;
        match outcome {
            SaveOutcome::Saved(_) => self.notifier.notify(Notification::success(SAVE_SUCCESS)),
            SaveOutcome::Failed { .. } => self.notifier.notify(Notification::error(SAVE_ERROR)),
        }
        Ok(outcome)
    }

    /// Delete a saved job. Reloads the saved-jobs view only when the delete succeeded.
    pub async fn delete_job(&mut self, id: &JobId) -> bool {
        match self.store.delete_job(id).await {
            Ok(()) => {
                self.notifier.notify(Notification::success(DELETE_SUCCESS));
                self.fetch_saved_jobs().await;
                true
            }
            Err(e) => {
                error!("Error deleting job {}: {:#}", id, e);
                self.notifier.notify(Notification::error(DELETE_ERROR));
                false
            }
        }
    }

    /// Check or uncheck the item at `index` (0-based) of the current list.
    pub fn set_checked(&mut self, index: usize, checked: bool) -> Result<(), SelectionError> {
        let list = self.page.job_list_mut().ok_or(SelectionError::NoList)?;
        list.set_checked(index, checked).inspect_err(|e| {
            warn!("Cannot change selection: {}", e);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::page::ResultsContent;
    use crate::jobs::testing::{RecordingCharts, RecordingNotifier, RecordingSource, RecordingStore};
    use crate::jobs::{JobRecord, NotificationLevel};

    struct Harness {
        source: RecordingSource,
        store: RecordingStore,
        notifier: RecordingNotifier,
        board: JobBoard<RecordingCharts>,
    }

    fn harness(source: RecordingSource, store: RecordingStore) -> Harness {
        let notifier = RecordingNotifier::default();
        let board = JobBoard::new(
            Arc::new(source.clone()),
            Arc::new(store.clone()),
            Arc::new(notifier.clone()),
            RecordingCharts::default(),
        );
        Harness {
            source,
            store,
            notifier,
            board,
        }
    }

    fn search_results() -> Vec<JobRecord> {
        vec![
            JobRecord::new("Auditor", "IRS", "Austin, TX", "2024-08-01", "https://example.gov/a"),
            JobRecord::new("Archivist", "NARA", "College Park, MD", "2024-08-02", "https://example.gov/b"),
            JobRecord::new("Examiner", "IRS", "Ogden, UT", "2024-08-03", "https://example.gov/c"),
        ]
    }

    fn saved() -> Vec<JobRecord> {
        vec![
            JobRecord::new("Auditor", "IRS", "Austin, TX", "2024-08-01", "https://example.gov/a")
                .with_id(1u64),
            JobRecord::new("Examiner", "IRS", "Ogden, UT", "2024-08-03", "https://example.gov/c")
                .with_id(2u64),
        ]
    }

    fn levels(notifier: &RecordingNotifier) -> Vec<NotificationLevel> {
        notifier.sent().into_iter().map(|n| n.level).collect()
    }

    #[tokio::test]
    async fn test_search_renders_selectable_list_and_chart() {
        let mut h = harness(
            RecordingSource::returning(search_results()),
            RecordingStore::default(),
        );

        h.board.fetch_external_jobs("auditor").await;

        assert_eq!(h.source.keywords(), vec!["auditor"]);
        let list = h.board.page().job_list().unwrap();
        assert_eq!(list.heading, SEARCH_RESULTS_TITLE);
        assert_eq!(list.mode, ViewMode::SearchResults);
        assert_eq!(list.selection_controls().count(), 3);
        assert!(h.board.page().save_trigger_visible());
        assert!(h.board.page().chart_visible());

        let specs = h.board.charts().live_specs();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].title, SEARCH_CHART_TITLE);
        assert_eq!(specs[0].labels, vec!["IRS", "NARA"]);
        assert_eq!(specs[0].counts, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_repeated_search_replaces_chart() {
        let mut h = harness(
            RecordingSource::returning(search_results()),
            RecordingStore::default(),
        );

        h.board.fetch_external_jobs("a").await;
        h.board.fetch_external_jobs("a").await;

        assert_eq!(h.board.charts().live_count(), 1);
        assert_eq!(h.board.charts().destroyed(), 1);
        assert!(h.board.chart().is_some());
    }

    #[tokio::test]
    async fn test_search_failure_shows_inline_error() {
        let mut h = harness(RecordingSource::failing(), RecordingStore::default());

        h.board.fetch_external_jobs("x").await;

        assert_eq!(h.board.page().error_message(), Some(FETCH_JOBS_ERROR));
        assert_eq!(h.board.charts().live_count(), 0);
        assert!(h.notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn test_saved_view_has_delete_actions() {
        let mut h = harness(RecordingSource::default(), RecordingStore::with_saved(saved()));

        h.board.fetch_saved_jobs().await;

        let list = h.board.page().job_list().unwrap();
        assert_eq!(list.heading, SAVED_JOBS_TITLE);
        assert_eq!(list.delete_actions().count(), 2);
        assert_eq!(list.selection_controls().count(), 0);
        assert!(!h.board.page().save_trigger_visible());
    }

    #[tokio::test]
    async fn test_saved_view_failure_shows_inline_error() {
        let mut h = harness(
            RecordingSource::default(),
            RecordingStore::default().failing_list(),
        );

        h.board.fetch_saved_jobs().await;

        assert_eq!(h.board.page().error_message(), Some(FETCH_SAVED_ERROR));
    }

    #[tokio::test]
    async fn test_save_with_nothing_checked_reports_success() {
        let mut h = harness(
            RecordingSource::returning(search_results()),
            RecordingStore::default(),
        );
        h.board.fetch_external_jobs("a").await;

        let outcome = h.board.save_selected().await.unwrap();

        assert_eq!(outcome, SaveOutcome::Saved(0));
        assert!(h.store.added().is_empty());
        assert_eq!(levels(&h.notifier), vec![NotificationLevel::Success]);
    }

    #[tokio::test]
    async fn test_save_persists_checked_in_order_without_refresh() {
        let mut h = harness(
            RecordingSource::returning(search_results()),
            RecordingStore::default(),
        );
        h.board.fetch_external_jobs("a").await;
        h.board.set_checked(2, true).unwrap();
        h.board.set_checked(0, true).unwrap();

        let outcome = h.board.save_selected().await.unwrap();

        assert_eq!(outcome, SaveOutcome::Saved(2));
        let results = search_results();
        assert_eq!(h.store.added(), vec![results[0].clone(), results[2].clone()]);
        assert_eq!(h.store.list_calls(), 0);
        assert_eq!(h.notifier.sent(), vec![Notification::success(SAVE_SUCCESS)]);
        assert_eq!(h.board.page().job_list().unwrap().heading, SEARCH_RESULTS_TITLE);
    }

    #[tokio::test]
    async fn test_save_forwards_search_record_unchanged() {
        let wire = serde_json::json!({
            "title": "Clerk",
            "company": "GSA",
            "location": null,
            "posted_date": 20240101
        });
        let record: JobRecord = serde_json::from_value(wire.clone()).unwrap();
        let mut h = harness(
            RecordingSource::returning(vec![record]),
            RecordingStore::default(),
        );
        h.board.fetch_external_jobs("clerk").await;
        h.board.set_checked(0, true).unwrap();

        h.board.save_selected().await.unwrap();

        let added = h.store.added();
        assert_eq!(added.len(), 1);
        assert_eq!(serde_json::to_value(&added[0]).unwrap(), wire);
    }

    #[tokio::test]
    async fn test_save_stops_after_second_of_three_fails() {
        let mut h = harness(
            RecordingSource::returning(search_results()),
            RecordingStore::default().failing_add_at(2),
        );
        h.board.fetch_external_jobs("a").await;
        for index in 0..3 {
            h.board.set_checked(index, true).unwrap();
        }

        let outcome = h.board.save_selected().await.unwrap();

        assert_eq!(outcome, SaveOutcome::Failed { saved: 1 });
        assert_eq!(h.store.added().len(), 2);
        assert_eq!(h.notifier.sent(), vec![Notification::error(SAVE_ERROR)]);
    }

    #[tokio::test]
    async fn test_save_with_unresolvable_selection_is_not_notified() {
        let mut h = harness(
            RecordingSource::returning(search_results()),
            RecordingStore::default(),
        );
        h.board.fetch_external_jobs("a").await;
        h.board.set_checked(1, true).unwrap();
        if let Some(ResultsContent::List(list)) =
            h.board.page_mut().results.as_mut().map(|r| &mut r.content)
        {
            list.selection = Default::default();
        }

        let result = h.board.save_selected().await;

        assert!(matches!(result, Err(SelectionError::UnknownKey(_))));
        assert!(h.store.added().is_empty());
        assert!(h.notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn test_delete_success_reloads_once() {
        let mut h = harness(RecordingSource::default(), RecordingStore::with_saved(saved()));
        h.board.fetch_saved_jobs().await;
        let before = h.store.list_calls();

        assert!(h.board.delete_job(&JobId::from(1u64)).await);

        assert_eq!(h.store.list_calls(), before + 1);
        assert_eq!(h.store.deleted(), vec![JobId::from(1u64)]);
        assert_eq!(levels(&h.notifier), vec![NotificationLevel::Success]);
        assert_eq!(h.board.page().job_list().unwrap().items.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_failure_does_not_reload() {
        let mut h = harness(
            RecordingSource::default(),
            RecordingStore::with_saved(saved()).failing_delete(),
        );
        h.board.fetch_saved_jobs().await;
        let before = h.store.list_calls();

        assert!(!h.board.delete_job(&JobId::from(2u64)).await);

        assert_eq!(h.store.list_calls(), before);
        assert_eq!(h.notifier.sent(), vec![Notification::error(DELETE_ERROR)]);
        assert_eq!(h.board.page().job_list().unwrap().items.len(), 2);
    }

    #[tokio::test]
    async fn test_set_checked_without_list() {
        let mut h = harness(RecordingSource::default(), RecordingStore::default());

        assert!(matches!(h.board.set_checked(0, true), Err(SelectionError::NoList)));
    }
}
