// src/jobs/chart.rs
//! Company distribution bar chart

use super::aggregation::CompanyCounts;
use super::page::Page;
use super::types::JobRecord;
use tracing::{debug, error};

pub const DATASET_LABEL: &str = "Number of Jobs";

/// Everything a renderer needs to draw the company bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSpec {
    pub title: String,
    pub dataset_label: String,
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
}

impl ChartSpec {
    pub fn company_distribution(jobs: &[JobRecord], title: &str) -> Self {
        let (labels, counts) = CompanyCounts::from_jobs(jobs).into_series();
        Self {
            title: title.to_string(),
            dataset_label: DATASET_LABEL.to_string(),
            labels,
            counts,
        }
    }
}

/// Owned handle to a live chart. Give it back to the renderer to destroy it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ChartHandle(u64);

impl ChartHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

pub trait ChartRenderer {
    fn create(&mut self, spec: ChartSpec) -> ChartHandle;

    fn destroy(&mut self, handle: ChartHandle);
}

/// Draw the company distribution of `jobs`, replacing the chart behind `previous`.
///
/// Returns the handle of the chart now on screen. When the page has no chart
/// container nothing is drawn and `previous` comes back as is.
pub fn render_chart(
    page: &mut Page,
    renderer: &mut dyn ChartRenderer,
    previous: Option<ChartHandle>,
    jobs: &[JobRecord],
    title: &str,
) -> Option<ChartHandle> {
    let Some(container) = page.chart_container.as_mut() else {
        error!("Chart container not found on the page.");
        return previous;
    };

    let spec = ChartSpec::company_distribution(jobs, title);
    container.visible = true;

    if let Some(old) = previous {
        debug!("Destroying previous chart {}", old.id());
        renderer.destroy(old);
    }

    let handle = renderer.create(spec);
    debug!("Created chart {} '{}'", handle.id(), title);
    Some(handle)
}
