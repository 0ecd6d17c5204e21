// src/jobs/mod.rs
//! Job list rendering, selection, persistence and the company chart

pub mod aggregation;
pub mod chart;
pub mod notify;
pub mod page;
pub mod remote;
pub mod renderer;
pub mod selection;
pub mod types;

pub use aggregation::CompanyCounts;
pub use chart::{render_chart, ChartHandle, ChartRenderer, ChartSpec};
pub use notify::{Notification, NotificationLevel, Notifier};
pub use page::{JobListView, Page};
pub use remote::{JobSource, JobStore};
pub use renderer::{display_error, render_job_list};
pub use selection::{SaveOutcome, SelectionError, SelectionKey};
pub use types::{JobId, JobRecord, ViewMode};
