// src/lib.rs
//! Job board client: search external listings, save a selection to the job
//! store, chart which companies are hiring and manage saved jobs.

pub mod app;
pub mod cli;
pub mod core;
pub mod jobs;
pub mod terminal;
pub mod utils;

pub use app::JobBoard;
pub use jobs::{JobId, JobRecord, ViewMode};
