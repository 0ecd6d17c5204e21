// src/jobs/remote.rs
//! Remote collaborators the job board talks to

use super::types::{JobId, JobRecord};
use anyhow::Result;
use async_trait::async_trait;

/// External job search. Returned records carry no id.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn search(&self, keyword: &str) -> Result<Vec<JobRecord>>;
}

/// CRUD store for saved jobs. Listed records carry the id the store assigned.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn list_jobs(&self) -> Result<Vec<JobRecord>>;

    async fn add_job(&self, job: &JobRecord) -> Result<()>;

    async fn delete_job(&self, id: &JobId) -> Result<()>;
}
