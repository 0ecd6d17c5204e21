// src/core/service_client.rs
//! HTTP client for the job board API: external search proxy plus the saved-jobs store

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Response, Url};
use tracing::{error, info, trace};

use crate::jobs::{JobId, JobRecord, JobSource, JobStore};

const EXTERNAL_JOBS_ENDPOINT: &[&str] = &["api", "externalJobs"];
const GET_JOBS_ENDPOINT: &[&str] = &["api", "getJobs"];
const ADD_JOB_ENDPOINT: &[&str] = &["api", "addJob"];
const DELETE_JOB_ENDPOINT: &[&str] = &["api", "deleteJob"];

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ServiceClient {
    /// Create a client for `base_url`. Without a timeout requests wait indefinitely.
    pub fn new(base_url: &str, timeout_seconds: Option<u64>) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid API base URL: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("API base URL cannot carry a path: {}", base_url);
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/{endpoint...}/{extra...}`, percent-encoding each segment.
    fn endpoint_url(&self, endpoint: &[&str], extra: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("API base URL cannot carry a path: {}", self.base_url))?
            .pop_if_empty()
            .extend(endpoint)
            .extend(extra);
        Ok(url)
    }

    async fn ensure_success(response: Response, action: &str) -> Result<Response> {
        let status = response.status();
        trace!("{} response status: {}", action, status);

        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        error!("{} failed with status {}: {}", action, status, error_text);
        anyhow::bail!("{} failed with status {}: {}", action, status, error_text)
    }

    async fn get_jobs(&self, url: Url, action: &str) -> Result<Vec<JobRecord>> {
        info!("{}: GET {}", action, url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        let jobs: Vec<JobRecord> = Self::ensure_success(response, action)
            .await?
            .json()
            .await
            .with_context(|| format!("Failed to parse jobs from {}", url))?;

        info!("{}: received {} jobs", action, jobs.len());
        Ok(jobs)
    }
}

#[async_trait]
impl JobSource for ServiceClient {
    async fn search(&self, keyword: &str) -> Result<Vec<JobRecord>> {
        let url = self.endpoint_url(EXTERNAL_JOBS_ENDPOINT, &[keyword])?;
        self.get_jobs(url, "Fetching external jobs").await
    }
}

#[async_trait]
impl JobStore for ServiceClient {
    async fn list_jobs(&self) -> Result<Vec<JobRecord>> {
        let url = self.endpoint_url(GET_JOBS_ENDPOINT, &[])?;
        self.get_jobs(url, "Fetching saved jobs").await
    }

    async fn add_job(&self, job: &JobRecord) -> Result<()> {
        let url = self.endpoint_url(ADD_JOB_ENDPOINT, &[])?;
        trace!("Saving job '{}' to {}", job.title(), url);

        let response = self
            .client
            .post(url.clone())
            .json(job)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        Self::ensure_success(response, "Saving job").await?;
        Ok(())
    }

    async fn delete_job(&self, id: &JobId) -> Result<()> {
        let id = id.to_string();
        let url = self.endpoint_url(DELETE_JOB_ENDPOINT, &[id.as_str()])?;
        info!("Deleting job {}: DELETE {}", id, url);

        let response = self
            .client
            .delete(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to DELETE {}", url))?;

        Self::ensure_success(response, "Deleting job").await?;
        Ok(())
    }
}
