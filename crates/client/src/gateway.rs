use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::{eyre, Result};
use uuid::Uuid;

use tidysched_core::models::cleaner::CleanerAvailability;
use tidysched_core::models::commands::{AssignJobRequest, CommandOutcome, UpdateBookingRequest};
use tidysched_core::models::job::Job;

use crate::config::ClientConfig;

/// Backend operations the assignment board depends on.
///
/// The board only ever talks through this trait, so tests can drive it with
/// the mock in [`crate::mock`] instead of a live backend.
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Jobs with no cleaner and no slot, awaiting placement.
    async fn fetch_unassigned_jobs(&self) -> Result<Vec<Job>>;

    /// Per-cleaner, per-slot availability for `date`, including the jobs
    /// already placed in each slot.
    async fn fetch_availability(&self, date: NaiveDate) -> Result<Vec<CleanerAvailability>>;

    /// Assign an unassigned job to a cleaner and slot.
    async fn assign_job(&self, request: AssignJobRequest) -> Result<CommandOutcome>;

    /// Move a placed booking to a new cleaner and/or slot.
    async fn update_booking(
        &self,
        job_id: Uuid,
        request: UpdateBookingRequest,
    ) -> Result<CommandOutcome>;

    /// Delete a booking entirely. Irreversible.
    async fn delete_booking(&self, job_id: Uuid) -> Result<()>;
}

/// `BookingApi` over HTTP with bearer-token authentication.
pub struct HttpBookingClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpBookingClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Reject non-2xx responses, carrying the server's message body into the error.
async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(eyre!("Backend returned {}: {}", status, body))
}

#[async_trait]
impl BookingApi for HttpBookingClient {
    async fn fetch_unassigned_jobs(&self) -> Result<Vec<Job>> {
        tracing::debug!("Fetching unassigned jobs");

        let response = self
            .http
            .get(self.url("/api/jobs/unassigned"))
            .bearer_auth(&self.token)
            .send()
            .await?;

        let jobs: Vec<Job> = check(response).await?.json().await?;
        tracing::debug!("Fetched {} unassigned jobs", jobs.len());
        Ok(jobs)
    }

    async fn fetch_availability(&self, date: NaiveDate) -> Result<Vec<CleanerAvailability>> {
        tracing::debug!("Fetching availability summary for {}", date);

        let response = self
            .http
            .get(self.url("/api/availability/summary"))
            .query(&[("date", date.format("%Y-%m-%d").to_string())])
            .bearer_auth(&self.token)
            .send()
            .await?;

        let summary: Vec<CleanerAvailability> = check(response).await?.json().await?;
        tracing::debug!("Fetched availability for {} cleaners", summary.len());
        Ok(summary)
    }

    async fn assign_job(&self, request: AssignJobRequest) -> Result<CommandOutcome> {
        tracing::debug!(
            "Assigning job {} to cleaner {} at {}",
            request.job_id,
            request.cleaner_id,
            request.start_time
        );

        let response = self
            .http
            .post(self.url("/api/assignments"))
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    async fn update_booking(
        &self,
        job_id: Uuid,
        request: UpdateBookingRequest,
    ) -> Result<CommandOutcome> {
        tracing::debug!(
            "Moving booking {} to cleaner {} at {}",
            job_id,
            request.cleaner_id,
            request.start_time
        );

        let response = self
            .http
            .patch(self.url(&format!("/api/bookings/{}", job_id)))
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await?;

        Ok(check(response).await?.json().await?)
    }

    async fn delete_booking(&self, job_id: Uuid) -> Result<()> {
        tracing::debug!("Deleting booking {}", job_id);

        let response = self
            .http
            .delete(self.url(&format!("/api/bookings/{}", job_id)))
            .bearer_auth(&self.token)
            .send()
            .await?;

        check(response).await?;
        Ok(())
    }
}
