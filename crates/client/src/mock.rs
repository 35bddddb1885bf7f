use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

use tidysched_core::models::cleaner::CleanerAvailability;
use tidysched_core::models::commands::{AssignJobRequest, CommandOutcome, UpdateBookingRequest};
use tidysched_core::models::job::Job;

use crate::gateway::BookingApi;

// Mock gateway for testing
mock! {
    pub BookingClient {}

    #[async_trait]
    impl BookingApi for BookingClient {
        async fn fetch_unassigned_jobs(&self) -> eyre::Result<Vec<Job>>;

        async fn fetch_availability(
            &self,
            date: NaiveDate,
        ) -> eyre::Result<Vec<CleanerAvailability>>;

        async fn assign_job(&self, request: AssignJobRequest) -> eyre::Result<CommandOutcome>;

        async fn update_booking(
            &self,
            job_id: Uuid,
            request: UpdateBookingRequest,
        ) -> eyre::Result<CommandOutcome>;

        async fn delete_booking(&self, job_id: Uuid) -> eyre::Result<()>;
    }
}
