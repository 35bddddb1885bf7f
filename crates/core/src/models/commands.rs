use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignJobRequest {
    pub job_id: Uuid,
    pub cleaner_id: Uuid,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingRequest {
    pub cleaner_id: Uuid,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub notes: Option<String>,
}

/// Outcome of an accepted assign/move command.
///
/// The backend may accept a mutation and still flag it (e.g. a permitted
/// double-booking); `warning` carries that soft-conflict text when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommandOutcome {
    #[serde(default)]
    pub warning: Option<String>,
}
