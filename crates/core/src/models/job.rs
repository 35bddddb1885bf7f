use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceFrequency {
    OneTime,
    Weekly,
    Biweekly,
    Monthly,
}

/// A cleaning booking. `cleaner_id` and `time_slot` are both `None` while the
/// job sits in the unassigned list; both are set once it is placed on the grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub scheduled_date: NaiveDate,
    pub time_slot: Option<String>,
    pub cleaner_id: Option<Uuid>,
    pub estimated_hours: f32,
    pub house_size: String,
    pub frequency: RecurrenceFrequency,
    pub total: f64,
    pub address: String,
    pub status: JobStatus,
}

impl Job {
    pub fn is_unassigned(&self) -> bool {
        self.cleaner_id.is_none() && self.time_slot.is_none()
    }

    pub fn is_placed(&self) -> bool {
        self.cleaner_id.is_some() && self.time_slot.is_some()
    }
}
