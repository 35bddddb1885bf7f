use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::job::Job;

/// Per-cleaner availability for one date, as reported by the backend.
///
/// The map is keyed by slot label; slots the backend computed nothing for are
/// simply absent. The client never mutates this, it is rebuilt on every load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanerAvailability {
    pub cleaner_id: Uuid,
    pub display_name: String,
    pub calendar_synced: bool,
    #[serde(default)]
    pub slots: HashMap<String, SlotReport>,
}

/// Backend verdict for a single (cleaner, slot) pair.
///
/// `is_available` is `None` when the backend had no data for the slot;
/// `existing_jobs` lists the jobs already placed there, in schedule order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotReport {
    pub is_available: Option<bool>,
    #[serde(default)]
    pub existing_jobs: Vec<Job>,
}
