//! # Slot Grid Derivation
//!
//! Builds the cleaners × time-slots matrix the assignment board renders.
//! The derivation is a pure function over backend-reported data:
//!
//! 1. Every cleaner in the availability summary gets one cell per catalog
//!    slot, in catalog order.
//! 2. A cell's availability comes straight from the backend report for that
//!    (cleaner, slot) pair; absent data degrades to `Unknown`, never errors.
//! 3. A cell's occupying jobs are the placed jobs whose cleaner, slot and
//!    date match the cell.
//!
//! Occupancy and availability are independent signals: a slot the backend
//! marked unavailable can still hold an existing job, and the board surfaces
//! both rather than hiding the conflict.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::cleaner::CleanerAvailability;
use crate::models::job::Job;
use crate::models::slot::SLOT_LABELS;

/// Tri-state availability of a single (cleaner, slot) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotAvailability {
    Available,
    Unavailable,
    /// The backend reported no data for this cell.
    Unknown,
}

/// One cell of the assignment grid.
#[derive(Debug, Clone)]
pub struct SlotCell {
    pub availability: SlotAvailability,
    pub jobs: Vec<Job>,
}

impl SlotCell {
    pub fn is_occupied(&self) -> bool {
        !self.jobs.is_empty()
    }
}

/// The derived cleaners × slots matrix for one selected date.
#[derive(Debug, Clone)]
pub struct Grid {
    date: NaiveDate,
    cleaners: Vec<(Uuid, String)>,
    cells: HashMap<(Uuid, String), SlotCell>,
}

impl Grid {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Cleaners in summary order, as (id, display name) pairs.
    pub fn cleaners(&self) -> &[(Uuid, String)] {
        &self.cleaners
    }

    pub fn cell(&self, cleaner_id: Uuid, slot: &str) -> Option<&SlotCell> {
        self.cells.get(&(cleaner_id, slot.to_string()))
    }

    /// All placed jobs currently visible on the grid, in cell order.
    pub fn placed_jobs(&self) -> Vec<&Job> {
        let mut jobs = Vec::new();
        for (cleaner_id, _) in &self.cleaners {
            for label in SLOT_LABELS {
                if let Some(cell) = self.cell(*cleaner_id, label) {
                    jobs.extend(cell.jobs.iter());
                }
            }
        }
        jobs
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// Derive the grid for `date` from the fetched availability summary and the
/// placed jobs for that date.
pub fn derive_grid(date: NaiveDate, cleaners: &[CleanerAvailability], jobs: &[Job]) -> Grid {
    let mut cells = HashMap::new();
    let mut order = Vec::with_capacity(cleaners.len());

    for cleaner in cleaners {
        order.push((cleaner.cleaner_id, cleaner.display_name.clone()));

        for label in SLOT_LABELS {
            let availability = match cleaner.slots.get(label).and_then(|r| r.is_available) {
                Some(true) => SlotAvailability::Available,
                Some(false) => SlotAvailability::Unavailable,
                None => SlotAvailability::Unknown,
            };

            let occupying = jobs
                .iter()
                .filter(|job| {
                    job.scheduled_date == date
                        && job.cleaner_id == Some(cleaner.cleaner_id)
                        && job.time_slot.as_deref() == Some(label)
                })
                .cloned()
                .collect();

            cells.insert(
                (cleaner.cleaner_id, label.to_string()),
                SlotCell {
                    availability,
                    jobs: occupying,
                },
            );
        }
    }

    Grid {
        date,
        cleaners: order,
        cells,
    }
}
