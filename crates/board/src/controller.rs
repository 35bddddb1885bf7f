//! # Board Controller
//!
//! Per-board state and orchestration for the assignment board. One controller
//! instance corresponds to one open board; there is no process-wide state.
//!
//! The controller enforces the three guards the interaction design needs:
//!
//! - only one drag gesture or pending assignment at a time (delegated to
//!   [`DragCoordinator`]),
//! - only one backend command in flight at a time,
//! - a load response is applied only if it belongs to the latest requested
//!   date — changing the date mid-flight discards the stale response.
//!
//! Backend command failures never propagate: they become [`Notice`]s and the
//! displayed state stays at the last successful load.

use std::sync::Arc;

use chrono::NaiveDate;
use eyre::Result;
use uuid::Uuid;

use tidysched_client::BookingApi;
use tidysched_core::drag::{DragCoordinator, DragState, DropTarget, PendingAssignment};
use tidysched_core::errors::{BoardError, BoardResult};
use tidysched_core::grid::{derive_grid, Grid};
use tidysched_core::models::cleaner::CleanerAvailability;
use tidysched_core::models::commands::{AssignJobRequest, UpdateBookingRequest};
use tidysched_core::models::job::Job;
use tidysched_core::models::slot::slot_window;

use crate::notice::Notice;

/// Everything one board load fetches: the unassigned job list and the
/// availability summary for the selected date.
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub unassigned: Vec<Job>,
    pub cleaners: Vec<CleanerAvailability>,
}

/// Handle identifying one load request. A response is applied only while its
/// ticket is still the latest one issued.
#[derive(Debug, Clone, Copy)]
pub struct LoadTicket {
    generation: u64,
    date: NaiveDate,
}

impl LoadTicket {
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Fetch both halves of a board snapshot concurrently.
pub async fn fetch_board(api: &dyn BookingApi, date: NaiveDate) -> Result<BoardSnapshot> {
    let (unassigned, cleaners) =
        tokio::try_join!(api.fetch_unassigned_jobs(), api.fetch_availability(date))?;

    Ok(BoardSnapshot {
        unassigned,
        cleaners,
    })
}

pub struct BoardController {
    api: Arc<dyn BookingApi>,
    selected_date: NaiveDate,
    grid: Option<Grid>,
    unassigned: Vec<Job>,
    coordinator: DragCoordinator,
    pending_deletion: Option<Job>,
    command_in_flight: bool,
    load_generation: u64,
    loading: bool,
    notices: Vec<Notice>,
}

impl BoardController {
    pub fn new(api: Arc<dyn BookingApi>, date: NaiveDate) -> Self {
        Self {
            api,
            selected_date: date,
            grid: None,
            unassigned: Vec::new(),
            coordinator: DragCoordinator::new(),
            pending_deletion: None,
            command_in_flight: false,
            load_generation: 0,
            loading: false,
            notices: Vec::new(),
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn unassigned_jobs(&self) -> &[Job] {
        &self.unassigned
    }

    pub fn drag_state(&self) -> &DragState {
        self.coordinator.state()
    }

    pub fn pending_assignment(&self) -> Option<&PendingAssignment> {
        self.coordinator.pending()
    }

    pub fn pending_deletion(&self) -> Option<&Job> {
        self.pending_deletion.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Hand accumulated notices to the UI, clearing the log.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    // ---- Loading -----------------------------------------------------------

    /// Start a load for the currently selected date. Invalidates every ticket
    /// issued before this one.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        self.loading = true;

        LoadTicket {
            generation: self.load_generation,
            date: self.selected_date,
        }
    }

    /// Apply a finished load. Responses for superseded tickets are discarded;
    /// a failed load keeps the prior state and pushes an error notice.
    pub fn apply_load(&mut self, ticket: LoadTicket, result: Result<BoardSnapshot>) {
        if ticket.generation != self.load_generation {
            tracing::debug!(
                "Discarding stale load for {} (generation {})",
                ticket.date,
                ticket.generation
            );
            return;
        }

        self.loading = false;

        match result {
            Ok(snapshot) => {
                // Placed jobs for the date come from the per-slot reports in
                // the availability summary.
                let placed: Vec<Job> = snapshot
                    .cleaners
                    .iter()
                    .flat_map(|cleaner| cleaner.slots.values())
                    .flat_map(|report| report.existing_jobs.iter().cloned())
                    .collect();

                self.grid = Some(derive_grid(ticket.date, &snapshot.cleaners, &placed));
                self.unassigned = snapshot.unassigned;
            }
            Err(err) => {
                tracing::error!("Failed to load board data: {:?}", err);
                self.push(Notice::error(format!("Failed to load board data: {}", err)));
            }
        }
    }

    /// Fetch and apply a snapshot for the selected date.
    pub async fn load(&mut self) {
        let ticket = self.begin_load();
        let api = Arc::clone(&self.api);
        let result = fetch_board(api.as_ref(), ticket.date).await;
        self.apply_load(ticket, result);
    }

    /// Switch the board to a different date and reload.
    pub async fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.load().await;
    }

    // ---- Drag lifecycle ----------------------------------------------------

    /// Operator picked up a job card, either from the unassigned list or from
    /// a grid cell.
    pub fn begin_drag(&mut self, job: Job) -> BoardResult<()> {
        self.coordinator.begin_drag(job)
    }

    /// Pointer released outside any valid cell.
    pub fn cancel_drag(&mut self) {
        self.coordinator.cancel_drag();
    }

    /// Pointer released over a cell: stage a pending assignment carrying the
    /// computed conflict warnings.
    pub fn drop_on(&mut self, target: DropTarget) -> BoardResult<&PendingAssignment> {
        let grid = self.grid.as_ref().ok_or(BoardError::NotLoaded)?;
        self.coordinator.drop_on(grid, target)
    }

    /// Operator dismissed the confirmation dialog. No command is issued and
    /// no displayed state changes.
    pub fn cancel_pending(&mut self) {
        if self.coordinator.cancel_pending().is_some() {
            tracing::debug!("Pending assignment discarded");
        }
    }

    /// Operator confirmed the staged assignment. Dispatches an assign command
    /// for a first placement or a move command for a relocation, then reloads
    /// on success.
    ///
    /// Backend rejection is converted into an error notice, per the board's
    /// no-propagation policy; `Err` here means the confirm itself was invalid
    /// (nothing staged, command already in flight, unknown slot label).
    pub async fn confirm(&mut self, notes: Option<String>) -> BoardResult<()> {
        if self.command_in_flight {
            return Err(BoardError::CommandInFlight);
        }

        let staged = self
            .coordinator
            .pending()
            .ok_or(BoardError::NothingToConfirm)?;
        let (start_time, end_time) = slot_window(staged.date, &staged.slot)?;

        let pending = self.coordinator.take_confirmed()?;
        let is_move = pending.is_move;
        let notes = normalize_notes(notes);

        self.command_in_flight = true;
        let result = if is_move {
            // A silent move is easy to lose track of; default the audit note.
            let notes = notes.or_else(|| {
                Some(format!("Moved on {}", pending.date.format("%Y-%m-%d")))
            });

            self.api
                .update_booking(
                    pending.job.id,
                    UpdateBookingRequest {
                        cleaner_id: pending.cleaner_id,
                        start_time,
                        end_time,
                        notes,
                    },
                )
                .await
        } else {
            self.api
                .assign_job(AssignJobRequest {
                    job_id: pending.job.id,
                    cleaner_id: pending.cleaner_id,
                    start_time,
                    end_time,
                    notes,
                })
                .await
        };
        self.command_in_flight = false;

        let action = if is_move { "Move" } else { "Assignment" };
        match result {
            Ok(outcome) => {
                match outcome.warning {
                    Some(warning) => self.push(Notice::warning(format!(
                        "{} accepted with a warning: {}",
                        action, warning
                    ))),
                    None => self.push(Notice::info(if is_move {
                        "Booking moved"
                    } else {
                        "Job assigned"
                    })),
                }

                self.load().await;
            }
            Err(err) => {
                tracing::error!("{} command failed: {:?}", action, err);
                self.push(Notice::error(format!("{} failed: {}", action, err)));
            }
        }

        Ok(())
    }

    // ---- Direct cell actions ----------------------------------------------

    /// Read-only details of the first job occupying a cell.
    pub fn job_details(&self, cleaner_id: Uuid, slot: &str) -> BoardResult<&Job> {
        let grid = self.grid.as_ref().ok_or(BoardError::NotLoaded)?;
        let cell = grid.cell(cleaner_id, slot).ok_or(BoardError::EmptySlot)?;
        cell.jobs.first().ok_or(BoardError::EmptySlot)
    }

    /// Stage deletion of a cell's first occupying job. Deletion removes the
    /// job entirely, so nothing is issued until [`Self::confirm_delete`].
    pub fn request_delete(&mut self, cleaner_id: Uuid, slot: &str) -> BoardResult<Job> {
        let job = self.job_details(cleaner_id, slot)?.clone();
        self.pending_deletion = Some(job.clone());
        Ok(job)
    }

    /// Operator declined the delete confirmation: discard, no network call.
    pub fn cancel_delete(&mut self) {
        self.pending_deletion = None;
    }

    /// Operator confirmed the staged deletion.
    pub async fn confirm_delete(&mut self) -> BoardResult<()> {
        if self.command_in_flight {
            return Err(BoardError::CommandInFlight);
        }

        let job = self
            .pending_deletion
            .take()
            .ok_or(BoardError::NothingToConfirm)?;

        self.command_in_flight = true;
        let result = self.api.delete_booking(job.id).await;
        self.command_in_flight = false;

        match result {
            Ok(()) => {
                self.push(Notice::info("Booking deleted"));
                self.load().await;
            }
            Err(err) => {
                tracing::error!("Delete command failed: {:?}", err);
                self.push(Notice::error(format!("Delete failed: {}", err)));
            }
        }

        Ok(())
    }
}

/// Treat blank operator notes as absent.
fn normalize_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}
