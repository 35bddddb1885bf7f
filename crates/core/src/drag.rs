//! # Drag/Drop Coordinator
//!
//! The assignment board's interaction lifecycle as an explicit state machine,
//! decoupled from whatever pointer-event layer drives it:
//!
//! ```text
//! Idle -> Dragging(payload) -> Idle                          (cancelled / dropped outside)
//! Idle -> Dragging(payload) -> AwaitingConfirmation(pending) (dropped on a cell)
//! AwaitingConfirmation -> Idle                               (operator cancel or confirm)
//! ```
//!
//! Dropping on a cell consults the derived grid for conflicts and produces a
//! [`PendingAssignment`] carrying the warning set and whether the gesture is a
//! move (the job was already placed) or a first assignment. Only one pending
//! assignment can exist at a time: starting a new drag while one is awaiting
//! confirmation is rejected rather than queued.

use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::{BoardError, BoardResult};
use crate::grid::{Grid, SlotAvailability};
use crate::models::job::Job;

/// The job being dragged. Carries a denormalized copy so an overlay can
/// render the card without a re-fetch.
#[derive(Debug, Clone)]
pub struct DragPayload {
    pub job: Job,
}

/// The (cleaner, slot) cell under the pointer at drop time.
#[derive(Debug, Clone)]
pub struct DropTarget {
    pub cleaner_id: Uuid,
    pub slot: String,
    pub date: NaiveDate,
    pub availability: SlotAvailability,
}

/// A conflict detected when a drop lands on a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentWarning {
    /// The backend marked the cleaner busy or off for this slot.
    CleanerUnavailable,
    /// The slot already holds `count` placed jobs.
    SlotOccupied { count: usize },
}

impl fmt::Display for AssignmentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentWarning::CleanerUnavailable => {
                write!(f, "Cleaner is marked unavailable for this slot")
            }
            AssignmentWarning::SlotOccupied { count } => {
                write!(f, "{} job(s) already assigned to this slot", count)
            }
        }
    }
}

/// The proposed transition produced by a completed drag. Lives only for the
/// duration of the confirmation step: discarded on cancel, consumed into a
/// backend command on confirm.
#[derive(Debug, Clone)]
pub struct PendingAssignment {
    pub job: Job,
    pub cleaner_id: Uuid,
    pub slot: String,
    pub date: NaiveDate,
    pub warnings: Vec<AssignmentWarning>,
    pub is_move: bool,
}

#[derive(Debug, Clone)]
pub enum DragState {
    Idle,
    Dragging(DragPayload),
    AwaitingConfirmation(PendingAssignment),
}

/// Owns the active-drag state for one board. A single pointer means a single
/// gesture: the coordinator enforces that invariant on every transition.
#[derive(Debug)]
pub struct DragCoordinator {
    state: DragState,
}

impl Default for DragCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl DragCoordinator {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    pub fn dragging(&self) -> Option<&DragPayload> {
        match &self.state {
            DragState::Dragging(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<&PendingAssignment> {
        match &self.state {
            DragState::AwaitingConfirmation(pending) => Some(pending),
            _ => None,
        }
    }

    /// Begin dragging `job`. Works identically for an unassigned job and for
    /// one already placed elsewhere; the distinction only matters at drop
    /// time, where it decides assign-vs-move.
    pub fn begin_drag(&mut self, job: Job) -> BoardResult<()> {
        match self.state {
            DragState::Idle => {
                self.state = DragState::Dragging(DragPayload { job });
                Ok(())
            }
            DragState::Dragging(_) => Err(BoardError::DragInProgress),
            DragState::AwaitingConfirmation(_) => Err(BoardError::ConfirmationPending),
        }
    }

    /// Abandon the active drag: pointer released over no valid cell. No side
    /// effects; harmless when no drag is active.
    pub fn cancel_drag(&mut self) {
        if matches!(self.state, DragState::Dragging(_)) {
            self.state = DragState::Idle;
        }
    }

    /// Complete the active drag on `target`, computing the warning set from
    /// the grid and staging a [`PendingAssignment`] for confirmation.
    pub fn drop_on(&mut self, grid: &Grid, target: DropTarget) -> BoardResult<&PendingAssignment> {
        let payload = match &self.state {
            DragState::Dragging(payload) => payload.clone(),
            DragState::AwaitingConfirmation(_) => return Err(BoardError::ConfirmationPending),
            DragState::Idle => return Err(BoardError::NoActiveDrag),
        };

        let warnings = compute_warnings(grid, &target);
        let is_move = payload.job.is_placed();

        self.state = DragState::AwaitingConfirmation(PendingAssignment {
            job: payload.job,
            cleaner_id: target.cleaner_id,
            slot: target.slot,
            date: target.date,
            warnings,
            is_move,
        });

        match &self.state {
            DragState::AwaitingConfirmation(pending) => Ok(pending),
            _ => unreachable!(),
        }
    }

    /// Operator cancelled the confirmation dialog: discard the pending
    /// assignment without dispatching anything.
    pub fn cancel_pending(&mut self) -> Option<PendingAssignment> {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::AwaitingConfirmation(pending) => Some(pending),
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Operator confirmed: consume the pending assignment so the caller can
    /// turn it into a backend command. The coordinator returns to `Idle`.
    pub fn take_confirmed(&mut self) -> BoardResult<PendingAssignment> {
        match std::mem::replace(&mut self.state, DragState::Idle) {
            DragState::AwaitingConfirmation(pending) => Ok(pending),
            other => {
                self.state = other;
                Err(BoardError::NothingToConfirm)
            }
        }
    }
}

/// Conflict detection for a drop. The grid cell is authoritative when it
/// exists; the drop descriptor's availability covers targets the summary did
/// not report.
fn compute_warnings(grid: &Grid, target: &DropTarget) -> Vec<AssignmentWarning> {
    let mut warnings = Vec::new();

    let cell = grid.cell(target.cleaner_id, &target.slot);

    let availability = cell
        .map(|c| c.availability)
        .unwrap_or(target.availability);
    if availability == SlotAvailability::Unavailable {
        warnings.push(AssignmentWarning::CleanerUnavailable);
    }

    if let Some(cell) = cell {
        if cell.is_occupied() {
            warnings.push(AssignmentWarning::SlotOccupied {
                count: cell.jobs.len(),
            });
        }
    }

    warnings
}
