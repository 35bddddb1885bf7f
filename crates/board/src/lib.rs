//! # TidySched Board
//!
//! The board crate owns the calendar job-assignment board: the admin surface
//! where an operator drags unassigned cleaning jobs (or already-placed ones)
//! onto cleaner/time-slot cells for a selected date.
//!
//! ## Architecture
//!
//! - **Controller**: per-board state and orchestration — loading, drag
//!   lifecycle, confirmation, deletion
//! - **Notices**: operator-facing outcome messages replacing error
//!   propagation; nothing here crashes the board
//!
//! The controller is deliberately UI-agnostic. It exposes the drag lifecycle
//! as explicit calls (`begin_drag`, `drop_on`, `confirm`, …) so any widget
//! layer can drive it from its own pointer events, and the conflict logic
//! stays testable without simulating any of them. All fetched state is a
//! read-through cache of backend truth: every successful mutation triggers a
//! full reload instead of patching locally.

/// Per-board state and orchestration
pub mod controller;
/// Operator-facing notices (the board's error surface)
pub mod notice;

pub use controller::{fetch_board, BoardController, BoardSnapshot, LoadTicket};
pub use notice::{Notice, NoticeSeverity};
