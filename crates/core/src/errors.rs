use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Unknown time slot: {0}")]
    UnknownSlot(String),

    #[error("A drag is already in progress")]
    DragInProgress,

    #[error("An assignment is awaiting confirmation")]
    ConfirmationPending,

    #[error("No drag is in progress")]
    NoActiveDrag,

    #[error("Board data has not been loaded")]
    NotLoaded,

    #[error("No assignment is awaiting confirmation")]
    NothingToConfirm,

    #[error("A command is already in flight")]
    CommandInFlight,

    #[error("No job found at the requested slot")]
    EmptySlot,
}

pub type BoardResult<T> = Result<T, BoardError>;
