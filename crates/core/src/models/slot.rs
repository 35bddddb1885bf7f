use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::errors::{BoardError, BoardResult};

/// The fixed slot catalog partitioning a cleaner's working day.
///
/// This is static client configuration, not fetched state; the backend reports
/// availability keyed by these labels.
pub const SLOT_LABELS: [&str; 5] = [
    "08:00-10:00",
    "10:00-12:00",
    "12:00-14:00",
    "14:00-16:00",
    "16:00-18:00",
];

/// Position of a label within the catalog, used for ordering cells.
pub fn slot_index(label: &str) -> Option<usize> {
    SLOT_LABELS.iter().position(|l| *l == label)
}

/// Parse a slot label into its start and end clock times.
pub fn slot_bounds(label: &str) -> BoardResult<(NaiveTime, NaiveTime)> {
    let (start, end) = label
        .split_once('-')
        .ok_or_else(|| BoardError::UnknownSlot(label.to_string()))?;

    let start = NaiveTime::parse_from_str(start, "%H:%M")
        .map_err(|_| BoardError::UnknownSlot(label.to_string()))?;
    let end = NaiveTime::parse_from_str(end, "%H:%M")
        .map_err(|_| BoardError::UnknownSlot(label.to_string()))?;

    Ok((start, end))
}

/// Combine a calendar date with a slot label to produce the start/end
/// timestamps carried by assign and move commands.
pub fn slot_window(date: NaiveDate, label: &str) -> BoardResult<(NaiveDateTime, NaiveDateTime)> {
    let (start, end) = slot_bounds(label)?;
    Ok((date.and_time(start), date.and_time(end)))
}
