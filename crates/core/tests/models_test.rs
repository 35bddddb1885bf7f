use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string};
use tidysched_core::errors::BoardError;
use tidysched_core::models::{
    cleaner::{CleanerAvailability, SlotReport},
    commands::{AssignJobRequest, CommandOutcome, UpdateBookingRequest},
    job::{Job, JobStatus, RecurrenceFrequency},
    slot::{slot_bounds, slot_index, slot_window, SLOT_LABELS},
};
use uuid::Uuid;

fn sample_job() -> Job {
    Job {
        id: Uuid::new_v4(),
        customer_id: Uuid::new_v4(),
        scheduled_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        time_slot: Some("10:00-12:00".to_string()),
        cleaner_id: Some(Uuid::new_v4()),
        estimated_hours: 2.5,
        house_size: "3br".to_string(),
        frequency: RecurrenceFrequency::Biweekly,
        total: 180.0,
        address: "12 Elm Street".to_string(),
        status: JobStatus::Confirmed,
    }
}

#[test]
fn test_job_serialization() {
    let job = sample_job();

    let json = to_string(&job).expect("Failed to serialize job");
    let deserialized: Job = from_str(&json).expect("Failed to deserialize job");

    assert_eq!(deserialized.id, job.id);
    assert_eq!(deserialized.customer_id, job.customer_id);
    assert_eq!(deserialized.scheduled_date, job.scheduled_date);
    assert_eq!(deserialized.time_slot, job.time_slot);
    assert_eq!(deserialized.cleaner_id, job.cleaner_id);
    assert_eq!(deserialized.status, job.status);
    assert_eq!(deserialized.frequency, job.frequency);
}

#[test]
fn test_job_status_wire_format() {
    let json = to_string(&JobStatus::InProgress).expect("Failed to serialize status");
    assert_eq!(json, "\"in_progress\"");

    let status: JobStatus = from_str("\"cancelled\"").expect("Failed to deserialize status");
    assert_eq!(status, JobStatus::Cancelled);
}

#[test]
fn test_job_placement_predicates() {
    let placed = sample_job();
    assert!(placed.is_placed());
    assert!(!placed.is_unassigned());

    let mut unassigned = sample_job();
    unassigned.cleaner_id = None;
    unassigned.time_slot = None;
    assert!(unassigned.is_unassigned());
    assert!(!unassigned.is_placed());

    // A job with only one of the two set is neither.
    let mut partial = sample_job();
    partial.time_slot = None;
    assert!(!partial.is_placed());
    assert!(!partial.is_unassigned());
}

#[test]
fn test_availability_summary_deserialization() {
    // Backend shape: slots the backend computed nothing for are absent, and a
    // report may omit existing_jobs entirely.
    let cleaner_id = Uuid::new_v4();
    let json = format!(
        r#"{{
            "cleaner_id": "{}",
            "display_name": "Alice Novak",
            "calendar_synced": true,
            "slots": {{
                "08:00-10:00": {{ "is_available": true }},
                "10:00-12:00": {{ "is_available": false, "existing_jobs": [] }}
            }}
        }}"#,
        cleaner_id
    );

    let summary: CleanerAvailability =
        from_str(&json).expect("Failed to deserialize availability summary");

    assert_eq!(summary.cleaner_id, cleaner_id);
    assert_eq!(summary.display_name, "Alice Novak");
    assert!(summary.calendar_synced);
    assert_eq!(summary.slots.len(), 2);
    assert_eq!(
        summary.slots["08:00-10:00"].is_available,
        Some(true)
    );
    assert!(summary.slots["08:00-10:00"].existing_jobs.is_empty());
    assert_eq!(summary.slots["10:00-12:00"].is_available, Some(false));
}

#[test]
fn test_slot_report_default() {
    let report = SlotReport::default();
    assert_eq!(report.is_available, None);
    assert!(report.existing_jobs.is_empty());
}

#[test]
fn test_command_outcome_defaults_to_no_warning() {
    let outcome: CommandOutcome = from_str("{}").expect("Failed to deserialize outcome");
    assert_eq!(outcome.warning, None);

    let outcome: CommandOutcome = from_str(r#"{"warning": "cleaner double-booked"}"#)
        .expect("Failed to deserialize outcome");
    assert_eq!(outcome.warning.as_deref(), Some("cleaner double-booked"));
}

#[test]
fn test_assign_request_serialization() {
    let request = AssignJobRequest {
        job_id: Uuid::new_v4(),
        cleaner_id: Uuid::new_v4(),
        start_time: NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
        end_time: NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
        notes: None,
    };

    let json = to_string(&request).expect("Failed to serialize assign request");
    assert!(json.contains("2024-06-01T10:00:00"));
    assert!(json.contains("2024-06-01T12:00:00"));

    let deserialized: AssignJobRequest =
        from_str(&json).expect("Failed to deserialize assign request");
    assert_eq!(deserialized.job_id, request.job_id);
    assert_eq!(deserialized.start_time, request.start_time);
}

#[test]
fn test_update_request_serialization() {
    let request = UpdateBookingRequest {
        cleaner_id: Uuid::new_v4(),
        start_time: NaiveDate::from_ymd_opt(2024, 6, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap(),
        end_time: NaiveDate::from_ymd_opt(2024, 6, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
        notes: Some("Moved on 2024-06-02".to_string()),
    };

    let json = to_string(&request).expect("Failed to serialize update request");
    let deserialized: UpdateBookingRequest =
        from_str(&json).expect("Failed to deserialize update request");

    assert_eq!(deserialized.cleaner_id, request.cleaner_id);
    assert_eq!(deserialized.notes, request.notes);
}

#[test]
fn test_slot_catalog_order() {
    assert_eq!(SLOT_LABELS.len(), 5);
    assert_eq!(slot_index("08:00-10:00"), Some(0));
    assert_eq!(slot_index("16:00-18:00"), Some(4));
    assert_eq!(slot_index("18:00-20:00"), None);
}

#[rstest]
#[case("08:00-10:00", (8, 0), (10, 0))]
#[case("10:00-12:00", (10, 0), (12, 0))]
#[case("16:00-18:00", (16, 0), (18, 0))]
fn test_slot_bounds(
    #[case] label: &str,
    #[case] start: (u32, u32),
    #[case] end: (u32, u32),
) {
    let (parsed_start, parsed_end) = slot_bounds(label).expect("Failed to parse slot label");
    assert_eq!(
        parsed_start,
        chrono::NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap()
    );
    assert_eq!(
        parsed_end,
        chrono::NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap()
    );
}

#[test]
fn test_slot_window_combines_date_and_label() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let (start, end) = slot_window(date, "10:00-12:00").expect("Failed to build window");

    assert_eq!(start.to_string(), "2024-06-01 10:00:00");
    assert_eq!(end.to_string(), "2024-06-01 12:00:00");
}

#[test]
fn test_slot_window_rejects_unknown_label() {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let err = slot_window(date, "not-a-slot").unwrap_err();

    assert!(matches!(err, BoardError::UnknownSlot(_)));
    assert_eq!(err.to_string(), "Unknown time slot: not-a-slot");
}
