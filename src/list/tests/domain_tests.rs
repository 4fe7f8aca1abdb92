//! Domain-focused tests for record types and events.

use crate::list::domain::{
    ListEvent, LoadedTask, NewTask, RecordId, TaskRecord, parse_loaded_tasks,
};
use rstest::rstest;

#[rstest]
fn record_id_exposes_value_and_display() {
    let id = RecordId::new(7);
    assert_eq!(id.value(), 7);
    assert_eq!(id.to_string(), "7");
    assert_eq!(RecordId::from(7_u64), id);
}

#[rstest]
fn new_task_defaults_to_incomplete() {
    let record = TaskRecord::from_new(RecordId::new(0), NewTask::new("write tests"));
    assert_eq!(record.text(), "write tests");
    assert!(!record.is_ready());
}

#[rstest]
fn new_task_ready_flag_carries_through() {
    let record = TaskRecord::from_new(
        RecordId::new(1),
        NewTask::new("already done").with_ready(true),
    );
    assert!(record.is_ready());
}

#[rstest]
fn loaded_task_maps_checked_onto_completion_flag() {
    let record = TaskRecord::from_loaded(LoadedTask {
        id: RecordId::new(3),
        text: "archive mail".to_owned(),
        checked: true,
    });
    assert_eq!(record.id(), RecordId::new(3));
    assert_eq!(record.text(), "archive mail");
    assert!(record.is_ready());
}

#[rstest]
fn parse_loaded_tasks_reads_persisted_array() {
    let tasks = parse_loaded_tasks(
        r#"[{"id":1,"text":"a","checked":false},{"id":2,"text":"b","checked":true}]"#,
    )
    .expect("valid persisted payload");

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks.first().map(|task| task.id), Some(RecordId::new(1)));
    assert_eq!(tasks.last().map(|task| task.checked), Some(true));
}

#[rstest]
fn parse_loaded_tasks_rejects_malformed_input() {
    assert!(parse_loaded_tasks("not json").is_err());
    assert!(parse_loaded_tasks(r#"[{"id":1}]"#).is_err());
}

#[rstest]
fn pre_removal_event_stays_internal() {
    assert!(!ListEvent::ItemRemoving(RecordId::new(1)).is_outward());
    assert!(ListEvent::ItemAdded(RecordId::new(1)).is_outward());
    assert!(ListEvent::ItemRemoved.is_outward());
    assert!(ListEvent::ItemsChanged.is_outward());
}
