//! Tests for the model types.

use std::str::FromStr;

use jiff::Timestamp;

use super::*;

fn sample_plan() -> Plan {
    Plan {
        id: "plan-1".to_string(),
        description: "Sample objective".to_string(),
        context: None,
        subtasks: vec![
            Subtask {
                id: "subtask-1".to_string(),
                description: "First".to_string(),
                dependencies: vec![],
                status: SubtaskStatus::Completed,
                result: Some("done".to_string()),
                error: None,
            },
            Subtask {
                id: "subtask-2".to_string(),
                description: "Second".to_string(),
                dependencies: vec!["subtask-1".to_string()],
                status: SubtaskStatus::Dispatched,
                result: None,
                error: None,
            },
        ],
        status: PlanStatus::InProgress,
        created_at: Timestamp::from_second(1_640_995_200).unwrap(),
        next_subtask: 3,
    }
}

#[test]
fn test_plan_status_from_str_round_trip() {
    for status in [
        PlanStatus::Pending,
        PlanStatus::InProgress,
        PlanStatus::Completed,
        PlanStatus::Failed,
    ] {
        assert_eq!(PlanStatus::from_str(status.as_str()), Ok(status));
    }
}

#[test]
fn test_subtask_status_from_str_round_trip() {
    for status in [
        SubtaskStatus::Pending,
        SubtaskStatus::Dispatched,
        SubtaskStatus::Completed,
        SubtaskStatus::Failed,
    ] {
        assert_eq!(SubtaskStatus::from_str(status.as_str()), Ok(status));
    }
}

#[test]
fn test_plan_status_accepts_alternative_inprogress_spelling() {
    assert_eq!(
        PlanStatus::from_str("inprogress"),
        Ok(PlanStatus::InProgress)
    );
    assert_eq!(
        PlanStatus::from_str("in_progress"),
        Ok(PlanStatus::InProgress)
    );
}

#[test]
fn test_status_from_str_rejects_unknown() {
    assert!(PlanStatus::from_str("archived").is_err());
    assert!(SubtaskStatus::from_str("in_progress").is_err());
    assert!(Outcome::from_str("dispatched").is_err());
}

#[test]
fn test_outcome_converts_to_terminal_subtask_status() {
    let completed: SubtaskStatus = Outcome::Completed.into();
    let failed: SubtaskStatus = Outcome::Failed.into();
    assert_eq!(completed, SubtaskStatus::Completed);
    assert_eq!(failed, SubtaskStatus::Failed);
    assert!(completed.is_terminal());
    assert!(failed.is_terminal());
}

#[test]
fn test_plan_subtask_lookup() {
    let mut plan = sample_plan();
    assert!(plan.subtask("subtask-2").is_some());
    assert!(plan.subtask("subtask-99").is_none());

    let subtask = plan.subtask_mut("subtask-2").unwrap();
    subtask.status = SubtaskStatus::Completed;
    assert_eq!(
        plan.subtask("subtask-2").unwrap().status,
        SubtaskStatus::Completed
    );
}

#[test]
fn test_statuses_serialize_lowercase() {
    let json = serde_json::to_string(&sample_plan()).expect("Failed to serialize plan");
    assert!(json.contains("\"in_progress\""));
    assert!(json.contains("\"dispatched\""));
    assert!(json.contains("\"completed\""));
    // Absent optional fields are omitted entirely
    assert!(!json.contains("\"context\""));
    assert!(!json.contains("\"error\""));
}

#[test]
fn test_plan_summary_counts() {
    let summary = PlanSummary::from(&sample_plan());
    assert_eq!(summary.total_subtasks, 2);
    assert_eq!(summary.completed_subtasks, 1);
    assert_eq!(summary.dispatched_subtasks, 1);
    assert_eq!(summary.failed_subtasks, 0);
    assert_eq!(summary.status, PlanStatus::InProgress);
}
