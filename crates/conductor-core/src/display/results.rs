//! Result wrapper types for displaying operation outcomes.
//!
//! Each orchestrator operation has one wrapper that renders its outcome
//! with a consistent headline plus the relevant resource details.

use std::fmt;

use crate::{
    models::{Plan, PlanSummary},
    scheduler::{dispatch::DispatchOutcome, merge::MergedResult, submit::SubmitOutcome},
};

/// Wrapper type for displaying the result of plan creation.
///
/// Formats the new plan's identifier, the number of subtasks, and a
/// per-subtask summary including declared dependencies.
pub struct CreatedPlan {
    pub plan: Plan,
}

impl CreatedPlan {
    /// Create a new CreatedPlan wrapper.
    pub fn new(plan: Plan) -> Self {
        Self { plan }
    }
}

impl fmt::Display for CreatedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created plan with ID: {} ({} subtask(s))",
            self.plan.id,
            self.plan.subtasks.len()
        )?;
        writeln!(f)?;
        for subtask in &self.plan.subtasks {
            if subtask.dependencies.is_empty() {
                writeln!(f, "- {}: {}", subtask.id, subtask.description)?;
            } else {
                writeln!(
                    f,
                    "- {}: {} (depends on: {})",
                    subtask.id,
                    subtask.description,
                    subtask.dependencies.join(", ")
                )?;
            }
        }
        Ok(())
    }
}

/// Wrapper type for displaying the delta of one dispatch call.
pub struct DispatchRound {
    pub outcome: DispatchOutcome,
}

impl DispatchRound {
    /// Create a new DispatchRound wrapper.
    pub fn new(outcome: DispatchOutcome) -> Self {
        Self { outcome }
    }
}

impl fmt::Display for DispatchRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.outcome.dispatched.is_empty() {
            writeln!(
                f,
                "No subtasks ready for dispatch in plan {}.",
                self.outcome.plan_id
            )
        } else {
            writeln!(
                f,
                "Dispatched {} subtask(s): {}",
                self.outcome.dispatched.len(),
                self.outcome.dispatched.join(", ")
            )
        }
    }
}

/// Wrapper type for displaying a plan's overall and per-subtask status.
pub struct StatusReport {
    pub plan: Plan,
}

impl StatusReport {
    /// Create a new StatusReport wrapper.
    pub fn new(plan: Plan) -> Self {
        Self { plan }
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = PlanSummary::from(&self.plan);
        write!(f, "{summary}")?;

        writeln!(f, "### Subtask status")?;
        writeln!(f)?;
        for subtask in &self.plan.subtasks {
            writeln!(f, "- {}: {}", subtask.id, subtask.status.with_icon())?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying the acknowledgement of a submitted result.
pub struct SubmitAck {
    pub outcome: SubmitOutcome,
}

impl SubmitAck {
    /// Create a new SubmitAck wrapper.
    pub fn new(outcome: SubmitOutcome) -> Self {
        Self { outcome }
    }
}

impl fmt::Display for SubmitAck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Recorded '{}' for {}. Plan status: {}",
            self.outcome.new_status, self.outcome.subtask_id, self.outcome.plan_status
        )
    }
}

/// Wrapper type for displaying the merged output of a completed plan.
pub struct MergeReport {
    pub merged: MergedResult,
}

impl MergeReport {
    /// Create a new MergeReport wrapper.
    pub fn new(merged: MergedResult) -> Self {
        Self { merged }
    }
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Merged {} subtask result(s) for plan {}",
            self.merged.subtask_ids.len(),
            self.merged.plan_id
        )?;
        writeln!(f)?;
        write!(f, "{}", self.merged.text)
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{PlanStatus, Subtask, SubtaskStatus};

    fn create_test_plan() -> Plan {
        Plan {
            id: "plan-1".to_string(),
            description: "Test Plan".to_string(),
            context: None,
            subtasks: vec![
                Subtask {
                    id: "subtask-1".to_string(),
                    description: "First".to_string(),
                    dependencies: vec![],
                    status: SubtaskStatus::Completed,
                    result: Some("first done".to_string()),
                    error: None,
                },
                Subtask {
                    id: "subtask-2".to_string(),
                    description: "Second".to_string(),
                    dependencies: vec!["subtask-1".to_string()],
                    status: SubtaskStatus::Pending,
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
    fn test_created_plan_display() {
        let output = format!("{}", CreatedPlan::new(create_test_plan()));
        assert!(output.contains("Created plan with ID: plan-1 (2 subtask(s))"));
        assert!(output.contains("- subtask-1: First"));
        assert!(output.contains("- subtask-2: Second (depends on: subtask-1)"));
    }

    #[test]
    fn test_dispatch_round_display() {
        let round = DispatchRound::new(DispatchOutcome {
            plan_id: "plan-1".to_string(),
            dispatched: vec!["subtask-1".to_string(), "subtask-3".to_string()],
        });
        let output = format!("{round}");
        assert!(output.contains("Dispatched 2 subtask(s): subtask-1, subtask-3"));

        let empty = DispatchRound::new(DispatchOutcome {
            plan_id: "plan-1".to_string(),
            dispatched: vec![],
        });
        let output = format!("{empty}");
        assert!(output.contains("No subtasks ready for dispatch in plan plan-1."));
    }

    #[test]
    fn test_status_report_display() {
        let output = format!("{}", StatusReport::new(create_test_plan()));
        assert!(output.contains("## plan-1 (1/2)"));
        assert!(output.contains("- **Status**: in_progress"));
        assert!(output.contains("- subtask-1: ✓ Completed"));
        assert!(output.contains("- subtask-2: ○ Pending"));
    }

    #[test]
    fn test_submit_ack_display() {
        let ack = SubmitAck::new(SubmitOutcome {
            plan_id: "plan-1".to_string(),
            subtask_id: "subtask-2".to_string(),
            new_status: SubtaskStatus::Completed,
            plan_status: PlanStatus::Completed,
        });
        let output = format!("{ack}");
        assert!(output.contains("Recorded 'completed' for subtask-2"));
        assert!(output.contains("Plan status: completed"));
    }

    #[test]
    fn test_merge_report_display() {
        let report = MergeReport::new(MergedResult {
            plan_id: "plan-1".to_string(),
            subtask_ids: vec!["subtask-1".to_string(), "subtask-2".to_string()],
            text: "first done\n\nsecond done".to_string(),
        });
        let output = format!("{report}");
        assert!(output.contains("Merged 2 subtask result(s) for plan plan-1"));
        assert!(output.ends_with("first done\n\nsecond done"));
    }

    #[test]
    fn test_plan_display_shows_result_sections() {
        let output = format!("{}", create_test_plan());
        assert!(output.contains("# plan-1. Test Plan"));
        assert!(output.contains("### subtask-1. First (✓ Completed)"));
        assert!(output.contains("#### Result"));
        assert!(output.contains("first done"));
        assert!(output.contains("Depends on: subtask-1"));
    }
}
