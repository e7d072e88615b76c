//! Status enumerations for plans and subtasks.
//!
//! Plans and subtasks deliberately carry two distinct status vocabularies:
//! a subtask is never "in progress" (it is pending, dispatched, or resolved),
//! while the in-progress notion exists only as an aggregate at the plan
//! level. Keeping two closed enums makes the illegal combinations
//! unrepresentable.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of overall plan statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// No subtask has been dispatched or resolved yet
    #[default]
    Pending,

    /// At least one subtask has left pending
    InProgress,

    /// Every subtask is completed
    Completed,

    /// At least one subtask has failed
    Failed,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(PlanStatus::Pending),
            "inprogress" | "in_progress" => Ok(PlanStatus::InProgress),
            "completed" => Ok(PlanStatus::Completed),
            "failed" => Ok(PlanStatus::Failed),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Pending => "pending",
            PlanStatus::InProgress => "in_progress",
            PlanStatus::Completed => "completed",
            PlanStatus::Failed => "failed",
        }
    }
}

/// Type-safe enumeration of subtask statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SubtaskStatus {
    /// Subtask has not been released for execution
    #[default]
    Pending,

    /// Subtask has been handed to an external executor
    Dispatched,

    /// Subtask finished successfully and carries a result
    Completed,

    /// Subtask finished unsuccessfully and may carry an error
    Failed,
}

impl FromStr for SubtaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(SubtaskStatus::Pending),
            "dispatched" => Ok(SubtaskStatus::Dispatched),
            "completed" => Ok(SubtaskStatus::Completed),
            "failed" => Ok(SubtaskStatus::Failed),
            _ => Err(format!("Invalid subtask status: {s}")),
        }
    }
}

impl SubtaskStatus {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubtaskStatus::Pending => "pending",
            SubtaskStatus::Dispatched => "dispatched",
            SubtaskStatus::Completed => "completed",
            SubtaskStatus::Failed => "failed",
        }
    }

    /// Whether the subtask has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubtaskStatus::Completed | SubtaskStatus::Failed)
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conductor_core::models::SubtaskStatus;
    ///
    /// assert_eq!(SubtaskStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(SubtaskStatus::Dispatched.with_icon(), "➤ Dispatched");
    /// assert_eq!(SubtaskStatus::Pending.with_icon(), "○ Pending");
    /// assert_eq!(SubtaskStatus::Failed.with_icon(), "✗ Failed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            SubtaskStatus::Completed => "✓ Completed",
            SubtaskStatus::Dispatched => "➤ Dispatched",
            SubtaskStatus::Pending => "○ Pending",
            SubtaskStatus::Failed => "✗ Failed",
        }
    }
}

/// Outcome reported through submit_result.
///
/// A reported outcome is strictly narrower than [`SubtaskStatus`]: callers
/// can only resolve a subtask, never move it back to pending or dispatched.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The subtask succeeded
    Completed,

    /// The subtask failed
    Failed,
}

impl FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completed" => Ok(Outcome::Completed),
            "failed" => Ok(Outcome::Failed),
            _ => Err(format!("Invalid outcome status: {s}")),
        }
    }
}

impl From<Outcome> for SubtaskStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Completed => SubtaskStatus::Completed,
            Outcome::Failed => SubtaskStatus::Failed,
        }
    }
}
