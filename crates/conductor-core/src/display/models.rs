//! Display implementations for domain models.
//!
//! The implementations provide markdown-formatted output with status icons,
//! kept out of the model definitions to separate presentation from state.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::models::{Plan, PlanStatus, PlanSummary, Subtask, SubtaskStatus};

/// Formats a timestamp in the system timezone as
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SubtaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.description)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Status: {}", self.status.as_str())?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if let Some(context) = &self.context {
            writeln!(f)?;
            writeln!(f, "{context}")?;
        }

        writeln!(f, "\n## Subtasks")?;
        writeln!(f)?;
        for subtask in &self.subtasks {
            write!(f, "{subtask}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Subtask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.description,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        if !self.dependencies.is_empty() {
            writeln!(f, "Depends on: {}", self.dependencies.join(", "))?;
            writeln!(f)?;
        }

        // Show result only for completed subtasks
        if self.status == SubtaskStatus::Completed {
            if let Some(result) = &self.result {
                writeln!(f, "#### Result")?;
                writeln!(f)?;
                writeln!(f, "{result}")?;
                writeln!(f)?;
            }
        }

        if self.status == SubtaskStatus::Failed {
            if let Some(error) = &self.error {
                writeln!(f, "#### Error")?;
                writeln!(f)?;
                writeln!(f, "{error}")?;
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} ({}/{})",
            self.id, self.completed_subtasks, self.total_subtasks
        )?;
        writeln!(f)?;
        writeln!(f, "- **Description**: {}", self.description)?;
        writeln!(f, "- **Status**: {}", self.status)?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}
