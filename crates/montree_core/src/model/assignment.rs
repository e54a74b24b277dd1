//! Classroom record of a work assigned to a child.
//!
//! Assignments are immutable input to the sequencing engine. Area and work
//! name are free text and are never assumed to match the curriculum.

use super::ModelValidationError;
use serde::{Deserialize, Serialize};

/// Presentation state of one assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    NotStarted,
    Presented,
    Practicing,
    /// `completed` is the legacy label for this state.
    #[serde(alias = "completed")]
    Mastered,
}

impl WorkStatus {
    /// Stable storage label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Presented => "presented",
            Self::Practicing => "practicing",
            Self::Mastered => "mastered",
        }
    }

    /// Parses a storage or wire label, accepting the legacy `completed`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "not_started" => Some(Self::NotStarted),
            "presented" => Some(Self::Presented),
            "practicing" => Some(Self::Practicing),
            "mastered" | "completed" => Some(Self::Mastered),
            _ => None,
        }
    }
}

impl Default for WorkStatus {
    fn default() -> Self {
        Self::Presented
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub child_id: String,
    /// Free-text area label as recorded, e.g. `Math`.
    pub area: String,
    /// Free-text work name as recorded; may be misspelled or custom.
    pub work_name: String,
    #[serde(default)]
    pub status: WorkStatus,
}

impl Assignment {
    pub fn new(
        child_id: impl Into<String>,
        area: impl Into<String>,
        work_name: impl Into<String>,
        status: WorkStatus,
    ) -> Self {
        Self {
            child_id: child_id.into(),
            area: area.into(),
            work_name: work_name.into(),
            status,
        }
    }

    /// Checks storage-level invariants.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if self.child_id.trim().is_empty() {
            return Err(ModelValidationError::EmptyChildId);
        }
        if self.work_name.trim().is_empty() {
            return Err(ModelValidationError::EmptyWorkName);
        }
        Ok(())
    }
}
