//! Domain model for curriculum sequencing and progress.
//!
//! # Responsibility
//! - Define curriculum, assignment and derived progress shapes.
//! - Keep wire names aligned with the progress endpoint contract.
//!
//! # Invariants
//! - Assignments are immutable engine input.
//! - Progress records are derived only and have no lifecycle of their own.

pub mod assignment;
pub mod curriculum;
pub mod progress;

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-boundary validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    EmptyWorkName,
    EmptyAreaKey,
    EmptyChildId,
    /// Sequences are 1-based.
    ZeroSequence { work_id: String },
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyWorkName => write!(f, "work name must not be blank"),
            Self::EmptyAreaKey => write!(f, "area key must not be blank"),
            Self::EmptyChildId => write!(f, "child id must not be blank"),
            Self::ZeroSequence { work_id } => {
                write!(f, "work `{work_id}` has sequence 0; sequences start at 1")
            }
        }
    }
}

impl Error for ModelValidationError {}
