//! Curriculum area and work records.
//!
//! # Responsibility
//! - Define the canonical per-area ordered work list shape.
//! - Provide the synthetic record used when an orphan work is placed.
//!
//! # Invariants
//! - `sequence` is 1-based and contiguous within one area after any merge.
//! - Synthetic works carry `id = "imported-<name>"` and `is_imported = true`.
//! - `area_key` is always a normalized key, never a free-text label.

use super::ModelValidationError;
use serde::{Deserialize, Serialize};

/// Prefix used for ids of works placed from unmatched assignments.
pub const IMPORTED_ID_PREFIX: &str = "imported-";

/// Top-level curriculum subject with its display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumArea {
    /// Canonical key, e.g. `mathematics`.
    pub key: String,
    /// User-facing label.
    pub name: String,
    pub icon: String,
    pub color: String,
}

impl CurriculumArea {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }

    /// Checks storage-level invariants.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if self.key.trim().is_empty() {
            return Err(ModelValidationError::EmptyAreaKey);
        }
        Ok(())
    }
}

/// One work inside an area's ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumWork {
    pub id: String,
    /// Canonical display name as authored.
    pub name: String,
    /// 1-based position within the owning area.
    pub sequence: u32,
    pub area_key: String,
    /// `true` only for works placed from unmatched assignments.
    #[serde(rename = "isImported", default)]
    pub is_imported: bool,
}

impl CurriculumWork {
    /// Creates an authored (non-imported) work.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sequence: u32,
        area_key: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sequence,
            area_key: area_key.into(),
            is_imported: false,
        }
    }

    /// Creates the synthetic record for an orphan work name.
    ///
    /// `sequence` starts at `0`; the merge step renumbers the whole list.
    pub fn imported(name: impl Into<String>, area_key: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: format!("{IMPORTED_ID_PREFIX}{name}"),
            name,
            sequence: 0,
            area_key: area_key.into(),
            is_imported: true,
        }
    }

    /// Checks storage-level invariants.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        if self.name.trim().is_empty() {
            return Err(ModelValidationError::EmptyWorkName);
        }
        if self.area_key.trim().is_empty() {
            return Err(ModelValidationError::EmptyAreaKey);
        }
        if self.sequence == 0 {
            return Err(ModelValidationError::ZeroSequence {
                work_id: self.id.clone(),
            });
        }
        Ok(())
    }
}
