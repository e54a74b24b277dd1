//! Derived progress read models.
//!
//! Nothing here is persisted; every value is recomputed per query.

use serde::{Deserialize, Serialize};

/// Furthest point a child has reached in one area's ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontier {
    /// 1-based count of works considered complete, starting from the first.
    pub position: usize,
    /// Name of the work at `position - 1`.
    pub work_name: String,
}

/// Per-status assignment counts for one area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub presented: usize,
    pub practicing: usize,
    pub mastered: usize,
}

/// Progress entry for one area, as returned by the progress endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaProgress {
    pub area: String,
    pub area_name: String,
    pub icon: String,
    pub color: String,
    pub total_works: usize,
    /// `0..=total_works`.
    pub current_position: usize,
    pub current_work_name: Option<String>,
    /// Integer percentage `0..=100`.
    pub percent_complete: u32,
    #[serde(flatten)]
    pub counts: StatusCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildProgress {
    pub child_id: String,
    pub areas: Vec<AreaProgress>,
    pub overall_percent_complete: u32,
}
