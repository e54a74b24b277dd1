//! Child progress use-case service.
//!
//! # Responsibility
//! - Produce one progress entry per curriculum area for a child.
//!
//! # Invariants
//! - Areas are ordered by catalog position, then by key.
//! - A child with no assignments still receives every area at position 0.
//! - Each area's frontier is computed over the merged view of the canonical
//!   list and that child's own assignments.

use super::{ServiceError, ServiceResult};
use crate::model::progress::ChildProgress;
use crate::repo::assignment_repo::AssignmentRepository;
use crate::repo::curriculum_repo::CurriculumRepository;
use crate::sequencing::area_key::catalog_rank;
use crate::sequencing::projector::overall_percent;
use crate::sequencing::SequencingEngine;
use log::info;
use std::time::Instant;

pub struct ProgressService<C: CurriculumRepository, A: AssignmentRepository> {
    curriculum: C,
    assignments: A,
    engine: SequencingEngine,
}

impl<C: CurriculumRepository, A: AssignmentRepository> ProgressService<C, A> {
    pub fn new(curriculum: C, assignments: A, engine: SequencingEngine) -> Self {
        Self {
            curriculum,
            assignments,
            engine,
        }
    }

    /// Computes per-area progress for `child_id`.
    ///
    /// # Errors
    /// - `InvalidChildId` when `child_id` is blank.
    /// - Repository failures unchanged.
    pub fn child_progress(&self, child_id: &str) -> ServiceResult<ChildProgress> {
        let child_id = child_id.trim();
        if child_id.is_empty() {
            return Err(ServiceError::InvalidChildId);
        }
        let started_at = Instant::now();

        let assignments = self.assignments.list_for_child(child_id)?;
        let mut areas = self.curriculum.list_areas()?;
        areas.sort_by(|a, b| {
            catalog_rank(&a.key)
                .cmp(&catalog_rank(&b.key))
                .then_with(|| a.key.cmp(&b.key))
        });

        let mut progress = Vec::with_capacity(areas.len());
        for area in &areas {
            let canonical = self.curriculum.list_works(&area.key)?;
            progress.push(self.engine.area_progress(area, &canonical, &assignments));
        }

        let overall_percent_complete = overall_percent(&progress);
        info!(
            "event=child_progress module=service status=ok areas={} assignments={} duration_ms={}",
            progress.len(),
            assignments.len(),
            started_at.elapsed().as_millis()
        );

        Ok(ChildProgress {
            child_id: child_id.to_string(),
            areas: progress,
            overall_percent_complete,
        })
    }
}
