//! Curriculum authoring service.
//!
//! # Responsibility
//! - Preview where recorded-but-unknown works would land in an area.
//! - Persist the merged view so later reads treat it as canonical.
//!
//! # Invariants
//! - `import_orphans` is idempotent: a second run inserts nothing.
//! - Concurrent imports on one area are last-write-wins at storage level.

use super::{ServiceError, ServiceResult};
use crate::model::curriculum::{CurriculumArea, CurriculumWork};
use crate::repo::assignment_repo::AssignmentRepository;
use crate::repo::curriculum_repo::CurriculumRepository;
use crate::sequencing::area_key::log_area_key;
use crate::sequencing::SequencingEngine;
use log::info;
use serde::Serialize;

/// Outcome of one `import_orphans` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub area_key: String,
    pub inserted: usize,
    pub total_works: usize,
}

pub struct CurriculumService<C: CurriculumRepository, A: AssignmentRepository> {
    curriculum: C,
    assignments: A,
    engine: SequencingEngine,
}

impl<C: CurriculumRepository, A: AssignmentRepository> CurriculumService<C, A> {
    pub fn new(curriculum: C, assignments: A, engine: SequencingEngine) -> Self {
        Self {
            curriculum,
            assignments,
            engine,
        }
    }

    /// Resolves a free-text label to a stored area.
    pub fn resolve_area(&self, area_label: &str) -> ServiceResult<CurriculumArea> {
        let area_key = self.engine.normalize_area(area_label);
        self.curriculum
            .get_area(&area_key)?
            .ok_or(ServiceError::UnknownArea(area_key))
    }

    /// Merged view of an area against every recorded assignment. Not persisted.
    pub fn preview_merge(&self, area_label: &str) -> ServiceResult<Vec<CurriculumWork>> {
        let area = self.resolve_area(area_label)?;
        let canonical = self.curriculum.list_works(&area.key)?;
        let assignments = self.assignments.list_all()?;
        Ok(self.engine.merge(&canonical, &assignments, &area.key))
    }

    /// Index at which `work_name` would be placed in an area's current list.
    pub fn suggest_position(&self, area_label: &str, work_name: &str) -> ServiceResult<usize> {
        let area = self.resolve_area(area_label)?;
        let canonical = self.curriculum.list_works(&area.key)?;
        Ok(self.engine.find_position(work_name, &canonical))
    }

    /// Persists the merged view for one area.
    pub fn import_orphans(&self, area_label: &str) -> ServiceResult<ImportSummary> {
        let area = self.resolve_area(area_label)?;
        let canonical = self.curriculum.list_works(&area.key)?;
        let assignments = self.assignments.list_all()?;
        let merged = self.engine.merge(&canonical, &assignments, &area.key);
        let inserted = merged.len() - canonical.len();

        if inserted > 0 || !is_contiguous(&canonical) {
            self.curriculum.replace_area_works(&area.key, &merged)?;
        }

        info!(
            "event=curriculum_import module=service status=ok area={} inserted={} total={}",
            log_area_key(&area.key),
            inserted,
            merged.len()
        );
        Ok(ImportSummary {
            area_key: area.key,
            inserted,
            total_works: merged.len(),
        })
    }
}

fn is_contiguous(works: &[CurriculumWork]) -> bool {
    works
        .iter()
        .enumerate()
        .all(|(index, work)| work.sequence as usize == index + 1)
}
