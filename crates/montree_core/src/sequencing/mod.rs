//! Curriculum sequencing and progress-frontier engine.
//!
//! # Responsibility
//! - Place free-text work names into canonical per-area sequences.
//! - Compute per-area progress frontiers and their display projection.
//!
//! # Invariants
//! - Every function here is pure and total: no I/O, no errors, no state
//!   carried between calls.
//! - Fuzzy scores place orphans; only exact canonical names credit progress.
//!
//! Pipeline: area normalization, fuzzy scoring and placement, merge into an
//! ordered view, frontier over that view, projection.

pub mod area_key;
pub mod frontier;
pub mod fuzzy;
pub mod merge;
pub mod position;
pub mod projector;

use crate::config::EngineConfig;
use crate::model::assignment::Assignment;
use crate::model::curriculum::{CurriculumArea, CurriculumWork};
use crate::model::progress::{AreaProgress, Frontier};
use area_key::AreaKeyNormalizer;
use position::PositionFinder;

/// Facade bundling one normalizer and one placement policy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SequencingEngine {
    normalizer: AreaKeyNormalizer,
    finder: PositionFinder,
}

impl SequencingEngine {
    /// Builds an engine from an already validated configuration.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            normalizer: AreaKeyNormalizer::with_aliases(&config.area_aliases),
            finder: PositionFinder::new(
                config.keyword_rules.clone(),
                config.low_confidence_threshold,
                config.range_scaling,
                config.reference_length,
            ),
        }
    }

    pub fn normalize_area(&self, label: &str) -> String {
        self.normalizer.normalize(label)
    }

    pub fn score(&self, a: &str, b: &str) -> f64 {
        fuzzy::score(a, b)
    }

    pub fn find_position(&self, work_name: &str, works: &[CurriculumWork]) -> usize {
        self.finder.find_position(work_name, works)
    }

    pub fn merge(
        &self,
        canonical: &[CurriculumWork],
        assignments: &[Assignment],
        area_key: &str,
    ) -> Vec<CurriculumWork> {
        merge::merge_curriculum(
            canonical,
            assignments,
            area_key,
            &self.normalizer,
            &self.finder,
        )
    }

    pub fn frontier(
        &self,
        area_key: &str,
        works: &[CurriculumWork],
        assignments: &[Assignment],
    ) -> Option<Frontier> {
        frontier::compute_frontier(area_key, works, assignments, &self.normalizer)
    }

    /// Full per-area pipeline: merge, frontier, projection and status tally.
    pub fn area_progress(
        &self,
        area: &CurriculumArea,
        canonical: &[CurriculumWork],
        assignments: &[Assignment],
    ) -> AreaProgress {
        let merged = self.merge(canonical, assignments, &area.key);
        let frontier = self.frontier(&area.key, &merged, assignments);
        let mut progress = projector::project_progress(area, frontier.as_ref(), merged.len());
        progress.counts = projector::tally_statuses(&area.key, assignments, &self.normalizer);
        progress
    }
}

#[cfg(test)]
mod tests {
    use super::SequencingEngine;
    use crate::config::EngineConfig;
    use crate::model::assignment::{Assignment, WorkStatus};
    use crate::model::curriculum::{CurriculumArea, CurriculumWork};

    #[test]
    fn configured_aliases_reach_the_pipeline() {
        let config = EngineConfig::from_json_str(r#"{ "area_aliases": { "Arithmetic": "math" } }"#)
            .unwrap();
        let engine = SequencingEngine::new(&config);
        let area = CurriculumArea::new("mathematics", "Mathematics", "🔢", "#2563EB");
        let works = vec![
            CurriculumWork::new("m-1", "Number Rods", 1, "mathematics"),
            CurriculumWork::new("m-2", "Spindle Box", 2, "mathematics"),
        ];
        let assignments = vec![Assignment::new(
            "child-1",
            "Arithmetic",
            "Spindle Box",
            WorkStatus::Mastered,
        )];

        let progress = engine.area_progress(&area, &works, &assignments);
        assert_eq!(progress.current_position, 2);
        assert_eq!(progress.percent_complete, 100);
        assert_eq!(progress.counts.mastered, 1);
    }
}
