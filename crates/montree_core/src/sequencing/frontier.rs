//! Progress frontier: furthest position reached per area.
//!
//! # Invariants
//! - Only exact canonical-name matches advance the frontier; fuzzy matching
//!   is an authoring-time tool and never credits progress.
//! - The frontier is the maximum matched index, not the latest assignment.
//! - Reaching position `k` is read as completion of positions `1..k`.
//! - `position <= works.len()` always.

use super::area_key::{canonical_work_name, AreaKeyNormalizer};
use crate::model::assignment::Assignment;
use crate::model::curriculum::CurriculumWork;
use crate::model::progress::Frontier;
use std::collections::HashMap;

/// Computes the frontier of one child's `assignments` within `area_key`.
///
/// Returns `None` when no assignment matches a work in `works`.
pub fn compute_frontier(
    area_key: &str,
    works: &[CurriculumWork],
    assignments: &[Assignment],
    normalizer: &AreaKeyNormalizer,
) -> Option<Frontier> {
    let target_area = normalizer.normalize(area_key);

    let mut index_by_name = HashMap::with_capacity(works.len());
    for (index, work) in works.iter().enumerate() {
        index_by_name
            .entry(canonical_work_name(&work.name))
            .or_insert(index);
    }

    let max_index = assignments
        .iter()
        .filter(|assignment| normalizer.normalize(&assignment.area) == target_area)
        .filter_map(|assignment| {
            index_by_name
                .get(&canonical_work_name(&assignment.work_name))
                .copied()
        })
        .max()?;

    Some(Frontier {
        position: max_index + 1,
        work_name: works[max_index].name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::compute_frontier;
    use crate::model::assignment::{Assignment, WorkStatus};
    use crate::model::curriculum::CurriculumWork;
    use crate::sequencing::area_key::AreaKeyNormalizer;

    fn works(names: &[&str]) -> Vec<CurriculumWork> {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| {
                CurriculumWork::new(format!("w-{index}"), *name, index as u32 + 1, "sensorial")
            })
            .collect()
    }

    fn assignment(work_name: &str) -> Assignment {
        Assignment::new("child-1", "Sensorial", work_name, WorkStatus::Practicing)
    }

    #[test]
    fn takes_maximum_matched_index() {
        let list = works(&["Cylinder Blocks", "Pink Tower", "Brown Stair", "Red Rods"]);
        let frontier = compute_frontier(
            "sensorial",
            &list,
            &[assignment("Red Rods"), assignment("pink tower")],
            &AreaKeyNormalizer::default(),
        )
        .unwrap();
        assert_eq!(frontier.position, 4);
        assert_eq!(frontier.work_name, "Red Rods");
    }

    #[test]
    fn near_misses_do_not_advance() {
        let list = works(&["Cylinder Blocks", "Pink Tower"]);
        let frontier = compute_frontier(
            "sensorial",
            &list,
            &[assignment("Pink Towers")],
            &AreaKeyNormalizer::default(),
        );
        assert_eq!(frontier, None);
    }

    #[test]
    fn empty_list_has_no_frontier() {
        let frontier = compute_frontier(
            "sensorial",
            &[],
            &[assignment("Pink Tower")],
            &AreaKeyNormalizer::default(),
        );
        assert!(frontier.is_none());
    }
}
