//! Folding orphan assignments into an area's canonical work list.
//!
//! # Responsibility
//! - Detect assignment work names absent from the list (orphans).
//! - Place each orphan with `PositionFinder` and renumber the result.
//!
//! # Invariants
//! - Output sequences are exactly `1..=len`, strictly increasing.
//! - Duplicate detection runs against the list-so-far, so one pass never
//!   inserts the same canonical name twice and re-merging is a no-op.
//! - Orphans are placed in input order against the current merged list.

use super::area_key::{canonical_work_name, log_area_key, AreaKeyNormalizer};
use super::position::PositionFinder;
use crate::model::assignment::Assignment;
use crate::model::curriculum::CurriculumWork;
use log::debug;
use std::collections::HashSet;

/// Returns the merged view of `canonical` plus orphan works for `area_key`.
///
/// `area_key` is normalized before comparison, so `math` and `mathematics`
/// select the same assignments.
pub fn merge_curriculum(
    canonical: &[CurriculumWork],
    assignments: &[Assignment],
    area_key: &str,
    normalizer: &AreaKeyNormalizer,
    finder: &PositionFinder,
) -> Vec<CurriculumWork> {
    let target_area = normalizer.normalize(area_key);
    let mut merged = canonical.to_vec();
    let mut known_names = merged
        .iter()
        .map(|work| canonical_work_name(&work.name))
        .collect::<HashSet<_>>();

    let mut inserted = 0_usize;
    for assignment in assignments {
        if normalizer.normalize(&assignment.area) != target_area {
            continue;
        }

        let canonical_name = canonical_work_name(&assignment.work_name);
        if canonical_name.is_empty() || !known_names.insert(canonical_name) {
            continue;
        }

        let display_name = assignment.work_name.trim();
        let index = finder.find_position(display_name, &merged);
        merged.insert(
            index,
            CurriculumWork::imported(display_name, target_area.as_str()),
        );
        inserted += 1;
        debug!(
            "event=orphan_placed module=sequencing area={} index={} list_len={}",
            log_area_key(&target_area),
            index,
            merged.len()
        );
    }

    renumber(&mut merged);

    if inserted > 0 {
        debug!(
            "event=curriculum_merge module=sequencing status=ok area={} canonical={} inserted={}",
            log_area_key(&target_area),
            canonical.len(),
            inserted
        );
    }
    merged
}

/// Rewrites every `sequence` to its 1-based list position.
pub fn renumber(works: &mut [CurriculumWork]) {
    for (index, work) in works.iter_mut().enumerate() {
        work.sequence = u32::try_from(index + 1).unwrap_or(u32::MAX);
    }
}
