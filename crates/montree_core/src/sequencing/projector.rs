//! Frontier to display payload projection.

use super::area_key::AreaKeyNormalizer;
use crate::model::assignment::{Assignment, WorkStatus};
use crate::model::curriculum::CurriculumArea;
use crate::model::progress::{AreaProgress, Frontier, StatusCounts};

/// Rounded integer percentage; `0` when `total` is `0`.
pub fn percent_of(position: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let ratio = position.min(total) as f64 / total as f64;
    (ratio * 100.0).round() as u32
}

/// Projects one area's frontier into the progress endpoint shape.
///
/// Status counts start at zero; see [`tally_statuses`].
pub fn project_progress(
    area: &CurriculumArea,
    frontier: Option<&Frontier>,
    total_works: usize,
) -> AreaProgress {
    let current_position = frontier.map_or(0, |frontier| frontier.position.min(total_works));
    let current_work_name = match frontier {
        Some(frontier) if current_position > 0 => Some(frontier.work_name.clone()),
        _ => None,
    };

    AreaProgress {
        area: area.key.clone(),
        area_name: area.name.clone(),
        icon: area.icon.clone(),
        color: area.color.clone(),
        total_works,
        current_position,
        current_work_name,
        percent_complete: percent_of(current_position, total_works),
        counts: StatusCounts::default(),
    }
}

/// Counts assignments in `area_key` by status.
pub fn tally_statuses(
    area_key: &str,
    assignments: &[Assignment],
    normalizer: &AreaKeyNormalizer,
) -> StatusCounts {
    let target_area = normalizer.normalize(area_key);
    let mut counts = StatusCounts::default();
    for assignment in assignments
        .iter()
        .filter(|assignment| normalizer.normalize(&assignment.area) == target_area)
    {
        match assignment.status {
            WorkStatus::Presented => counts.presented += 1,
            WorkStatus::Practicing => counts.practicing += 1,
            WorkStatus::Mastered => counts.mastered += 1,
            WorkStatus::NotStarted => {}
        }
    }
    counts
}

/// Overall percentage across areas, weighting each area by its size.
pub fn overall_percent(areas: &[AreaProgress]) -> u32 {
    let reached: usize = areas.iter().map(|area| area.current_position).sum();
    let total: usize = areas.iter().map(|area| area.total_works).sum();
    percent_of(reached, total)
}

#[cfg(test)]
mod tests {
    use super::{overall_percent, percent_of, project_progress, tally_statuses};
    use crate::model::assignment::{Assignment, WorkStatus};
    use crate::model::curriculum::CurriculumArea;
    use crate::model::progress::Frontier;
    use crate::sequencing::area_key::AreaKeyNormalizer;

    fn area() -> CurriculumArea {
        CurriculumArea::new("mathematics", "Mathematics", "🔢", "#2563EB")
    }

    #[test]
    fn percent_rounds_to_nearest_integer() {
        assert_eq!(percent_of(3, 4), 75);
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(1, 8), 13);
        assert_eq!(percent_of(0, 0), 0);
        assert_eq!(percent_of(5, 5), 100);
    }

    #[test]
    fn percent_is_monotonic_in_position() {
        let total = 37;
        let mut previous = 0;
        for position in 0..=total {
            let current = percent_of(position, total);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn no_frontier_projects_zero() {
        let progress = project_progress(&area(), None, 12);
        assert_eq!(progress.current_position, 0);
        assert_eq!(progress.current_work_name, None);
        assert_eq!(progress.percent_complete, 0);
        assert_eq!(progress.total_works, 12);
    }

    #[test]
    fn frontier_at_last_work_is_full() {
        let frontier = Frontier {
            position: 4,
            work_name: "Cards and Counters".to_string(),
        };
        let progress = project_progress(&area(), Some(&frontier), 4);
        assert_eq!(progress.percent_complete, 100);
        assert_eq!(
            progress.current_work_name.as_deref(),
            Some("Cards and Counters")
        );
    }

    #[test]
    fn tally_counts_only_matching_area() {
        let assignments = vec![
            Assignment::new("c", "Math", "Number Rods", WorkStatus::Mastered),
            Assignment::new("c", "mathematics", "Spindle Box", WorkStatus::Practicing),
            Assignment::new("c", "mathematics", "Golden Beads", WorkStatus::NotStarted),
            Assignment::new("c", "language", "Sandpaper Letters", WorkStatus::Presented),
        ];
        let counts = tally_statuses("mathematics", &assignments, &AreaKeyNormalizer::default());
        assert_eq!(counts.mastered, 1);
        assert_eq!(counts.practicing, 1);
        assert_eq!(counts.presented, 0);
    }

    #[test]
    fn overall_percent_weights_by_area_size() {
        let mut math = project_progress(&area(), None, 10);
        math.current_position = 5;
        let empty = project_progress(&area(), None, 0);
        assert_eq!(overall_percent(&[math, empty]), 50);
        assert_eq!(overall_percent(&[]), 0);
    }
}
