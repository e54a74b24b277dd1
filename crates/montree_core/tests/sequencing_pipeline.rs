use montree_core::{
    score, Assignment, CurriculumArea, CurriculumWork, EngineConfig, SequencingEngine, WorkStatus,
};

fn math_area() -> CurriculumArea {
    CurriculumArea::new("mathematics", "Mathematics", "🔢", "#2563EB")
}

fn works(area_key: &str, names: &[&str]) -> Vec<CurriculumWork> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            CurriculumWork::new(format!("{area_key}-{index}"), *name, index as u32 + 1, area_key)
        })
        .collect()
}

fn names(works: &[CurriculumWork]) -> Vec<&str> {
    works.iter().map(|work| work.name.as_str()).collect()
}

fn sequences(works: &[CurriculumWork]) -> Vec<u32> {
    works.iter().map(|work| work.sequence).collect()
}

#[test]
fn exact_and_containment_scores() {
    assert_eq!(score("Pouring Water", "pouring water"), 1.0);
    assert_eq!(score("Pink Tower", "Tower"), 0.85);
}

#[test]
fn score_is_symmetric_and_bounded() {
    let samples = [
        "Pink Tower",
        "Brown Stair",
        "spindel box",
        "Spindle Box",
        "Sandpaper Letters",
        "Sandpaper Numerals",
        "Golden Bead Material",
        "  ",
        "",
        "Cylinder Blocks",
        "Knobless Cylinders",
    ];
    for a in samples {
        for b in samples {
            let forward = score(a, b);
            assert_eq!(forward, score(b, a), "asymmetric for {a:?} / {b:?}");
            assert!((0.0..=1.0).contains(&forward), "out of range for {a:?} / {b:?}");
        }
    }
}

#[test]
fn typo_orphan_lands_after_its_closest_work() {
    let engine = SequencingEngine::default();
    let canonical = works(
        "mathematics",
        &["Number Rods", "Spindle Box", "Cards and Counters"],
    );
    let assignments = vec![Assignment::new(
        "child-1",
        "mathematics",
        "spindel box",
        WorkStatus::Presented,
    )];

    let merged = engine.merge(&canonical, &assignments, "mathematics");

    assert_eq!(
        names(&merged),
        vec!["Number Rods", "Spindle Box", "spindel box", "Cards and Counters"]
    );
    assert_eq!(sequences(&merged), vec![1, 2, 3, 4]);
    assert!(merged[2].is_imported);
    assert!(!merged[1].is_imported);
}

#[test]
fn matched_orphan_drives_progress_percent() {
    let engine = SequencingEngine::default();
    let canonical = works(
        "mathematics",
        &["Number Rods", "Spindle Box", "Cards and Counters"],
    );
    let assignments = vec![Assignment::new(
        "child-1",
        "mathematics",
        "spindel box",
        WorkStatus::Practicing,
    )];

    let progress = engine.area_progress(&math_area(), &canonical, &assignments);

    assert_eq!(progress.total_works, 4);
    assert_eq!(progress.current_position, 3);
    assert_eq!(progress.current_work_name.as_deref(), Some("spindel box"));
    assert_eq!(progress.percent_complete, 75);
    assert_eq!(progress.counts.practicing, 1);
}

#[test]
fn area_alias_counts_toward_canonical_area() {
    let engine = SequencingEngine::default();
    let canonical = works("mathematics", &["Number Rods", "Spindle Box"]);
    let assignments = vec![Assignment::new(
        "child-1",
        "Math",
        "Number Rods",
        WorkStatus::Mastered,
    )];

    let progress = engine.area_progress(&math_area(), &canonical, &assignments);

    assert_eq!(progress.current_position, 1);
    assert_eq!(progress.percent_complete, 50);
    assert_eq!(progress.counts.mastered, 1);
}

#[test]
fn no_assignments_reports_zero_progress() {
    let engine = SequencingEngine::default();
    let canonical = works("mathematics", &["Number Rods", "Spindle Box"]);

    let progress = engine.area_progress(&math_area(), &canonical, &[]);

    assert_eq!(progress.current_position, 0);
    assert_eq!(progress.current_work_name, None);
    assert_eq!(progress.percent_complete, 0);
    assert_eq!(progress.total_works, 2);
}

#[test]
fn frontier_takes_furthest_work_not_latest_assignment() {
    let engine = SequencingEngine::default();
    let canonical = works(
        "mathematics",
        &[
            "Number Rods",
            "Sandpaper Numerals",
            "Spindle Box",
            "Cards and Counters",
            "Golden Beads",
        ],
    );
    let assignments = vec![
        Assignment::new("child-1", "math", "Golden Beads", WorkStatus::Presented),
        Assignment::new("child-1", "math", "Sandpaper Numerals", WorkStatus::Presented),
    ];

    let frontier = engine
        .frontier("mathematics", &canonical, &assignments)
        .unwrap();

    assert_eq!(frontier.position, 5);
    assert_eq!(frontier.work_name, "Golden Beads");
}

#[test]
fn fuzzy_near_miss_never_credits_progress() {
    let engine = SequencingEngine::default();
    let canonical = works("sensorial", &["Pink Tower", "Brown Stair"]);
    let assignments = vec![Assignment::new(
        "child-1",
        "sensorial",
        "Pink Towers",
        WorkStatus::Presented,
    )];

    assert_eq!(engine.frontier("sensorial", &canonical, &assignments), None);
}

#[test]
fn merge_is_idempotent_and_keeps_sequences_contiguous() {
    let engine = SequencingEngine::default();
    let canonical = works(
        "language",
        &["Sandpaper Letters", "Moveable Alphabet", "Object Boxes"],
    );
    let assignments = vec![
        Assignment::new("child-1", "Language", "Sandpaper Letters", WorkStatus::Mastered),
        Assignment::new("child-1", "Language", "Metal Insets", WorkStatus::Presented),
        Assignment::new("child-2", "language", "metal  insets", WorkStatus::Presented),
        Assignment::new("child-2", "language", "Puzzle Words", WorkStatus::Presented),
        Assignment::new("child-2", "mathematics", "Number Rods", WorkStatus::Presented),
    ];

    let once = engine.merge(&canonical, &assignments, "language");
    let twice = engine.merge(&once, &assignments, "language");

    assert_eq!(once.len(), canonical.len() + 2);
    assert_eq!(once, twice);
    assert_eq!(sequences(&once), (1..=once.len() as u32).collect::<Vec<_>>());
    assert!(once.iter().all(|work| work.area_key == "language"));
    assert!(!names(&once).contains(&"Number Rods"));
}

#[test]
fn placement_index_stays_in_bounds() {
    let engine = SequencingEngine::default();
    let short = works("cultural", &["Land and Water Forms"]);
    for candidate in [
        "Puzzle Map of Europe",
        "Parts of a Leaf",
        "Unrelated Thing",
        "Land Forms",
        "",
    ] {
        let index = engine.find_position(candidate, &short);
        assert!(index <= short.len(), "{candidate:?} placed at {index}");
    }
    assert_eq!(engine.find_position("Anything", &[]), 0);
}

#[test]
fn proportional_keyword_ranges_scale_with_list_length() {
    let config = EngineConfig::from_json_str(
        r#"{
            "keyword_rules": [ { "terms": ["bead"], "range": [50, 60] } ],
            "range_scaling": "proportional",
            "reference_length": 100
        }"#,
    )
    .unwrap();
    let engine = SequencingEngine::new(&config);
    let list = works(
        "mathematics",
        &["Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India", "Juliet"],
    );

    assert_eq!(engine.find_position("Teen Bead Hanger", &list), 5);
}

#[test]
fn validated_config_with_huge_range_never_overflows() {
    let half = usize::MAX / 2;
    let config = EngineConfig::from_json_str(&format!(
        r#"{{
            "keyword_rules": [ {{ "terms": ["stamp"], "range": [{half}, {half}] }} ],
            "range_scaling": "proportional"
        }}"#
    ))
    .unwrap();
    let engine = SequencingEngine::new(&config);
    let list = works(
        "mathematics",
        &["Number Rods", "Spindle Box", "Cards and Counters"],
    );

    assert_eq!(engine.find_position("Stamp Game", &list), list.len());
}
