use montree_core::db::open_db_in_memory;
use montree_core::{
    catalog_area, Assignment, AssignmentRepository, CurriculumRepository, CurriculumService,
    ProgressService, SequencingEngine, ServiceError, SqliteAssignmentRepository,
    SqliteCurriculumRepository, WorkStatus,
};
use rusqlite::Connection;

fn seed_curriculum(conn: &Connection) {
    let repo = SqliteCurriculumRepository::try_new(conn).unwrap();
    for key in ["mathematics", "sensorial", "language"] {
        repo.upsert_area(&catalog_area(key)).unwrap();
    }
    for name in ["Number Rods", "Spindle Box", "Cards and Counters"] {
        repo.append_work("mathematics", name).unwrap();
    }
    for name in ["Pink Tower", "Brown Stair"] {
        repo.append_work("sensorial", name).unwrap();
    }
}

fn record(conn: &Connection, child_id: &str, area: &str, work_name: &str, status: WorkStatus) {
    let repo = SqliteAssignmentRepository::try_new(conn).unwrap();
    repo.record_assignment(&Assignment::new(child_id, area, work_name, status))
        .unwrap();
}

type SqliteProgressService<'conn> =
    ProgressService<SqliteCurriculumRepository<'conn>, SqliteAssignmentRepository<'conn>>;
type SqliteCurriculumService<'conn> =
    CurriculumService<SqliteCurriculumRepository<'conn>, SqliteAssignmentRepository<'conn>>;

fn progress_service(conn: &Connection) -> SqliteProgressService<'_> {
    ProgressService::new(
        SqliteCurriculumRepository::try_new(conn).unwrap(),
        SqliteAssignmentRepository::try_new(conn).unwrap(),
        SequencingEngine::default(),
    )
}

fn curriculum_service(conn: &Connection) -> SqliteCurriculumService<'_> {
    CurriculumService::new(
        SqliteCurriculumRepository::try_new(conn).unwrap(),
        SqliteAssignmentRepository::try_new(conn).unwrap(),
        SequencingEngine::default(),
    )
}

#[test]
fn child_without_assignments_sees_every_area_at_zero() {
    let conn = open_db_in_memory().unwrap();
    seed_curriculum(&conn);

    let progress = progress_service(&conn).child_progress("child-1").unwrap();

    let keys = progress
        .areas
        .iter()
        .map(|area| area.area.as_str())
        .collect::<Vec<_>>();
    assert_eq!(keys, vec!["sensorial", "mathematics", "language"]);
    for area in &progress.areas {
        assert_eq!(area.current_position, 0);
        assert_eq!(area.current_work_name, None);
        assert_eq!(area.percent_complete, 0);
    }
    assert_eq!(progress.overall_percent_complete, 0);
}

#[test]
fn child_progress_merges_own_orphans_and_aliases() {
    let conn = open_db_in_memory().unwrap();
    seed_curriculum(&conn);
    record(&conn, "child-1", "Math", "spindel box", WorkStatus::Practicing);
    record(&conn, "child-1", "sensorial", "Pink Tower", WorkStatus::Mastered);
    record(&conn, "child-2", "math", "Cards and Counters", WorkStatus::Mastered);

    let progress = progress_service(&conn).child_progress("  child-1 ").unwrap();
    assert_eq!(progress.child_id, "child-1");

    let math = progress
        .areas
        .iter()
        .find(|area| area.area == "mathematics")
        .unwrap();
    assert_eq!(math.total_works, 4);
    assert_eq!(math.current_position, 3);
    assert_eq!(math.current_work_name.as_deref(), Some("spindel box"));
    assert_eq!(math.percent_complete, 75);
    assert_eq!(math.counts.practicing, 1);
    assert_eq!(math.counts.mastered, 0);

    let sensorial = progress
        .areas
        .iter()
        .find(|area| area.area == "sensorial")
        .unwrap();
    assert_eq!(sensorial.current_position, 1);
    assert_eq!(sensorial.percent_complete, 50);
    assert_eq!(sensorial.icon, "👁️");

    // 4 of 6 works across all areas.
    assert_eq!(progress.overall_percent_complete, 67);
}

#[test]
fn blank_child_id_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    seed_curriculum(&conn);

    let err = progress_service(&conn).child_progress("   ").unwrap_err();
    assert!(matches!(err, ServiceError::InvalidChildId));
}

#[test]
fn progress_serializes_with_camel_case_fields() {
    let conn = open_db_in_memory().unwrap();
    seed_curriculum(&conn);
    record(&conn, "child-1", "sensorial", "Brown Stair", WorkStatus::Presented);

    let progress = progress_service(&conn).child_progress("child-1").unwrap();
    let value = serde_json::to_value(&progress).unwrap();

    let sensorial = &value["areas"][0];
    assert_eq!(sensorial["area"], "sensorial");
    assert_eq!(sensorial["currentPosition"], 2);
    assert_eq!(sensorial["percentComplete"], 100);
    assert_eq!(sensorial["presented"], 1);
    assert!(value["areas"][2]["currentWorkName"].is_null());
}

#[test]
fn import_orphans_persists_once() {
    let conn = open_db_in_memory().unwrap();
    seed_curriculum(&conn);
    record(&conn, "child-1", "Maths", "spindel box", WorkStatus::Presented);
    record(&conn, "child-2", "mathematics", "Golden Bead Material", WorkStatus::Presented);
    let service = curriculum_service(&conn);

    let preview = service.preview_merge("Math").unwrap();
    assert_eq!(preview.len(), 5);
    let stored_before = SqliteCurriculumRepository::try_new(&conn)
        .unwrap()
        .list_works("mathematics")
        .unwrap();
    assert_eq!(stored_before.len(), 3);

    let first = service.import_orphans("Math").unwrap();
    assert_eq!(first.area_key, "mathematics");
    assert_eq!(first.inserted, 2);
    assert_eq!(first.total_works, 5);

    let stored = SqliteCurriculumRepository::try_new(&conn)
        .unwrap()
        .list_works("mathematics")
        .unwrap();
    assert_eq!(stored, preview);
    assert_eq!(stored[0].name, "Golden Bead Material");
    assert_eq!(stored[3].name, "spindel box");
    assert!(stored[3].is_imported);
    assert!(!stored[2].is_imported);

    let second = service.import_orphans("mathematics").unwrap();
    assert_eq!(second.inserted, 0);
    assert_eq!(second.total_works, 5);
}

#[test]
fn suggest_position_uses_stored_list() {
    let conn = open_db_in_memory().unwrap();
    seed_curriculum(&conn);
    let service = curriculum_service(&conn);

    assert_eq!(service.suggest_position("sensorial", "Pink Tower Extension").unwrap(), 1);
    assert_eq!(service.suggest_position("Math", "Spindle Boxes").unwrap(), 2);
}

#[test]
fn unknown_area_label_is_reported() {
    let conn = open_db_in_memory().unwrap();
    seed_curriculum(&conn);

    let err = curriculum_service(&conn)
        .preview_merge("Geography")
        .unwrap_err();
    assert!(matches!(err, ServiceError::UnknownArea(key) if key == "geography"));
}
