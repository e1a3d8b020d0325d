mod common;

use common::{at, catalog_state, evening_state};
use tempfile::NamedTempFile;
use waypoint_core::{Database, TripError, db::migrations::SCHEMA_VERSION};

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert_eq!(db.schema_version().unwrap(), SCHEMA_VERSION);
    assert!(db.active_trip().unwrap().is_none());
}

#[test]
fn test_reopen_keeps_schema_version() {
    let (temp_file, db) = create_test_db();
    drop(db);

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(db.schema_version().unwrap(), SCHEMA_VERSION);
}

#[test]
fn test_session_round_trip() {
    let (_temp_file, mut db) = create_test_db();
    let mut state = catalog_state("shanghai-japan-3days");
    state.toggle(1, at("12:45")).unwrap();

    db.save_session(&state).expect("Failed to save session");
    let loaded = db
        .load_session("shanghai-japan-3days")
        .expect("Failed to load session")
        .expect("Session should exist");

    assert_eq!(loaded, state);
    assert_eq!(loaded.items[2].original_time, Some(at("14:00")));
    assert_eq!(loaded.items[2].scheduled_time, at("14:45"));
}

#[test]
fn test_load_missing_session() {
    let (_temp_file, db) = create_test_db();

    assert!(db.load_session("nowhere").unwrap().is_none());
}

#[test]
fn test_pending_resolution_is_persisted() {
    let (_temp_file, mut db) = create_test_db();
    db.save_session(&evening_state("tokyo-night")).unwrap();

    let outcome = db
        .update_session("tokyo-night", |state| state.toggle(0, at("21:00")))
        .expect("Failed to toggle");
    let request = outcome.resolution().expect("resolution request").clone();
    assert_eq!(request.indices().collect::<Vec<_>>(), vec![2, 3]);

    let loaded = db.load_session("tokyo-night").unwrap().unwrap();
    assert_eq!(loaded.pending, Some(request));
    assert_eq!(loaded.items[1].scheduled_time, at("22:30"));
    assert_eq!(loaded.items[2].scheduled_time, at("22:15"));
}

#[test]
fn test_failed_update_writes_nothing() {
    let (_temp_file, mut db) = create_test_db();
    db.save_session(&evening_state("tokyo-night")).unwrap();

    let err = db
        .update_session("tokyo-night", |state| {
            state.toggle(0, at("20:10"))?;
            state.toggle(9, at("21:00"))
        })
        .unwrap_err();
    assert!(matches!(err, TripError::OutOfRange { index: 9, len: 4 }));

    let loaded = db.load_session("tokyo-night").unwrap().unwrap();
    assert!(loaded.completed.is_empty());
    assert_eq!(loaded.items[1].scheduled_time, at("21:30"));
}

#[test]
fn test_update_missing_session() {
    let (_temp_file, mut db) = create_test_db();

    let err = db
        .update_session("nowhere", |state| Ok(state.progress()))
        .unwrap_err();
    assert!(matches!(err, TripError::SessionNotFound { .. }));
}

#[test]
fn test_start_session_resumes_existing() {
    let (_temp_file, mut db) = create_test_db();
    let mut started = catalog_state("beijing-korea-2days");
    started.toggle(0, at("09:10")).unwrap();
    db.save_session(&started).unwrap();

    let resumed = db
        .start_session(catalog_state("beijing-korea-2days"))
        .expect("Failed to start session");

    assert_eq!(resumed, started);
    assert_eq!(
        db.active_trip().unwrap().as_deref(),
        Some("beijing-korea-2days")
    );
}

#[test]
fn test_resolve_session_renumbers_comments() {
    let (_temp_file, mut db) = create_test_db();
    db.save_session(&evening_state("tokyo-night")).unwrap();
    db.add_comment("tokyo-night", 1, 5, "Lovely river view").unwrap();
    db.add_comment("tokyo-night", 2, 2, "Too loud").unwrap();
    db.add_comment("tokyo-night", 3, 4, "Comfy beds").unwrap();

    db.update_session("tokyo-night", |state| state.toggle(0, at("21:00")))
        .unwrap();
    let removed = db
        .resolve_session("tokyo-night", Some(&[3]))
        .expect("Failed to resolve");

    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].title, "Karaoke");

    let state = db.load_session("tokyo-night").unwrap().unwrap();
    assert!(state.pending.is_none());
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.items[2].title, "Back to hotel");

    assert_eq!(db.list_comments("tokyo-night", 1).unwrap().len(), 1);
    let hotel = db.list_comments("tokyo-night", 2).unwrap();
    assert_eq!(hotel.len(), 1);
    assert_eq!(hotel[0].content, "Comfy beds");
    assert!(db.list_comments("tokyo-night", 3).unwrap().is_empty());
}

#[test]
fn test_failed_resolve_keeps_comments_and_request() {
    let (_temp_file, mut db) = create_test_db();
    db.save_session(&evening_state("tokyo-night")).unwrap();
    db.add_comment("tokyo-night", 2, 3, "Fun").unwrap();
    db.update_session("tokyo-night", |state| state.toggle(0, at("21:00")))
        .unwrap();

    let err = db.resolve_session("tokyo-night", Some(&[1])).unwrap_err();
    assert!(matches!(err, TripError::InvalidInput { .. }));

    let state = db.load_session("tokyo-night").unwrap().unwrap();
    assert!(state.pending.is_some());
    assert_eq!(state.items.len(), 4);
    assert_eq!(db.list_comments("tokyo-night", 2).unwrap().len(), 1);
}

#[test]
fn test_delete_session_cascades() {
    let (_temp_file, mut db) = create_test_db();
    db.start_session(evening_state("tokyo-night")).unwrap();
    db.add_comment("tokyo-night", 0, 4, "Tasty").unwrap();

    assert!(db.delete_session("tokyo-night").unwrap());
    assert!(!db.delete_session("tokyo-night").unwrap());

    assert!(db.load_session("tokyo-night").unwrap().is_none());
    assert!(db.active_trip().unwrap().is_none());

    // A new session at the same id starts without the old comments
    db.save_session(&evening_state("tokyo-night")).unwrap();
    assert!(db.list_comments("tokyo-night", 0).unwrap().is_empty());
}

#[test]
fn test_delete_other_session_keeps_active_trip() {
    let (_temp_file, mut db) = create_test_db();
    db.save_session(&evening_state("osaka-night")).unwrap();
    db.start_session(evening_state("tokyo-night")).unwrap();

    assert!(db.delete_session("osaka-night").unwrap());
    assert_eq!(db.active_trip().unwrap().as_deref(), Some("tokyo-night"));
}

#[test]
fn test_add_comment_checks_session_and_index() {
    let (_temp_file, mut db) = create_test_db();

    let err = db.add_comment("nowhere", 0, 3, "Hi").unwrap_err();
    assert!(matches!(err, TripError::SessionNotFound { .. }));

    db.save_session(&evening_state("tokyo-night")).unwrap();
    let err = db.add_comment("tokyo-night", 4, 3, "Hi").unwrap_err();
    assert!(matches!(err, TripError::OutOfRange { index: 4, len: 4 }));

    let comment = db.add_comment("tokyo-night", 3, 3, "Hi").unwrap();
    assert!(comment.id > 0);
    assert_eq!(comment.plan_index, 3);
}

#[test]
fn test_list_session_progress() {
    let (_temp_file, mut db) = create_test_db();
    let mut tokyo = evening_state("tokyo-night");
    tokyo.toggle(1, at("21:30")).unwrap();
    db.save_session(&tokyo).unwrap();
    db.save_session(&catalog_state("beijing-korea-3days")).unwrap();

    let progress = db.list_session_progress().unwrap();

    assert_eq!(progress.len(), 2);
    let (_, tokyo_progress) = progress
        .iter()
        .find(|(trip_id, _)| trip_id == "tokyo-night")
        .unwrap();
    assert_eq!(tokyo_progress.completed, 2);
    assert_eq!(tokyo_progress.total, 4);
}

#[test]
fn test_start_session_switches_active_trip() {
    let (_temp_file, mut db) = create_test_db();

    db.start_session(evening_state("tokyo-night")).unwrap();
    assert_eq!(db.active_trip().unwrap().as_deref(), Some("tokyo-night"));

    db.start_session(evening_state("osaka-night")).unwrap();
    assert_eq!(db.active_trip().unwrap().as_deref(), Some("osaka-night"));

    db.start_session(evening_state("tokyo-night")).unwrap();
    assert_eq!(db.active_trip().unwrap().as_deref(), Some("tokyo-night"));
}
