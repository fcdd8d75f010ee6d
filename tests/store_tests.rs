mod common;
use common::{KEY, memory_store, record, setup_test_db, sqlite_store};
use punchlist::core::form::FormDraft;
use punchlist::core::store::RecordStore;
use punchlist::db::blob::{BlobStore, MemoryBlobStore};
use punchlist::errors::AppError;
use punchlist::models::{Priority, Status};

#[test]
fn test_add_keeps_length_and_order() {
    let mut store = memory_store();

    for id in [30, 10, 20, 40, 5] {
        store.add(record(id, "HVAC", "1", "Ana")).expect("add");
    }

    assert_eq!(store.len(), 5);
    let ids: Vec<i64> = store.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![30, 10, 20, 40, 5]);
}

#[test]
fn test_persist_then_load_round_trip() {
    let mut store = memory_store();
    let mut r = record(1_700_000_000_000, "HVAC", "2", "Ana");
    r.status = Status::Fix;
    store.add(r.clone()).expect("add");
    store.add(record(1_700_000_000_001, "Electrical", "3", "Luis")).expect("add");

    let reloaded = RecordStore::load(store.backend().clone(), KEY);

    assert_eq!(reloaded.records(), store.records());
    assert_eq!(reloaded.records()[0], r);
}

#[test]
fn test_load_missing_or_invalid_blob_is_empty() {
    let missing = RecordStore::load(MemoryBlobStore::new(), KEY);
    assert!(missing.is_empty());

    let invalid = RecordStore::load(MemoryBlobStore::with_slot(KEY, "{not json"), KEY);
    assert!(invalid.is_empty());

    let wrong_shape = RecordStore::load(MemoryBlobStore::with_slot(KEY, r#"{"id":1}"#), KEY);
    assert!(wrong_shape.is_empty());
}

#[test]
fn test_load_browser_blob() {
    let blob = r#"[{"id":1700000000000,"description":"Loose tile","room":"101","service":"HVAC",
        "priority":"2","assignTo":"Ana","date":"2025-06-30","comments":"",
        "status":"Fix","images":["data:image/png;base64,AAAA"]}]"#;

    let store = RecordStore::load(MemoryBlobStore::with_slot(KEY, blob), KEY);

    assert_eq!(store.len(), 1);
    let r = &store.records()[0];
    assert_eq!(r.assign_to, "Ana");
    assert_eq!(r.status, Status::Fix);
    assert_eq!(r.priority(), Some(Priority::Serious));
    assert_eq!(r.photo_count(), 1);
}

#[test]
fn test_status_change_on_unknown_id_leaves_blob_unchanged() {
    let mut store = memory_store();
    store.add(record(1, "HVAC", "1", "Ana")).expect("add");
    let before = store.backend().get(KEY).expect("get");

    assert!(!store.update_status(999, Status::Closed).expect("update"));
    assert_eq!(store.cycle_status(999).expect("cycle"), None);

    assert_eq!(store.backend().get(KEY).expect("get"), before);
    assert_eq!(store.records()[0].status, Status::Pending);
}

#[test]
fn test_cycle_status_persists() {
    let mut store = memory_store();
    store.add(record(1, "HVAC", "1", "Ana")).expect("add");
    store.add(record(2, "HVAC", "1", "Ana")).expect("add");

    assert_eq!(store.cycle_status(2).expect("cycle"), Some(Status::Fix));
    assert_eq!(store.cycle_status(2).expect("cycle"), Some(Status::Closed));
    assert_eq!(store.cycle_status(2).expect("cycle"), Some(Status::Pending));
    assert!(store.update_status(1, Status::Closed).expect("update"));

    let reloaded = RecordStore::load(store.backend().clone(), KEY);
    assert_eq!(reloaded.records()[0].status, Status::Closed);
    assert_eq!(reloaded.records()[1].status, Status::Pending);
}

#[test]
fn test_duplicate_id_rejected() {
    let mut store = memory_store();
    store.add(record(7, "HVAC", "1", "Ana")).expect("add");

    let err = store.add(record(7, "HVAC", "1", "Ana")).unwrap_err();
    assert!(matches!(err, AppError::InvalidField { field: "id", .. }));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_create_assigns_increasing_ids() {
    let mut store = memory_store();

    let mut ids = Vec::new();
    for i in 0..20 {
        let mut draft = FormDraft::new();
        draft.description = format!("Item {i}");
        ids.push(store.create(draft).expect("create").id);
    }

    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_create_applies_form_policy() {
    let mut store = memory_store();

    let mut draft = FormDraft::new();
    draft.description = "   ".to_string();
    let err = store.create(draft).unwrap_err();
    assert!(matches!(err, AppError::InvalidField { field: "description", .. }));
    assert!(store.is_empty());
    assert_eq!(store.backend().get(KEY).expect("get"), None);

    let mut draft = FormDraft::new();
    draft.description = "  Cracked socket  ".to_string();
    draft.room = " 204 ".to_string();
    draft.toggle_status();
    let r = store.create(draft).expect("create");

    assert_eq!(r.description, "Cracked socket");
    assert_eq!(r.room, "204");
    assert_eq!(r.priority, "1");
    assert_eq!(r.status, Status::Fix);
    assert!(r.images.is_empty());
}

#[test]
fn test_sqlite_backend_round_trip() {
    let db_path = setup_test_db("store_round_trip");

    {
        let mut store = sqlite_store(&db_path);
        assert!(store.is_empty());
        store.add(record(1, "HVAC", "2", "Ana")).expect("add");
        store.add(record(2, "Plumbing", "4", "Luis")).expect("add");
        store.cycle_status(1).expect("cycle");
    }

    let store = sqlite_store(&db_path);
    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[0].status, Status::Fix);
    assert_eq!(store.records()[1].service, "Plumbing");
}

#[test]
fn test_in_memory_sqlite_slot_overwrites() {
    use punchlist::db::blob::SqliteBlobStore;
    use punchlist::db::pool::DbPool;

    let mut backend = SqliteBlobStore::from_pool(DbPool::in_memory().expect("db"));
    assert_eq!(backend.get(KEY).expect("get"), None);

    backend.put(KEY, "[]").expect("put");
    backend.put(KEY, "[1]").expect("put");

    assert_eq!(backend.get(KEY).expect("get").as_deref(), Some("[1]"));
}

#[test]
fn test_create_refuses_when_ids_are_exhausted() {
    let mut store = memory_store();
    store.add(record(i64::MAX, "HVAC", "1", "Ana")).expect("add");

    let mut draft = FormDraft::new();
    draft.description = "One more".to_string();
    let err = store.create(draft).unwrap_err();

    assert!(matches!(err, AppError::InvalidField { field: "id", .. }));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_unknown_status_loads_as_pending() {
    let blob = r#"[{"id":1,"description":"Loose tile","status":"Fix"},
                   {"id":2,"description":"No power","status":"Done"}]"#;
    let mut store = RecordStore::load(MemoryBlobStore::with_slot(KEY, blob), KEY);

    assert_eq!(store.len(), 2);
    assert_eq!(store.records()[0].status, Status::Fix);
    assert_eq!(store.records()[1].status, Status::Pending);

    store.add(record(3, "HVAC", "1", "Ana")).expect("add");
    let reloaded = RecordStore::load(store.backend().clone(), KEY);
    let ids: Vec<i64> = reloaded.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_malformed_entry_does_not_drop_the_rest() {
    let blob = r#"[{"id":1,"description":"Loose tile"},
                   {"id":{"bad":true},"description":"Broken"},
                   {"id":3,"description":"No power"}]"#;
    let store = RecordStore::load(MemoryBlobStore::with_slot(KEY, blob), KEY);

    let ids: Vec<i64> = store.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
}
