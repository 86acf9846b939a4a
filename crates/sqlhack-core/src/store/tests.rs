//! Tests for the store module.

use super::*;
use crate::{
    db::seed::{EMPLOYEES, FACILITIES, SECURITY_LOGS},
    models::Value,
};
use tempfile::TempDir;

/// Helper function to create an initialized test store
async fn create_test_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = StoreBuilder::new()
        .with_database_path(Some(temp_dir.path().join("mission.db")))
        .build();
    store.initialize().await.expect("Failed to initialize store");
    (temp_dir, store)
}

async fn count(store: &Store, table: &str) -> i64 {
    let rows = store
        .execute_query(&format!("SELECT COUNT(*) FROM {table}"))
        .await;
    rows[0]
        .get(0)
        .and_then(Value::as_integer)
        .expect("count should be an integer")
}

#[tokio::test]
async fn test_initialize_is_idempotent() {
    let (_temp_dir, store) = create_test_store().await;
    let before = store.execute_query("SELECT * FROM employees ORDER BY id").await;

    store.initialize().await.expect("Second initialize failed");

    assert_eq!(count(&store, "employees").await, 5);
    assert_eq!(count(&store, "security_logs").await, 5);
    assert_eq!(count(&store, "facilities").await, 4);

    let after = store.execute_query("SELECT * FROM employees ORDER BY id").await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_initialize_restores_seed_values() {
    let (_temp_dir, store) = create_test_store().await;
    store
        .execute_query("UPDATE facilities SET floor = 99 WHERE id = 1")
        .await;

    store.initialize().await.expect("Reinitialize failed");

    let rows = store.execute_query("SELECT * FROM facilities ORDER BY id").await;
    let expected: Vec<Row> = FACILITIES.iter().map(Row::from).collect();
    assert_eq!(rows, expected);
}

#[tokio::test]
async fn test_initialize_creates_parent_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("ops").join("mission.db");
    let store = StoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build();

    store.initialize().await.expect("Initialize failed");
    assert!(db_path.exists());
}

#[tokio::test]
async fn test_initialize_reports_unusable_parent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, b"not a directory").expect("Failed to write blocker file");
    let store = StoreBuilder::new()
        .with_database_path(Some(blocker.join("mission.db")))
        .build();

    match store.initialize().await {
        Err(GameError::FileSystem { path, .. }) => assert_eq!(path, blocker),
        other => panic!("Expected file system error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_schema_lists_seeded_tables() {
    let (_temp_dir, store) = create_test_store().await;
    let schema = store.schema().await;

    assert_eq!(
        schema.table_names(),
        vec!["employees", "security_logs", "facilities"]
    );
    for table in &schema {
        assert!(!table.columns.is_empty(), "{} has no columns", table.name);
        assert_eq!(
            table.primary_key().count(),
            1,
            "{} should have exactly one primary key column",
            table.name
        );
    }
}

#[tokio::test]
async fn test_schema_reflects_player_ddl() {
    let (_temp_dir, store) = create_test_store().await;
    store
        .execute_query("CREATE TABLE notes (id INTEGER PRIMARY KEY, body TEXT)")
        .await;

    let schema = store.schema().await;
    let notes = schema.table("notes").expect("notes table should be listed");
    assert_eq!(notes.column_names(), vec!["id", "body"]);
}

#[tokio::test]
async fn test_sample_rows() {
    let (_temp_dir, store) = create_test_store().await;

    let rows = store.sample_rows("employees", 3).await;
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0], Row::from(&EMPLOYEES[0]));

    let rows = store.sample_rows("security_logs", 50).await;
    let expected: Vec<Row> = SECURITY_LOGS.iter().map(Row::from).collect();
    assert_eq!(rows, expected);
}

#[tokio::test]
async fn test_sample_rows_unknown_table_is_empty() {
    let (_temp_dir, store) = create_test_store().await;
    assert!(store.sample_rows("agents", 3).await.is_empty());
}

#[tokio::test]
async fn test_invalid_sql_returns_empty() {
    let (_temp_dir, store) = create_test_store().await;
    assert!(store.execute_query("SELEKT nothing FROM nowhere").await.is_empty());
}

#[tokio::test]
async fn test_run_query_reports_failure() {
    let (_temp_dir, store) = create_test_store().await;

    let outcome = store.run_query("SELECT * FROM agents").await;
    match outcome {
        QueryOutcome::Failed(message) => assert!(message.contains("agents")),
        other => panic!("Expected failure, got {other:?}"),
    }

    let outcome = store
        .run_query("SELECT * FROM employees WHERE id = 42")
        .await;
    assert_eq!(outcome, QueryOutcome::Rows(Vec::new()));
    assert!(!outcome.is_failed());
}

#[tokio::test]
async fn test_query_for_marcus_steel() {
    let (_temp_dir, store) = create_test_store().await;
    let rows = store.execute_query("SELECT * FROM employees WHERE id=1").await;

    assert_eq!(rows, vec![Row::from(&EMPLOYEES[0])]);
}

#[tokio::test]
async fn test_teardown_removes_file() {
    let (_temp_dir, store) = create_test_store().await;
    assert!(store.db_path().exists());

    assert!(store.teardown().await.expect("Teardown failed"));
    assert!(!store.db_path().exists());

    assert!(!store.teardown().await.expect("Second teardown failed"));
}

#[tokio::test]
async fn test_teardown_without_initialize_is_noop() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = StoreBuilder::new()
        .with_database_path(Some(temp_dir.path().join("never.db")))
        .build();

    assert!(!store.teardown().await.expect("Teardown should not fail"));
}
