mod common;

use common::create_test_store;
use sqlhack_core::{
    db::seed::EMPLOYEES, display::SampleTable, Mission, QueryOutcome, Row, Session, Table,
};

#[tokio::test]
async fn test_fresh_store_query_then_grade() {
    let (_temp_dir, store) = create_test_store().await;
    let query = "SELECT * FROM employees WHERE id=1";

    let rows = store.execute_query(query).await;
    assert_eq!(rows, vec![Row::from(&EMPLOYEES[0])]);

    // Right row, but the query mentions neither a time nor the weakness
    assert!(!Mission::NightShift.is_solved_by(query, &rows));
}

#[tokio::test]
async fn test_shift_query_solves_mission() {
    let (_temp_dir, store) = create_test_store().await;
    let mut session = Session::new(Mission::first());
    let query = "SELECT name, weakness FROM employees WHERE shift_start > shift_end";

    let rows = store.execute_query(query).await;
    assert_eq!(rows.len(), 1);
    assert!(session.record_query(query, &rows));
    assert!(session.mission_complete());
}

#[tokio::test]
async fn test_invalid_sql_is_soft_failure() {
    let (_temp_dir, store) = create_test_store().await;

    assert!(store.execute_query("DROP EVERYTHING NOW").await.is_empty());
    assert!(store.run_query("DROP EVERYTHING NOW").await.is_failed());

    // The store is still usable afterwards
    assert_eq!(store.execute_query("SELECT * FROM facilities").await.len(), 4);
}

#[tokio::test]
async fn test_player_can_modify_data() {
    let (_temp_dir, store) = create_test_store().await;

    let outcome = store
        .run_query("DELETE FROM security_logs WHERE employee_id = 1")
        .await;
    assert_eq!(outcome, QueryOutcome::Rows(Vec::new()));
    assert_eq!(store.sample_rows("security_logs", 10).await.len(), 2);
}

#[tokio::test]
async fn test_sample_screens_for_every_table() {
    let (_temp_dir, store) = create_test_store().await;
    let schema = store.schema().await;

    for table in Table::ALL {
        let rows = store.sample_rows(table.as_str(), 3).await;
        assert_eq!(rows.len(), 3);

        let columns = schema
            .table(table.as_str())
            .map(|t| t.column_names())
            .unwrap_or_default();
        let output = SampleTable {
            table: table.as_str(),
            limit: 3,
            columns,
            rows: &rows,
        }
        .to_string();
        assert!(output.contains(&table.as_str().to_uppercase()));
        assert!(!output.contains("No data available"));
    }
}

#[tokio::test]
async fn test_teardown_then_initialize_starts_fresh() {
    let (_temp_dir, store) = create_test_store().await;
    store
        .execute_query("UPDATE employees SET weakness = 'none' WHERE id = 1")
        .await;

    assert!(store.teardown().await.expect("Teardown failed"));
    assert!(!store.db_path().exists());

    store.initialize().await.expect("Reinitialize failed");
    let rows = store.sample_rows("employees", 1).await;
    assert_eq!(rows, vec![Row::from(&EMPLOYEES[0])]);
}

#[tokio::test]
async fn test_player_can_insert_dangling_reference() {
    let (_temp_dir, store) = create_test_store().await;

    let outcome = store
        .run_query("INSERT INTO facilities VALUES (5, 'Roof Access', 6, 1, 42)")
        .await;
    assert_eq!(outcome, QueryOutcome::Rows(Vec::new()));
    assert_eq!(store.sample_rows("facilities", 10).await.len(), 5);
}
