use sqlhack_core::{Store, StoreBuilder};
use tempfile::TempDir;

/// Helper function to create an initialized test store
pub async fn create_test_store() -> (TempDir, Store) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = StoreBuilder::new()
        .with_database_path(Some(temp_dir.path().join("mission.db")))
        .build();
    store
        .initialize()
        .await
        .expect("Failed to initialize store");
    (temp_dir, store)
}
