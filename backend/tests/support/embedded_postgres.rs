//! Embedded PostgreSQL helpers for integration tests.
//!
//! - Each suite gets a temporary database on the shared embedded cluster.
//! - Schema setup runs the crate's embedded migrations so tests never drift
//!   from production DDL.
//! - Table teardown uses `postgres` directly to simulate schema loss.

use std::time::Duration;

use food_orders::outbound::persistence::run_pending_migrations;
use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};
use postgres::{Client, NoTls};
use uuid::Uuid;

use super::format_postgres_error;

const SHARED_CLUSTER_RETRIES: usize = 3;
const SHARED_CLUSTER_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Returns the process-wide embedded cluster, retrying transient failures.
pub fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    let mut attempt = 1;
    loop {
        match pg_embedded_setup_unpriv::test_support::shared_cluster_handle() {
            Ok(handle) => return Ok(handle),
            Err(error) => {
                if attempt >= SHARED_CLUSTER_RETRIES {
                    return Err(format!("shared cluster: {error:?}"));
                }
                std::thread::sleep(SHARED_CLUSTER_RETRY_DELAY);
                attempt += 1;
            }
        }
    }
}

/// Creates a temporary database with every migration applied.
///
/// The database is dropped when the returned handle goes out of scope.
pub fn provision_database() -> Result<TemporaryDatabase, String> {
    let cluster = shared_cluster()?;
    let database = cluster
        .temporary_database(format!("test_{}", Uuid::new_v4()))
        .map_err(|err| format!("create database: {err:?}"))?;
    let url = database.url().to_string();
    run_pending_migrations(&url).map_err(|err| format!("migrate: {err}"))?;
    Ok(database)
}

/// Drops the `ingredients` table from the database at `url`.
pub fn drop_ingredients_table(url: &str) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute("DROP TABLE IF EXISTS ingredients;")
        .map_err(|err| format_postgres_error(&err))
}
