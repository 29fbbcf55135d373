//! Helpers shared by the integration tests that need a real PostgreSQL.

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};

/// DDL for the `users` table, kept in step with the diesel migration.
const USERS_SCHEMA: &str = include_str!("../../migrations/2026-10-18-000000_create_users/up.sql");

/// Render a `postgres` error with its SQLSTATE and server message.
///
/// `postgres::Error`'s `Display` collapses server errors to `db error`.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };
    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );
    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }
    summary
}

/// Whether `SKIP_TEST_CLUSTER` is set to `1`, `true` or `yes`.
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Turn a cluster setup failure into a skip or a loud failure.
///
/// Returns `None` when `SKIP_TEST_CLUSTER` is truthy and panics otherwise, so
/// CI without a working cluster must opt out explicitly.
pub fn handle_cluster_setup_failure<T>(reason: &str) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

/// Create database `name` and apply the `users` schema to it.
///
/// Returns the connection URL of the fresh database.
pub fn provision_database(cluster: &TestCluster, name: &str) -> Result<String, String> {
    let admin_url = cluster.connection().database_url("postgres");
    let mut admin = Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    admin
        .batch_execute(&format!("CREATE DATABASE \"{name}\""))
        .map_err(|err| format_postgres_error(&err))?;

    let url = cluster.connection().database_url(name);
    let mut client = Client::connect(&url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(USERS_SCHEMA)
        .map_err(|err| format_postgres_error(&err))?;
    Ok(url)
}

/// Insert a row with an explicit `created_at`, bypassing the repository.
pub fn insert_user_at(url: &str, id: &str, name: &str, created_at: &str) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .execute(
            "INSERT INTO users (id, name, phone, created_at) \
             VALUES ($1, $2, '555', $3::text::timestamptz)",
            &[&id, &name, &created_at],
        )
        .map_err(|err| format_postgres_error(&err))?;
    Ok(())
}

/// Count the rows stored under `id`.
pub fn count_rows_with_id(url: &str, id: &str) -> Result<i64, String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    let row = client
        .query_one("SELECT COUNT(*) FROM users WHERE id = $1", &[&id])
        .map_err(|err| format_postgres_error(&err))?;
    Ok(row.get(0))
}
