use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::sync::Once;

use crate::db::migrate;

/// Fresh migrated database for a test. A single pooled connection keeps an
/// in-memory SQLite database alive and visible across all queries.
pub async fn setup_test_db(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url);
    opt.min_connections(1).max_connections(1);

    let conn = Database::connect(opt).await?;
    migrate(&conn).await?;
    Ok(conn)
}

/// Populates the environment `Config::from_env` reads. The SMTP values point
/// at an unreachable local port so a delivery attempt fails fast instead of
/// leaving the process.
pub fn setup_test_env() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let vars = [
            ("DATABASE_URL", "sqlite::memory:"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("ALLOWED_ORIGIN", "http://localhost:5173"),
            ("ALLOWED_EMAIL", "owner@example.com"),
            ("JWT_SECRET", "test-secret"),
            ("EMAILER", "darklab@example.com"),
            ("SMTP_HOST", "127.0.0.1"),
            ("SMTP_PORT", "1"),
            ("SMTP_USER", "darklab"),
            ("SMTP_PASS", "password"),
        ];
        for (key, value) in vars {
            // set_var is unsafe in edition 2024; this runs before any other
            // thread reads the environment.
            unsafe { std::env::set_var(key, value) };
        }
    });
}
