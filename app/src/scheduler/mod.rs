use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::persistence::otps::purge_expired;

const PURGE_INTERVAL: Duration = Duration::from_secs(60 * 10);

/// Spawns the background task that clears out expired OTP rows. Expired rows
/// are also dropped when a verification attempt touches them; this sweep
/// catches the ones nobody ever retried.
pub fn start_purge_task(conn: DatabaseConnection) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PURGE_INTERVAL);
        loop {
            interval.tick().await;
            match purge_expired(&conn).await {
                Ok(0) => {}
                Ok(n) => tracing::debug!("Purged {} expired OTP records", n),
                Err(e) => tracing::error!("Failed to purge expired OTP records: {}", e),
            }
        }
    });
}
