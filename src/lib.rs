use api::{setup_config, setup_db, setup_router};
use app::scheduler::start_purge_task;

pub async fn run() {
    let config = setup_config();
    let conn = setup_db(&config.db_url).await;

    utils::migrate(&conn).await.expect("Migration failed");

    start_purge_task(conn.clone());

    let server_url = config.get_server_url();
    let router = setup_router(config, conn);

    let listener = tokio::net::TcpListener::bind(&server_url)
        .await
        .expect("Failed to bind server address");

    tracing::info!("Listening on {}", server_url);
    axum::serve(listener, router).await.expect("Server failed");
}
