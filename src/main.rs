use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use student_search::config::ServerConfig;
use student_search::records::store::RecordStore;
use student_search::search::engine::QueryEngine;
use student_search::search::handlers::{handle_health, handle_list_students, handle_search};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ServerConfig::from_env_and_args()?;

    // 1. Record store (fatal on failure):
    let store = match RecordStore::load(&config.data_path) {
        Ok(store) => Arc::new(store),
        Err(err) => {
            tracing::error!("Cannot start without student data: {}", err);
            return Err(err.into());
        }
    };

    // 2. Query engine:
    let engine = Arc::new(QueryEngine::new(store));

    // 3. HTTP Router:
    let app = Router::new()
        .route("/api/students/search", get(handle_search))
        .route("/api/students", get(handle_list_students))
        .route("/health", get(handle_health))
        .layer(Extension(engine));

    // 4. Start HTTP server:
    tracing::info!("Server running on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
