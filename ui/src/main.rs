use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{routing::get, Json, Router};
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Clone)]
struct AppState {
    api_url: String,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct SearchParams {
    query: Option<String>,
    limit: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let api_url = std::env::var("SEARCH_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
    let bind_addr: SocketAddr = std::env::var("UI_BIND")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;

    let state = AppState {
        api_url: api_url.trim_end_matches('/').to_string(),
        client: reqwest::Client::new(),
    };

    let app = Router::new()
        .route("/", get(ui))
        .route("/api/students/search", get(api_search))
        .with_state(state.clone());

    tracing::info!("UI listening on {} (search API at {})", bind_addr, state.api_url);
    axum::serve(tokio::net::TcpListener::bind(bind_addr).await?, app).await?;

    Ok(())
}

async fn ui() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

/// Relays the search to the API server, passing its status and JSON body
/// through untouched so the page can tell "no matches" from "service down".
async fn api_search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let url = search_url(&state.api_url, &params);

    let resp = match state.client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!("Search API unreachable: {}", e);
            return (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({"error": "Search service unavailable"})),
            )
                .into_response();
        }
    };

    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    match resp.json::<serde_json::Value>().await {
        Ok(body) => (status, Json(body)).into_response(),
        Err(e) => {
            tracing::warn!("Search API returned invalid json: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({"error": "invalid json"})),
            )
                .into_response()
        }
    }
}

fn search_url(api_url: &str, params: &SearchParams) -> String {
    let mut url = format!(
        "{}/api/students/search?query={}",
        api_url,
        urlencoding::encode(params.query.as_deref().unwrap_or_default())
    );
    if let Some(limit) = &params.limit {
        url.push_str(&format!("&limit={}", urlencoding::encode(limit)));
    }
    url
}
