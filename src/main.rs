use axum::{routing::get, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

mod models;
mod routes;
mod services;

use routes::{health::health_check, lookup::lookup_book};
use services::google_books::{BooksClient, GoogleBooksClient, GoogleBooksConfig};

type Backend = Arc<dyn BooksClient + Send + Sync>;

pub fn app(client: Backend) -> Router {
    Router::new()
        .route("/status", get(health_check))
        .route("/lookup", get(lookup_book))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(client)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("lookup_service=info,tower_http=info")
        .init();

    let api_key = std::env::var("GOOGLE_API_KEY").unwrap_or_else(|_| {
        warn!("GOOGLE_API_KEY not set, querying Google Books without a key");
        String::new()
    });
    let base_url = std::env::var("BOOKS_API_URL")
        .unwrap_or_else(|_| "https://www.googleapis.com/books/v1/volumes".to_string());
    let timeout_secs = std::env::var("UPSTREAM_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10);

    let client = GoogleBooksClient::new(GoogleBooksConfig {
        api_key,
        base_url,
        timeout: Duration::from_secs(timeout_secs),
    })
    .expect("Failed to build upstream HTTP client");

    let backend: Backend = Arc::new(client);
    let app = app(backend);

    let port = std::env::var("PORT").unwrap_or_else(|_| "7004".to_string());
    let addr = format!("0.0.0.0:{}", port);

    info!("Lookup service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
