pub mod credentials;
pub mod error;
pub mod models;
pub mod routes;
pub mod sheets;
pub mod store;

pub const STATIC_HASH: &str = env!("STATIC_HASH");

use axum::http::{header, HeaderValue};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::store::GuestbookStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<GuestbookStore>,
}

async fn health() -> &'static str {
    "ok"
}

/// Build the full Axum application router.
///
/// The store is constructed once by the caller and shared across requests;
/// route handlers reach it through `AppState`.
pub fn build_app(store: GuestbookStore) -> Router {
    let state = AppState {
        store: Arc::new(store),
    };

    Router::new()
        .route("/health", get(health))
        .merge(routes::guestbook::router())
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::overriding(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=86400"),
                ))
                .service(ServeDir::new("static")),
        )
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
