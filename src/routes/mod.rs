// HTTP routes

mod http;

use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::store_repo::StoreRepo;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) store: Arc<StoreRepo>,
    pub(crate) config: AppConfig,
}

pub fn app(store: Arc<StoreRepo>, config: AppConfig) -> Router {
    let max_upload_bytes = config.data.max_upload_bytes;
    let state = AppState { store, config };
    Router::new()
        .route("/", get(|| async { "solarviz: load series API" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/load", get(http::load_handler)) // GET /api/load
        .route("/api/summary", get(http::summary_handler)) // GET /api/summary
        .route("/api/datasets", get(http::datasets_handler)) // GET /api/datasets
        .route("/upload", post(http::upload_handler)) // POST /upload
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
