// Handlers: load, summary, datasets, upload, version. Translates typed
// failures into the `{status, error}` envelope and does the operational
// logging the core never does.

use axum::extract::{Multipart, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use super::AppState;
use crate::csv_repo;
use crate::models::{Sample, Window};
use crate::series::summary::{self, SummaryError};
use crate::series::resample;
use crate::store_repo::StoreError;
use crate::version::{NAME, VERSION};

const DEFAULT_MAX_POINTS: usize = 300;

#[derive(Debug, Deserialize)]
pub(super) struct LoadParams {
    src: Option<String>,
    from: Option<i64>,
    to: Option<i64>,
    resolution: Option<i64>,
    max: Option<i64>,
    channel: Option<String>,
}

fn err_body(msg: &str) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": 0, "error": msg }))
}

fn failure(err: SummaryError) -> (StatusCode, axum::Json<serde_json::Value>) {
    match err {
        SummaryError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, err_body(&msg)),
        SummaryError::UnknownDataset(name) => (
            StatusCode::NOT_FOUND,
            err_body(&format!("Unknown data set: {}", name)),
        ),
        SummaryError::Store(e) => {
            error!(error = %e, "store failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                err_body("Server error: check logs"),
            )
        }
    }
}

fn parse_max(max: Option<i64>) -> Result<usize, SummaryError> {
    match max {
        None => Ok(DEFAULT_MAX_POINTS),
        Some(m) if m > 0 => Ok(m as usize),
        Some(m) => Err(SummaryError::InvalidRequest(format!(
            "max must be positive, got {}",
            m
        ))),
    }
}

async fn fetch(
    state: &AppState,
    name: &str,
    window: Window,
) -> Result<Vec<Sample>, SummaryError> {
    state
        .store
        .fetch_series(name, window)
        .await
        .map_err(|e| match e {
            StoreError::NotFound(name) => SummaryError::UnknownDataset(name),
            StoreError::Db(e) => SummaryError::Store(e.into()),
        })
}

/// GET /api/load — windowed, decimated points for one dataset.
pub(super) async fn load_handler(
    State(state): State<AppState>,
    Query(params): Query<LoadParams>,
) -> impl IntoResponse {
    let Some(src) = params.src.as_deref() else {
        return (StatusCode::BAD_REQUEST, err_body("No src parameter provided"));
    };
    let max = match parse_max(params.max) {
        Ok(m) => m,
        Err(e) => return failure(e),
    };
    let window = Window::new(params.from, params.to);

    let series = match fetch(&state, src, window).await {
        Ok(s) => s,
        Err(e) => return failure(e),
    };
    let resampled = resample::downsample(&series, params.resolution, max);

    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "status": 1,
            "actual_res": resampled.actual_res,
            "original_res": resampled.original_res,
            "points": resampled.points,
        })),
    )
}

/// GET /api/summary — the load payload plus per-channel peak and total
/// consumption, computed from the windowed full-resolution data.
pub(super) async fn summary_handler(
    State(state): State<AppState>,
    Query(params): Query<LoadParams>,
) -> impl IntoResponse {
    let Some(src) = params.src.as_deref() else {
        return (StatusCode::BAD_REQUEST, err_body("No src parameter provided"));
    };
    let max = match parse_max(params.max) {
        Ok(m) => m,
        Err(e) => return failure(e),
    };
    let channels = match summary::parse_channels(params.channel.as_deref()) {
        Ok(c) => c,
        Err(e) => return failure(e),
    };
    let window = Window::new(params.from, params.to);

    let series = match fetch(&state, src, window).await {
        Ok(s) => s,
        Err(e) => return failure(e),
    };
    let data = match summary::summarize(&series, window, params.resolution, max, &channels) {
        Ok(d) => d,
        Err(e) => return failure(e),
    };

    let mut stats = serde_json::Map::new();
    for (channel, stat) in &data.stats {
        stats.insert(
            channel.wire_name().to_string(),
            serde_json::to_value(stat).unwrap_or(serde_json::Value::Null),
        );
    }

    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "status": 1,
            "actual_res": data.actual_res,
            "original_res": data.original_res,
            "points": data.points,
            "stats": stats,
        })),
    )
}

/// GET /api/datasets — registered dataset names.
pub(super) async fn datasets_handler(State(state): State<AppState>) -> impl IntoResponse {
    dataset_listing(&state).await
}

async fn dataset_listing(state: &AppState) -> (StatusCode, axum::Json<serde_json::Value>) {
    match state.store.dataset_names().await {
        Ok(files) => (
            StatusCode::OK,
            axum::Json(serde_json::json!({ "status": 1, "files": files })),
        ),
        Err(e) => {
            error!(error = %e, "listing datasets");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                err_body("Server error: check logs"),
            )
        }
    }
}

/// POST /upload — multipart load logs; each file part is written under the
/// data dir and imported as a dataset named after its stem. Responds with
/// the refreshed dataset list.
pub(super) async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                error!(error = %e, "reading upload part");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    err_body("Server error: check logs"),
                );
            }
        };

        let file_name = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| "upload.csv".to_string());
        let bytes = match field.bytes().await {
            Ok(b) => b,
            Err(e) => {
                error!(error = %e, file_name = %file_name, "reading upload body");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    err_body("Server error: check logs"),
                );
            }
        };

        match import_upload(&state, &file_name, &bytes).await {
            Ok(dataset) => info!(dataset = %dataset, "imported uploaded load log"),
            Err(e) => {
                error!(error = %e, file_name = %file_name, "importing uploaded load log");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    err_body("Server error: check logs"),
                );
            }
        }
    }

    dataset_listing(&state).await
}

/// Writes the raw bytes under the configured data dir and imports the parsed
/// series into the store. Returns the dataset name.
async fn import_upload(state: &AppState, file_name: &str, bytes: &[u8]) -> anyhow::Result<String> {
    // Strip any path components from the client-supplied name.
    let file_name = Path::new(file_name)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("upload.csv");
    let file_name = if file_name.ends_with(".csv") {
        file_name.to_string()
    } else {
        format!("{}.csv", file_name)
    };
    // Strip the extension once: "a.csv.csv" keeps its inner ".csv".
    let dataset = file_name
        .strip_suffix(".csv")
        .unwrap_or(&file_name)
        .to_string();

    let dir = PathBuf::from(&state.config.data.dir);
    tokio::fs::create_dir_all(&dir).await?;
    let path = dir.join(&file_name);
    tokio::fs::write(&path, bytes).await?;

    let samples = tokio::task::spawn_blocking(move || csv_repo::read_series(&path)).await??;
    state.store.import(&dataset, &samples).await?;
    Ok(dataset)
}

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}
