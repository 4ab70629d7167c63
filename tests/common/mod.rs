// Shared test helpers

#![allow(dead_code)]

use axum_test::TestServer;
use solarviz::config::AppConfig;
use solarviz::models::Sample;
use solarviz::routes;
use solarviz::store_repo::StoreRepo;
use std::sync::Arc;
use tempfile::TempDir;

pub const MIN_15: i64 = 15 * 60 * 1000;
pub const MIN_30: i64 = 30 * 60 * 1000;
pub const HOUR: i64 = 60 * 60 * 1000;

/// Sample with the same value on all three channels.
pub fn sample(ts: i64, v: f64) -> Sample {
    Sample {
        ts,
        pv_load: v,
        facility_load: v,
        storage_gen: v,
    }
}

/// Series with the given values, spaced res_ms apart starting at t0.
pub fn series(t0: i64, res_ms: i64, values: &[f64]) -> Vec<Sample> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| sample(t0 + (i as i64) * res_ms, v))
        .collect()
}

pub fn test_config(dir: &TempDir) -> AppConfig {
    let toml = format!(
        r#"
[server]
host = "127.0.0.1"
port = 8080

[store]
path = "{base}/test.db"

[data]
dir = "{base}/data"

[seed]
enabled = false
"#,
        base = dir.path().display()
    );
    AppConfig::load_from_str(&toml).unwrap()
}

pub async fn test_store(dir: &TempDir) -> StoreRepo {
    let config = test_config(dir);
    let store = StoreRepo::connect(&config.store.path).await.unwrap();
    store.init().await.unwrap();
    store
}

pub async fn test_server(dir: &TempDir) -> (TestServer, Arc<StoreRepo>) {
    let config = test_config(dir);
    let store = Arc::new(StoreRepo::connect(&config.store.path).await.unwrap());
    store.init().await.unwrap();
    let app = routes::app(store.clone(), config);
    (TestServer::new(app), store)
}
