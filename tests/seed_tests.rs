// Demo seeder tests: generation shape and the emptiness gate.

mod common;

use common::{sample, test_store};
use solarviz::config::SeedConfig;
use solarviz::seed::{generate, run_seed};
use tempfile::TempDir;

// 1/1/17 0:00 UTC.
const T0: i64 = 1_483_228_800_000;

fn seed_config() -> SeedConfig {
    SeedConfig {
        enabled: true,
        dataset: "demo".to_string(),
        begin_year: 2017,
        resolution_secs: 1800,
        length_secs: 3 * 24 * 60 * 60,
    }
}

#[test]
fn generate_spacing_and_count() {
    let cfg = seed_config();
    let samples = generate(&cfg).unwrap();
    assert_eq!(samples.len(), 144); // 3 days of 30-min readings
    assert_eq!(samples[0].ts, T0);
    assert_eq!(samples[1].ts - samples[0].ts, 1_800_000);
}

#[test]
fn generate_storage_balances_pv_and_facility() {
    let samples = generate(&seed_config()).unwrap();
    for s in &samples {
        assert!((0.0..=10_000.0).contains(&s.pv_load));
        assert!((-10_000.0..=10_000.0).contains(&s.facility_load));
        assert_eq!(s.storage_gen, s.pv_load - s.facility_load);
    }
}

#[tokio::test]
async fn run_seed_imports_into_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir).await;

    run_seed(&store, &seed_config()).await.unwrap();

    assert_eq!(store.dataset_names().await.unwrap(), vec!["demo"]);
    assert_eq!(store.count("demo").await.unwrap(), 144);
}

#[tokio::test]
async fn run_seed_skips_non_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir).await;
    store.import("existing", &[sample(0, 1.0)]).await.unwrap();

    run_seed(&store, &seed_config()).await.unwrap();

    assert_eq!(store.dataset_names().await.unwrap(), vec!["existing"]);
}

#[tokio::test]
async fn run_seed_disabled_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let store = test_store(&dir).await;

    let cfg = SeedConfig {
        enabled: false,
        ..seed_config()
    };
    run_seed(&store, &cfg).await.unwrap();

    assert!(store.is_empty().await.unwrap());
}
