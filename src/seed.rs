// Synthetic demo dataset: facility load uniform in [-10000, 10000] W, PV
// uniform in [0, 10000] W, storage generation balancing the two. Runs once
// at startup, only when enabled and the store has no datasets yet.

use chrono::{TimeZone, Utc};
use rand::Rng;
use tracing::info;

use crate::config::SeedConfig;
use crate::models::Sample;
use crate::store_repo::StoreRepo;

/// Generates and imports the demo dataset when the store is empty.
pub async fn run_seed(store: &StoreRepo, cfg: &SeedConfig) -> anyhow::Result<()> {
    if !cfg.enabled {
        return Ok(());
    }
    if !store.is_empty().await? {
        info!("store already has datasets, skipping demo seed");
        return Ok(());
    }

    let samples = generate(cfg)?;
    store.import(&cfg.dataset, &samples).await?;
    info!(
        dataset = %cfg.dataset,
        count = samples.len(),
        "seeded demo dataset"
    );
    Ok(())
}

/// One sample every resolution_secs, starting at begin_year-01-01 00:00 UTC.
pub fn generate(cfg: &SeedConfig) -> anyhow::Result<Vec<Sample>> {
    let begin = Utc
        .with_ymd_and_hms(cfg.begin_year, 1, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| anyhow::anyhow!("invalid seed.begin_year: {}", cfg.begin_year))?
        .timestamp_millis();

    let step_ms = (cfg.resolution_secs as i64) * 1000;
    let count = (cfg.length_secs / cfg.resolution_secs) as usize;

    let mut rng = rand::thread_rng();
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let facility_load = rng.gen_range(-10_000..=10_000) as f64;
        let pv_load = rng.gen_range(0..=10_000) as f64;
        out.push(Sample {
            ts: begin + (i as i64) * step_ms,
            pv_load,
            facility_load,
            storage_gen: pv_load - facility_load,
        });
    }
    Ok(out)
}
