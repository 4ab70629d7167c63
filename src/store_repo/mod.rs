// SQLite dataset store: registry of named datasets plus their samples.
// One pool created at startup and shared through AppState; the window filter
// is expressed as SQL bounds with the same inclusive semantics as the
// in-memory and csv filters.

use std::path::Path;
use std::str::FromStr;

use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;
use tracing::instrument;

use crate::models::{Sample, Window};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown data set: {0}")]
    NotFound(String),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

pub struct StoreRepo {
    pool: SqlitePool,
}

impl StoreRepo {
    pub async fn connect(path: &str) -> anyhow::Result<Self> {
        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);
        let pool = SqlitePoolOptions::new().connect_with(opts).await?;
        Ok(Self { pool })
    }

    pub async fn init(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS datasets (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                created_at INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS samples (
                dataset_id INTEGER NOT NULL REFERENCES datasets(id) ON DELETE CASCADE,
                ts INTEGER NOT NULL,
                pv_load REAL NOT NULL,
                facility_load REAL NOT NULL,
                storage_gen REAL NOT NULL,
                PRIMARY KEY (dataset_id, ts)
            ) WITHOUT ROWID
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn dataset_id(&self, name: &str) -> Result<i64, StoreError> {
        let id = sqlx::query_scalar::<_, i64>("SELECT id FROM datasets WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        id.ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Ordered samples for one dataset, restricted to the window (both bounds
    /// inclusive).
    #[instrument(skip(self), fields(repo = "store", operation = "fetch_series"))]
    pub async fn fetch_series(
        &self,
        name: &str,
        window: Window,
    ) -> Result<Vec<Sample>, StoreError> {
        let id = self.dataset_id(name).await?;
        let rows = sqlx::query(
            "SELECT ts, pv_load, facility_load, storage_gen FROM samples
             WHERE dataset_id = $1 AND ts >= $2 AND ts <= $3 ORDER BY ts ASC",
        )
        .bind(id)
        .bind(window.begin.unwrap_or(i64::MIN))
        .bind(window.end.unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(Sample {
                ts: row.try_get("ts")?,
                pv_load: row.try_get("pv_load")?,
                facility_load: row.try_get("facility_load")?,
                storage_gen: row.try_get("storage_gen")?,
            });
        }
        Ok(out)
    }

    /// Registered dataset names, sorted.
    pub async fn dataset_names(&self) -> Result<Vec<String>, StoreError> {
        let names = sqlx::query_scalar::<_, String>("SELECT name FROM datasets ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(names)
    }

    /// Registers (or reuses) the dataset row and inserts all samples in one
    /// transaction. Duplicate timestamps within a dataset are
    /// last-write-wins.
    #[instrument(skip(self, samples), fields(repo = "store", operation = "import", samples_count = samples.len()))]
    pub async fn import(&self, name: &str, samples: &[Sample]) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT OR IGNORE INTO datasets (name, created_at) VALUES ($1, $2)")
            .bind(name)
            .bind(chrono::Utc::now().timestamp_millis())
            .execute(&mut *tx)
            .await?;
        let id = sqlx::query_scalar::<_, i64>("SELECT id FROM datasets WHERE name = $1")
            .bind(name)
            .fetch_one(&mut *tx)
            .await?;

        for s in samples {
            sqlx::query(
                "INSERT OR REPLACE INTO samples (dataset_id, ts, pv_load, facility_load, storage_gen) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(id)
            .bind(s.ts)
            .bind(s.pv_load)
            .bind(s.facility_load)
            .bind(s.storage_gen)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    /// True when no dataset is registered (gate for the demo seeder).
    pub async fn is_empty(&self) -> Result<bool, StoreError> {
        let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM datasets")
            .fetch_one(&self.pool)
            .await?;
        Ok(n == 0)
    }

    /// Sample count for one dataset.
    pub async fn count(&self, name: &str) -> Result<i64, StoreError> {
        let id = self.dataset_id(name).await?;
        let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM samples WHERE dataset_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }
}
