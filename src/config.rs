use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub data: DataConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory where uploaded load logs are written before import.
    pub dir: String,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_max_upload_bytes() -> usize {
    16 * 1024 * 1024
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_seed_dataset")]
    pub dataset: String,
    #[serde(default = "default_seed_begin_year")]
    pub begin_year: i32,
    /// Seconds between generated readings.
    #[serde(default = "default_seed_resolution_secs")]
    pub resolution_secs: u64,
    /// Total span of generated readings, in seconds.
    #[serde(default = "default_seed_length_secs")]
    pub length_secs: u64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dataset: default_seed_dataset(),
            begin_year: default_seed_begin_year(),
            resolution_secs: default_seed_resolution_secs(),
            length_secs: default_seed_length_secs(),
        }
    }
}

fn default_seed_dataset() -> String {
    "demo".to_string()
}

fn default_seed_begin_year() -> i32 {
    2017
}

fn default_seed_resolution_secs() -> u64 {
    30 * 60
}

fn default_seed_length_secs() -> u64 {
    60 * 60 * 24 * 3
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.store.path.is_empty(), "store.path must be non-empty");
        anyhow::ensure!(!self.data.dir.is_empty(), "data.dir must be non-empty");
        anyhow::ensure!(
            self.data.max_upload_bytes > 0,
            "data.max_upload_bytes must be > 0, got {}",
            self.data.max_upload_bytes
        );
        anyhow::ensure!(
            !self.seed.dataset.is_empty(),
            "seed.dataset must be non-empty"
        );
        anyhow::ensure!(
            (1970..=9999).contains(&self.seed.begin_year),
            "seed.begin_year must be between 1970 and 9999, got {}",
            self.seed.begin_year
        );
        anyhow::ensure!(
            self.seed.resolution_secs > 0,
            "seed.resolution_secs must be > 0, got {}",
            self.seed.resolution_secs
        );
        anyhow::ensure!(
            self.seed.length_secs >= self.seed.resolution_secs,
            "seed.length_secs must be >= seed.resolution_secs, got {}",
            self.seed.length_secs
        );
        Ok(())
    }
}
