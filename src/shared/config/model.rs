use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub engine: EngineConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct EngineConfig {
    /// Records per chunk handed to a single worker.
    pub chunk_size: usize,
    /// Worker pool size; 0 means one worker per available core.
    pub num_workers: usize,
    /// How many campaigns the CTR and CPA rankings keep.
    pub top_k: usize,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

use std::env;

/// Loads settings from the file named by `ADLYTICS_CONFIG` (default
/// `adlytics`, any extension the config crate understands). The file is
/// optional; without it the built-in defaults stay in force.
pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("ADLYTICS_CONFIG").unwrap_or_else(|_| "adlytics".to_string());

    let settings: Settings = config::Config::builder()
        .set_default("engine.chunk_size", 50_000i64)?
        .set_default("engine.num_workers", 0i64)?
        .set_default("engine.top_k", 10i64)?
        .set_default("logging.log_dir", "logs")?
        .set_default("logging.stdout_level", "warn")?
        .set_default("logging.file_level", "info")?
        .add_source(config::File::with_name(&config_path).required(false))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
