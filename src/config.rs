//! Configuration
//!
//! A small YAML file with a fallback chain. SMTP credentials are never
//! configured here: delivery reads them from the environment at send time.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub project: String,
    pub log_level: LogLevel,
    pub export: ExportConfig,
    pub digest: DigestConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Where `export` writes its files
    pub output_dir: PathBuf,
}

/// Defaults for the EARLYBIRD brief; every field can be overridden per
/// invocation on the command line.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DigestConfig {
    pub to: String,
    pub subject: String,
    pub intro: String,
    pub bullets: Vec<String>,
    pub footer: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: crate::export::PROJECT_NAME.to_string(),
            log_level: LogLevel::Info,
            export: ExportConfig::default(),
            digest: DigestConfig::default(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            to: "vernon.crumpjr@be0fficial.com".to_string(),
            subject: "Referee Daily Brief".to_string(),
            intro: "Good morning! Here are the top items for officials and assignors. Each has \
                    a one line take on why it matters."
                .to_string(),
            bullets: vec![
                "NFHS updates guidance on concussion protocols; assignors should review \
                 pregame checklist."
                    .to_string(),
                "Referee.com feature on conflict de escalation – great for preseason training \
                 decks."
                    .to_string(),
                "NISOA adds spring clinic dates; consider cross posting for college refs."
                    .to_string(),
            ],
            footer: "Reply with topics you want tracked. BeOfficial · EarlyBird".to_string(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()));
        }

        // Check BEOFFICIAL_CONFIG env var
        if let Ok(env_path) = std::env::var("BEOFFICIAL_CONFIG") {
            let path = PathBuf::from(env_path);
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from BEOFFICIAL_CONFIG: {}", e);
                    }
                }
            }
        }

        // Try BEOFFICIAL_DIR/beofficial.yaml
        if let Ok(dir) = std::env::var("BEOFFICIAL_DIR") {
            let path = PathBuf::from(dir).join("beofficial.yaml");
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from BEOFFICIAL_DIR: {}", e);
                    }
                }
            }
        }

        // Try ~/.config/beofficial/beofficial.yaml
        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("beofficial").join("beofficial.yaml");
            if path.exists() {
                match Self::load_from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        // Try ./beofficial.yaml (for development)
        let local_config = PathBuf::from("beofficial.yaml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load local config: {}", e);
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// The beofficial directory (config, future state)
    pub fn beofficial_dir() -> PathBuf {
        std::env::var("BEOFFICIAL_DIR").map(PathBuf::from).unwrap_or_else(|_| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("beofficial")
        })
    }

    /// Expand a path that may contain ~ or env vars
    pub fn expand_path(path: &Path) -> PathBuf {
        let path_str = path.to_string_lossy();
        let expanded = shellexpand::full(&path_str).unwrap_or_else(|_| path_str.clone());
        PathBuf::from(expanded.as_ref())
    }
}
