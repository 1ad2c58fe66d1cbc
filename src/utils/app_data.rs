use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "versefind";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the app config directory
///
/// Command-line flags and their environment variables override these values.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// TCP port the HTTP server listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Corpus file loaded at startup
    #[serde(default = "default_corpus_path")]
    pub corpus_path: PathBuf,

    /// Directory of static assets served for non-API paths
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Snippets per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_port() -> u16 {
    3001
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("completeworks.txt")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_page_size() -> usize {
    crate::query::DEFAULT_PAGE_SIZE
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            corpus_path: default_corpus_path(),
            static_dir: default_static_dir(),
            page_size: default_page_size(),
        }
    }
}

impl AppConfig {
    /// Load config from the app config directory, or return default if not found
    pub fn load() -> Result<Self> {
        match get_config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file, or return default if it does not exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file {}", config_path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", config_path.display()))?;

        tracing::debug!(path = %config_path.display(), "config loaded");
        Ok(config)
    }

    /// Address the server binds to
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

/// Get the path to the config file
///
/// `None` when the platform has no config directory.
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}
