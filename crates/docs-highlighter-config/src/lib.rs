use docs_highlighter_engine::Markers;
use docs_highlighter_engine::style::DEFAULT_THEME;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;
pub const DEFAULT_REGION_LANGUAGE: &str = "java";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Which part of the document gets highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Every italic-tagged `<code>` block, each configured by its own header.
    #[default]
    Instances,
    /// Everything between the begin and end markers, as one language.
    Region,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Document to keep highlighted.
    pub document: PathBuf,

    /// File that submitted edit batches are appended to. Stdout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edits_path: Option<PathBuf>,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    #[serde(default)]
    pub mode: Mode,

    #[serde(default = "default_region_language")]
    pub region_language: String,

    #[serde(default = "default_region_theme")]
    pub region_theme: String,

    #[serde(default)]
    pub markers: Markers,

    /// Language key to a formatter command line (program first), fed the code
    /// on stdin.
    #[serde(default)]
    pub formatters: BTreeMap<String, Vec<String>>,
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_region_language() -> String {
    DEFAULT_REGION_LANGUAGE.to_string()
}

fn default_region_theme() -> String {
    DEFAULT_THEME.to_string()
}

impl Config {
    pub fn new(document: impl Into<PathBuf>) -> Self {
        Self {
            document: document.into(),
            edits_path: None,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            mode: Mode::default(),
            region_language: default_region_language(),
            region_theme: default_region_theme(),
            markers: Markers::default(),
            formatters: BTreeMap::new(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.document = Self::expand_path(&config.document).unwrap_or(config.document);
        config.edits_path = config
            .edits_path
            .map(|p| Self::expand_path(&p).unwrap_or(p));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/docs-highlighter");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// `~` and `$VAR` expansion; `None` when a variable is unset.
    fn expand_path(path: &Path) -> Option<PathBuf> {
        shellexpand::full(&path.to_string_lossy())
            .ok()
            .map(|expanded| PathBuf::from(expanded.as_ref()))
    }
}
