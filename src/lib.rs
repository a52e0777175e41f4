use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod args;
#[cfg(feature = "directory-scan")]
pub mod directory;
pub mod error;
pub mod pipeline;
pub mod watermark;

pub use error::{ConfigError, WatermarkError};
pub use pipeline::{Pipeline, RunSummary};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "IMGMARK_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "imgmark.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
    /// Match `.JPG`/`.PNG` etc. as well. Off by default: extensions are matched as typed.
    #[serde(default)]
    pub case_insensitive_extensions: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_jpeg_quality() -> u8 {
    watermark::formats::jpeg::DEFAULT_QUALITY
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: default_jpeg_quality(),
            case_insensitive_extensions: false,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: Config =
            toml_edit::de::from_str(content).map_err(|source| ConfigError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Locate the config file: `$IMGMARK_CONFIG` if set, else `imgmark.toml` if it exists.
    pub fn locate() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.exists().then_some(local)
    }

    /// Load the located config file, falling back to defaults when there is none.
    pub fn load() -> Result<(Self, Option<PathBuf>), ConfigError> {
        match Self::locate() {
            Some(path) => Ok((Self::load_from_file(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let quality = self.output.jpeg_quality;
        if !(1..=100).contains(&quality) {
            return Err(ConfigError::InvalidJpegQuality(quality));
        }
        Ok(())
    }
}
