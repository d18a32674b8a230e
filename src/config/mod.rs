use crate::errors::{AppError, AppResult};
use crate::files::{DEFAULT_OUTPUT_FILE, ReportFormat};
use crate::models::DirectionMode;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys a complete configuration file carries.
pub const CONFIG_KEYS: [&str; 3] = ["output_file", "direction_mode", "report_format"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default)]
    pub direction_mode: DirectionMode,
    #[serde(default)]
    pub report_format: ReportFormat,
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
            direction_mode: DirectionMode::default(),
            report_format: ReportFormat::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("aubconv")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".aubconv")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("aubconv.conf")
    }

    /// Config path to use: the `--config` override or the standard location.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom
            .map(expand_tilde)
            .unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_yaml::from_str(&content)?)
    }

    /// Write the default configuration file (creating its directory).
    /// An existing file is left untouched.
    pub fn init(path: &Path, is_test: bool) -> AppResult<bool> {
        if is_test || path.exists() {
            return Ok(false);
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(true)
    }

    /// Keys missing from the configuration file at `path`.
    pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let yaml: Value = serde_yaml::from_str(&content)?;

        let map = yaml.as_mapping().ok_or_else(|| {
            AppError::Config(format!("{} is not a YAML mapping", path.display()))
        })?;

        Ok(CONFIG_KEYS
            .into_iter()
            .filter(|k| !map.contains_key(Value::String((*k).to_string())))
            .collect())
    }
}
