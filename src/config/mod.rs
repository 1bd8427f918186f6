use crate::core::calculator::breaks::DEFAULT_BREAK_THRESHOLD;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_break_threshold")]
    pub break_threshold_minutes: i64,
    #[serde(default = "default_format")]
    pub default_format: ExportFormat,
}

fn default_data_file() -> String {
    "data/mini_json_dataset.json".to_string()
}
fn default_output_dir() -> String {
    "data".to_string()
}
fn default_break_threshold() -> i64 {
    DEFAULT_BREAK_THRESHOLD
}
fn default_format() -> ExportFormat {
    ExportFormat::Xlsx
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            output_dir: default_output_dir(),
            break_threshold_minutes: default_break_threshold(),
            default_format: default_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.dutyreport`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dutyreport")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dutyreport.conf")
    }

    /// Load configuration from `path` (or the default location).
    /// A missing file means defaults; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.break_threshold_minutes < 0 {
            return Err(AppError::Config(format!(
                "break_threshold_minutes must be >= 0 (got {})",
                self.break_threshold_minutes
            )));
        }
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Write a default configuration file at `path` unless one is there.
    /// Returns `true` when the file has been created.
    pub fn init_file(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = Config::default().to_yaml()?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(true)
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }
}
