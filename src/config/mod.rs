use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Name of the key-value slot holding the record list.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    /// Longest side, in pixels, of photos embedded in the PDF report.
    #[serde(default = "default_image_max_side")]
    pub image_max_side: u32,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_storage_key() -> String {
    "punchlist".to_string()
}
fn default_export_dir() -> String {
    Config::config_dir()
        .join("reports")
        .to_string_lossy()
        .to_string()
}
fn default_image_max_side() -> u32 {
    1600
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            storage_key: default_storage_key(),
            export_dir: default_export_dir(),
            image_max_side: default_image_max_side(),
        }
    }
}

impl Config {
    /// Standard configuration directory (`~/.punchlist`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".punchlist")
    }

    /// Full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchlist.conf")
    }

    /// Full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("punchlist.sqlite")
    }

    /// Load configuration from the standard file, or defaults if not found.
    pub fn load() -> Self {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`.
    ///
    /// A missing file gives the defaults; an unreadable or malformed one
    /// also gives the defaults, with a warning.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                warning(format!("{e}: using default configuration"));
                Self::default()
            }),
            Err(e) => {
                warning(format!(
                    "Cannot read {}: {e}: using default configuration",
                    path.display()
                ));
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Create the config directory, write the config file (unless
    /// `is_test`) and return the resulting configuration.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let mut config = Self::default();
        if let Some(name) = custom_db {
            let p = Path::new(&name);
            config.database = if p.is_absolute() || is_test {
                p.to_string_lossy().to_string()
            } else {
                dir.join(p).to_string_lossy().to_string()
            };
        }

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
        }

        Ok(config)
    }
}
