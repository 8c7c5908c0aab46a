// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::core::loader::{DataSource, DirSource, HttpSource};

pub const CONFIG_FILE: &str = "config.yaml";
pub const DEFAULT_PORT: u16 = 8000;

/// Where the CV documents live; `url` wins over `dir`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// HTTP timeout in seconds; unset means no timeout
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            url: None,
            dir: Some(PathBuf::from("static/data")),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaticConfig {
    pub dir: PathBuf,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("static"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default = "default_templates_path")]
    pub templates_path: PathBuf,
    #[serde(default, rename = "static")]
    pub static_files: StaticConfig,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_templates_path() -> PathBuf {
    PathBuf::from("templates")
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            templates_path: default_templates_path(),
            static_files: StaticConfig::default(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: AppConfig,
    production: AppConfig,
}

impl AppConfig {
    /// Load configuration for the current environment, then apply
    /// `ROCKET_PORT` and `CV_DATA_URL` overrides
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let config = Self::load_from_file(Path::new(CONFIG_FILE), &environment)?;
        config.with_overrides(
            std::env::var("ROCKET_PORT").ok().as_deref(),
            std::env::var("CV_DATA_URL").ok().as_deref(),
        )
    }

    fn get_environment() -> String {
        std::env::var("CVFOLIO_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    pub fn load_from_file(config_path: &Path, environment: &str) -> Result<Self> {
        if !config_path.exists() {
            warn!(
                "{} not found, using built-in defaults",
                config_path.display()
            );
            return Self::default().resolved();
        }

        let config_content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config_file: ConfigFile = serde_yaml::from_str(&config_content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        let env_config = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };

        env_config.resolved()
    }

    pub fn with_overrides(mut self, port: Option<&str>, data_url: Option<&str>) -> Result<Self> {
        if let Some(port) = port.map(str::trim).filter(|p| !p.is_empty()) {
            self.port = port
                .parse()
                .with_context(|| format!("Invalid ROCKET_PORT: {}", port))?;
        }
        if let Some(url) = data_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.data.url = Some(url.to_string());
        }
        Ok(self)
    }

    /// Make relative paths absolute
    fn resolved(self) -> Result<Self> {
        Ok(Self {
            data: DataConfig {
                dir: self.data.dir.as_deref().map(resolve_path).transpose()?,
                ..self.data
            },
            templates_path: resolve_path(&self.templates_path)?,
            static_files: StaticConfig {
                dir: resolve_path(&self.static_files.dir)?,
            },
            port: self.port,
        })
    }

    pub fn data_source(&self) -> Result<DataSource> {
        if let Some(url) = self.data.url.as_deref() {
            let timeout = self.data.timeout_secs.map(Duration::from_secs);
            return Ok(DataSource::Http(HttpSource::new(url, timeout)?));
        }
        match &self.data.dir {
            Some(dir) => Ok(DataSource::Dir(DirSource::new(dir))),
            None => anyhow::bail!("No data source configured: set data.url or data.dir"),
        }
    }
}

fn resolve_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let current_dir = std::env::current_dir().context("Failed to get current directory")?;
        Ok(current_dir.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loader::DocumentSource;

    fn write_config(content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("cvfolio-{}.yaml", uuid::Uuid::new_v4()));
        std::fs::write(&path, content).unwrap();
        path
    }

    const CONFIG: &str = r#"
local:
  data:
    dir: static/data
  templates_path: templates
  static:
    dir: static
  port: 8000
production:
  data:
    url: https://cv.example.com/data
    timeout_secs: 10
  templates_path: /srv/cvfolio/templates
  static:
    dir: /srv/cvfolio/static
  port: 80
"#;

    #[test]
    fn selects_environment_section() {
        let path = write_config(CONFIG);

        let local = AppConfig::load_from_file(&path, "local").unwrap();
        assert_eq!(local.port, 8000);
        assert!(local.data.url.is_none());
        assert!(local.data.dir.unwrap().is_absolute());

        let production = AppConfig::load_from_file(&path, "production").unwrap();
        assert_eq!(production.port, 80);
        assert_eq!(production.data.timeout_secs, Some(10));
        assert_eq!(
            production.templates_path,
            PathBuf::from("/srv/cvfolio/templates")
        );

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("cvfolio-does-not-exist.yaml");
        let config = AppConfig::load_from_file(&path, "local").unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.data.dir.unwrap().ends_with("static/data"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = write_config("local: [1, 2");
        assert!(AppConfig::load_from_file(&path, "local").is_err());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn overrides_apply() {
        let config = AppConfig::default()
            .with_overrides(Some("9090"), Some("http://localhost:3000/data"))
            .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.data.url.as_deref(), Some("http://localhost:3000/data"));

        assert!(AppConfig::default()
            .with_overrides(Some("not-a-port"), None)
            .is_err());
    }

    #[test]
    fn url_wins_over_dir() {
        let config = AppConfig::default()
            .with_overrides(None, Some("http://localhost:3000/data"))
            .unwrap();
        let source = config.data_source().unwrap();
        assert!(matches!(source, DataSource::Http(_)));
        assert_eq!(source.describe(), "http://localhost:3000/data");

        let source = AppConfig::default().data_source().unwrap();
        assert!(matches!(source, DataSource::Dir(_)));
    }
}
