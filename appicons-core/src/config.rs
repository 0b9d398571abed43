use crate::targets::{ExportTarget, Targets};
use serde::Deserialize;
use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

pub const DEFAULT_SOURCE: &str = "assets/images/logo.svg";
pub const DEFAULT_CONFIG_FILE_NAME: &str = "appicons.toml";

#[derive(Debug, PartialEq, Eq, Clone, Deserialize, Default)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// source image, relative to the project directory
    pub source: Option<PathBuf>,
    pub inkscape_binary: Option<PathBuf>,
    /// replaces the built-in target table if set
    pub targets: Option<Vec<ExportTarget>>,

    /// path of the configuration file, if the configuration was loaded from a file
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("invalid configuration string")]
    InvalidConfigString(String, #[source] eyre::Report),
    #[error("invalid configuration file {}", .0.display())]
    InvalidConfigFile(PathBuf, #[source] eyre::Report),
    #[error("i/o error reading configuration file {}", .0.display())]
    IoError(PathBuf, #[source] std::io::Error),
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTarget {
    #[error("target {} has size 0", .0.display())]
    ZeroSize(PathBuf),
    #[error("target with size {0} has an empty path")]
    EmptyPath(u32),
    #[error("target {} is not a relative path", .0.display())]
    NotRelative(PathBuf),
    #[error("target {} points outside the project directory", .0.display())]
    LeavesProjectDir(PathBuf),
    #[error("target {} is listed more than once", .0.display())]
    Duplicate(PathBuf),
}

impl Config {
    pub fn parse(s: &str) -> Result<Config, ConfigLoadError> {
        let config: Config = toml::from_str(s)
            .map_err(|e| ConfigLoadError::InvalidConfigString(s.to_owned(), e.into()))?;
        config
            .validate()
            .map_err(|e| ConfigLoadError::InvalidConfigString(s.to_owned(), e.into()))?;
        Ok(config)
    }

    pub async fn parse_file(p: &Path) -> Result<Config, ConfigLoadError> {
        let config_string = tokio::fs::read_to_string(p)
            .await
            .map_err(|e| ConfigLoadError::IoError(p.to_owned(), e))?;
        let mut config: Config = toml::from_str(&config_string)
            .map_err(|e| ConfigLoadError::InvalidConfigFile(p.to_owned(), e.into()))?;
        config
            .validate()
            .map_err(|e| ConfigLoadError::InvalidConfigFile(p.to_owned(), e.into()))?;
        config.config_file = Some(p.to_owned());
        Ok(config)
    }

    /// Loads `appicons.toml` from the project directory, falling back to the
    /// defaults if there is none.
    pub async fn for_project(project_dir: &Path) -> Result<Config, ConfigLoadError> {
        let p = project_dir.join(DEFAULT_CONFIG_FILE_NAME);
        if tokio::fs::metadata(&p).await.is_ok() {
            Config::parse_file(&p).await
        } else {
            tracing::debug!("no {} in {}", DEFAULT_CONFIG_FILE_NAME, project_dir.display());
            Ok(Config::default())
        }
    }

    pub fn source(&self) -> &Path {
        self.source
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_SOURCE))
    }

    pub fn targets(&self) -> Targets {
        match &self.targets {
            Some(targets) => Targets::from(targets.clone()),
            None => Targets::default(),
        }
    }

    fn validate(&self) -> Result<(), InvalidTarget> {
        let mut seen = HashSet::new();
        for target in self.targets.iter().flatten() {
            if target.size == 0 {
                return Err(InvalidTarget::ZeroSize(target.path.clone()));
            }
            if target.path.as_os_str().is_empty() {
                return Err(InvalidTarget::EmptyPath(target.size));
            }
            if !target.path.is_relative() {
                return Err(InvalidTarget::NotRelative(target.path.clone()));
            }
            if target.path.components().any(|c| c == Component::ParentDir) {
                return Err(InvalidTarget::LeavesProjectDir(target.path.clone()));
            }
            if !seen.insert(&target.path) {
                return Err(InvalidTarget::Duplicate(target.path.clone()));
            }
        }
        Ok(())
    }
}
