//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading detection
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{AuditError, AuditResult};

use super::types::DetectionConfig;

/// Loads and provides access to detection settings.
///
/// # File Format
///
/// ```text
/// min_gap_minutes: 60
/// max_gap_minutes: 600
/// max_shift_minutes: 840
/// ```
///
/// Omitted keys keep their defaults. Any other key is a parse error.
///
/// # Example
///
/// ```no_run
/// use timecard_audit::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/detection.yaml").unwrap();
/// println!("Flagging shifts over {} minutes", loader.config().max_shift_minutes);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: DetectionConfig,
}

impl ConfigLoader {
    /// Loads detection settings from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable ([`AuditError::ConfigNotFound`])
    /// - The file is not valid YAML for the settings ([`AuditError::ConfigParseError`])
    /// - A threshold is unusable ([`AuditError::InvalidConfig`])
    pub fn load<P: AsRef<Path>>(path: P) -> AuditResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AuditError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content, &path_str)?;
        debug!(path = %path_str, ?config, "Loaded detection configuration");

        Ok(Self { config })
    }

    /// Loads settings from `path` when given, otherwise uses the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> AuditResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn parse(content: &str, path_str: &str) -> AuditResult<DetectionConfig> {
        // An empty document deserializes as null rather than an empty map.
        if content.trim().is_empty() {
            return Ok(DetectionConfig::default());
        }

        let config: DetectionConfig =
            serde_yaml::from_str(content).map_err(|e| AuditError::ConfigParseError {
                path: path_str.to_string(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Returns the loaded settings.
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Consumes the loader and returns the settings.
    pub fn into_config(self) -> DetectionConfig {
        self.config
    }
}
