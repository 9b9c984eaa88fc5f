//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the absence
//! policy from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::SessionType;

use super::types::{BackfillConfig, EngineConfig, InstitutionMetadata, PolicyConfig};

/// Loads and provides access to the absence policy configuration.
///
/// # Directory Structure
///
/// ```text
/// config/obs/
/// ├── institution.yaml  # Rule set metadata
/// └── policy.yaml       # Default limits and backfill settings
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
/// use attendance_engine::models::SessionType;
///
/// let loader = ConfigLoader::load("./config/obs").unwrap();
/// println!("Theory limit: {}%", loader.default_limit_percent(SessionType::Theory));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A default limit lies outside 0-100
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let institution_path = path.join("institution.yaml");
        let metadata = Self::load_yaml::<InstitutionMetadata>(&institution_path)?;

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<PolicyConfig>(&policy_path)?;

        let hundred = Decimal::ONE_HUNDRED;
        for percent in [
            policy.absence_limits.theory_percent,
            policy.absence_limits.practice_percent,
        ] {
            if percent < Decimal::ZERO || percent > hundred {
                return Err(EngineError::ConfigParseError {
                    path: policy_path.display().to_string(),
                    message: format!("absence limit {} is outside the range 0-100", percent),
                });
            }
        }

        Ok(Self {
            config: EngineConfig::new(metadata, policy),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the institution metadata.
    pub fn institution(&self) -> &InstitutionMetadata {
        self.config.institution()
    }

    /// Returns the default absence limit for new courses.
    pub fn default_limit_percent(&self, session_type: SessionType) -> Decimal {
        let limits = &self.config.policy().absence_limits;
        match session_type {
            SessionType::Theory => limits.theory_percent,
            SessionType::Practice => limits.practice_percent,
        }
    }

    /// Returns the backfill settings.
    pub fn backfill(&self) -> &BackfillConfig {
        &self.config.policy().backfill
    }
}
