//! Configuration types for the absence policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the institution whose rules are configured.
#[derive(Debug, Clone, Deserialize)]
pub struct InstitutionMetadata {
    /// Short code of the rule set (e.g., "OBS").
    pub code: String,
    /// The human-readable name of the rule set.
    pub name: String,
    /// The version or effective date of the rules.
    pub version: String,
    /// URL to the official regulation.
    pub source_url: String,
}

/// Default absence limits applied to new courses.
///
/// Missing keys fall back to 30% theory and 20% practice.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AbsenceLimits {
    /// Default theory limit, percent of total theory hours.
    pub theory_percent: Decimal,
    /// Default practice limit, percent of total practice hours.
    pub practice_percent: Decimal,
}

impl Default for AbsenceLimits {
    fn default() -> Self {
        Self {
            theory_percent: Decimal::from(30),
            practice_percent: Decimal::from(20),
        }
    }
}

/// Backfill reconciliation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackfillConfig {
    /// Whether elapsed sessions are auto-marked absent.
    pub enabled: bool,
    /// Note attached to auto-marked records.
    pub note: String,
}

impl Default for BackfillConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            note: "Auto-marked absent".to_string(),
        }
    }
}

/// Policy configuration from policy.yaml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Default absence limits.
    pub absence_limits: AbsenceLimits,
    /// Backfill settings.
    pub backfill: BackfillConfig,
}

/// The complete configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: InstitutionMetadata,
    policy: PolicyConfig,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(metadata: InstitutionMetadata, policy: PolicyConfig) -> Self {
        Self { metadata, policy }
    }

    /// Returns the institution metadata.
    pub fn institution(&self) -> &InstitutionMetadata {
        &self.metadata
    }

    /// Returns the policy configuration.
    pub fn policy(&self) -> &PolicyConfig {
        &self.policy
    }
}
