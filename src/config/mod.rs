//! Configuration loading and management for the Attendance Budget Engine.
//!
//! This module loads the absence policy from YAML files: institution
//! metadata, default limit percentages for new courses, and the backfill
//! reconciliation settings.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/obs").unwrap();
//! println!("Loaded rules: {}", config.institution().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AbsenceLimits, BackfillConfig, EngineConfig, InstitutionMetadata, PolicyConfig};
