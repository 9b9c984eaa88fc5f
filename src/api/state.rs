//! Application state for the Attendance Budget Engine API.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::repository::AttendanceRepository;

/// Shared application state.
///
/// Holds the loaded policy and the repository every handler reads from.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    repository: Arc<dyn AttendanceRepository>,
}

impl AppState {
    /// Creates the state from a configuration and a repository.
    pub fn new(config: ConfigLoader, repository: Arc<dyn AttendanceRepository>) -> Self {
        Self {
            config: Arc::new(config),
            repository,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the repository.
    pub fn repository(&self) -> &dyn AttendanceRepository {
        self.repository.as_ref()
    }
}
