//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction. The state is
//! immutable after creation and cheap to clone.

use crate::config::AppConfig;
use physiolab_shared::vo2max::{test_definitions, TestDefinition};
use std::sync::Arc;

/// Shared application state
///
/// - `config`: wrapped in Arc, cloning is O(1)
/// - `tests`: the static test registry, a plain slice reference
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// VO₂max test registry
    pub tests: &'static [TestDefinition],
}

impl AppState {
    /// Create a new application state backed by the built-in registry
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            tests: test_definitions(),
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Decimal places for formatted results
    #[inline]
    pub fn decimal_places(&self) -> usize {
        self.config.calculator.decimal_places
    }

    #[inline]
    pub fn tests(&self) -> &'static [TestDefinition] {
        self.tests
    }
}
