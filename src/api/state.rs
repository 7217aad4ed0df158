//! Application state for the time-entry engine API.

use std::sync::Arc;

use crate::models::PayRateConfig;

/// Shared application state.
///
/// Holds the default rate configuration used when a request does not carry
/// its own. Cheap to clone; handlers share one `Arc`.
#[derive(Clone)]
pub struct AppState {
    rates: Arc<PayRateConfig>,
}

impl AppState {
    /// Creates a new application state with the given rate configuration.
    pub fn new(rates: PayRateConfig) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }

    /// Returns the default rate configuration.
    pub fn rates(&self) -> &PayRateConfig {
        &self.rates
    }
}
