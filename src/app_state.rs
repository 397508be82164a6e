//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::BoardConfig;
use crate::service::ScheduleService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Schedule service for all business logic.
    pub service: Arc<ScheduleService>,
    /// Configuration loaded at startup.
    pub config: Arc<BoardConfig>,
}

impl AppState {
    /// Bundles the service and configuration.
    #[must_use]
    pub fn new(service: ScheduleService, config: BoardConfig) -> Self {
        Self {
            service: Arc::new(service),
            config: Arc::new(config),
        }
    }

    /// Base URL for shareable links.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.public_base_url
    }
}
