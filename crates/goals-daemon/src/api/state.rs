use std::sync::Arc;

use goals_core::{EventDispatcher, GoalService, LogSink, StoreHandle};

use crate::config::DaemonConfig;

/// Shared state for all handlers
pub struct AppState {
    pub service: GoalService,
}

impl AppState {
    pub fn new(service: GoalService) -> Arc<Self> {
        Arc::new(Self { service })
    }

    /// Build the service around an opened store, wiring the configured event log.
    pub fn from_config(store: StoreHandle, config: &DaemonConfig) -> Arc<Self> {
        let mut events = EventDispatcher::new();
        if let Some(path) = &config.events_log {
            events.add_sink(Box::new(LogSink::new(path)));
        }
        Self::new(GoalService::with_events(store, events))
    }
}
