// service.rs — GoalService: list, create and delete over an injected store.
//
// Store failures of any kind surface as `GoalError::StoreUnavailable`; the
// underlying detail is logged here and carried as the error source, never
// turned into caller-facing text.

use std::sync::Arc;

use crate::error::GoalError;
use crate::events::{EventDispatcher, GoalEvent};
use crate::goal::{validate_text, Goal, GoalId};
use crate::store::StoreHandle;

/// The goal operations, bound to one store handle.
#[derive(Clone)]
pub struct GoalService {
    store: StoreHandle,
    events: Arc<EventDispatcher>,
}

impl GoalService {
    pub fn new(store: StoreHandle) -> Self {
        Self::with_events(store, EventDispatcher::new())
    }

    pub fn with_events(store: StoreHandle, events: EventDispatcher) -> Self {
        Self {
            store,
            events: Arc::new(events),
        }
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// Every stored goal, in store order.
    pub async fn list(&self) -> Result<Vec<Goal>, GoalError> {
        tracing::info!("fetching goals");
        match self.store.find_all().await {
            Ok(docs) => {
                tracing::info!(count = docs.len(), "fetched goals");
                Ok(docs.into_iter().map(Goal::from).collect())
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching goals");
                Err(GoalError::unavailable("list", e))
            }
        }
    }

    /// Validate and store a new goal.
    ///
    /// The returned goal carries the text exactly as submitted.
    pub async fn create(&self, text: Option<&str>) -> Result<Goal, GoalError> {
        tracing::info!("storing goal");
        let text = validate_text(text).inspect_err(|_| {
            tracing::info!("invalid input, no goal text");
        })?;

        match self.store.insert(text).await {
            Ok(doc) => {
                let goal = Goal::new(doc.id, text);
                tracing::info!(goal_id = %goal.id, "stored new goal");
                self.publish(GoalEvent::goal_created(&goal)).await;
                Ok(goal)
            }
            Err(e) => {
                tracing::error!(error = %e, "error saving goal");
                Err(GoalError::unavailable("create", e))
            }
        }
    }

    /// Delete the goal with `id`. Unknown ids succeed without effect.
    pub async fn delete(&self, id: &GoalId) -> Result<(), GoalError> {
        tracing::info!(goal_id = %id, "deleting goal");
        match self.store.delete_one(id).await {
            Ok(removed) => {
                tracing::info!(goal_id = %id, removed, "deleted goal");
                self.publish(GoalEvent::goal_deleted(id, removed > 0)).await;
                Ok(())
            }
            Err(e) => {
                tracing::error!(goal_id = %id, error = %e, "error deleting goal");
                Err(GoalError::unavailable("delete", e))
            }
        }
    }

    // Sinks write files synchronously, so they run on the blocking pool.
    async fn publish(&self, event: GoalEvent) {
        if self.events.is_empty() {
            return;
        }
        let events = Arc::clone(&self.events);
        if let Err(e) = tokio::task::spawn_blocking(move || events.dispatch(&event)).await {
            tracing::warn!("event dispatch task failed: {}", e);
        }
    }
}
