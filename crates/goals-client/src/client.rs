// client.rs — GoalClient: drives the backend and reconciles the mirror.
//
// Every operation enters Busy, awaits one request, and settles. Nothing
// here retries; a failure's banner stays up until another failure replaces it.

use goals_core::{Goal, GoalId};

use crate::backend::GoalsBackend;
use crate::state::{ClientState, Operation, Outcome, View};

pub struct GoalClient<B> {
    backend: B,
    state: ClientState,
}

impl<B: GoalsBackend> GoalClient<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: ClientState::Idle,
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn view(&self) -> View<'_> {
        self.state.view()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replace the mirror with the server's list.
    pub async fn load(&mut self) -> &ClientState {
        self.begin(Operation::Load);
        let outcome = match self.backend.list().await {
            Ok(goals) => Outcome::Loaded(goals),
            Err(e) => Outcome::Failed(e.banner(Operation::Load)),
        };
        self.settle(outcome)
    }

    /// Create a goal and prepend it with the id the server assigned and the
    /// text as typed here.
    pub async fn add_goal(&mut self, text: &str) -> &ClientState {
        self.begin(Operation::Add);
        let outcome = match self.backend.create(text).await {
            Ok(id) => Outcome::Added(Goal::new(id, text)),
            Err(e) => Outcome::Failed(e.banner(Operation::Add)),
        };
        self.settle(outcome)
    }

    /// Delete a goal and drop it from the mirror.
    pub async fn delete_goal(&mut self, id: &GoalId) -> &ClientState {
        self.begin(Operation::Delete);
        let outcome = match self.backend.delete(id).await {
            Ok(()) => Outcome::Deleted(id.clone()),
            Err(e) => Outcome::Failed(e.banner(Operation::Delete)),
        };
        self.settle(outcome)
    }

    fn begin(&mut self, operation: Operation) {
        self.state = std::mem::take(&mut self.state).begin(operation);
    }

    fn settle(&mut self, outcome: Outcome) -> &ClientState {
        if let Outcome::Failed(banner) = &outcome {
            tracing::warn!(banner = banner.as_str(), "goals request failed");
        }
        self.state = std::mem::take(&mut self.state).settle(outcome);
        &self.state
    }
}
