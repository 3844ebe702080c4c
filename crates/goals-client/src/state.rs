// state.rs — ClientState: the client's mirror of the goals list.
//
// The mirror is a tagged state rather than three loose flags:
//
//   Idle ──begin──▶ Busy ──settle(ok)──▶ Loaded
//                    │                     │
//                    └──settle(err)──▶ Failed ──begin──▶ Busy ...
//
// Busy keeps the list it started from and any banner already showing. Only a
// new failure changes the banner; a success leaves whatever is showing.

use std::fmt;

use goals_core::{Goal, GoalId};

/// Which request is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    Delete,
}

impl Operation {
    /// Banner text when the server rejects the request without a message.
    pub fn status_default(self) -> &'static str {
        match self {
            Operation::Load => "Fetching the goals failed.",
            Operation::Add => "Adding the goal failed.",
            Operation::Delete => "Deleting the goal failed.",
        }
    }

    /// Banner text when a transport/parse failure carries no message.
    pub fn fallback(self) -> &'static str {
        match self {
            Operation::Load => "Fetching goals failed - the server responded with an error.",
            Operation::Add => "Adding a goal failed - the server responded with an error.",
            Operation::Delete => "Deleting the goal failed - the server responded with an error.",
        }
    }
}

/// How a request settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The server's full list; replaces the mirror.
    Loaded(Vec<Goal>),
    /// A created goal; prepended to the mirror.
    Added(Goal),
    /// A deleted id; every matching entry leaves the mirror.
    Deleted(GoalId),
    /// Banner text for a failed request; the mirror is unchanged.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClientState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is outstanding.
    Busy {
        operation: Operation,
        goals: Vec<Goal>,
        error: Option<String>,
    },
    /// The last request succeeded. `error` is the banner left by an earlier
    /// failure, if any.
    Loaded {
        goals: Vec<Goal>,
        error: Option<String>,
    },
    /// The last request failed.
    Failed { goals: Vec<Goal>, error: String },
}

impl ClientState {
    pub fn goals(&self) -> &[Goal] {
        match self {
            ClientState::Idle => &[],
            ClientState::Busy { goals, .. }
            | ClientState::Loaded { goals, .. }
            | ClientState::Failed { goals, .. } => goals,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, ClientState::Busy { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ClientState::Idle => None,
            ClientState::Busy { error, .. } | ClientState::Loaded { error, .. } => {
                error.as_deref()
            }
            ClientState::Failed { error, .. } => Some(error),
        }
    }

    /// Enter `Busy` for `operation`, keeping the list and any banner.
    pub fn begin(self, operation: Operation) -> Self {
        let (goals, error) = match self {
            ClientState::Idle => (Vec::new(), None),
            ClientState::Busy { goals, error, .. } => (goals, error),
            ClientState::Loaded { goals, error } => (goals, error),
            ClientState::Failed { goals, error } => (goals, Some(error)),
        };
        ClientState::Busy {
            operation,
            goals,
            error,
        }
    }

    /// Apply a settled request. A failure replaces the banner; a success
    /// carries it over unchanged.
    pub fn settle(self, outcome: Outcome) -> Self {
        let (mut goals, error) = match self {
            ClientState::Idle => (Vec::new(), None),
            ClientState::Busy { goals, error, .. } | ClientState::Loaded { goals, error } => {
                (goals, error)
            }
            ClientState::Failed { goals, error } => (goals, Some(error)),
        };
        match outcome {
            Outcome::Loaded(fresh) => ClientState::Loaded {
                goals: fresh,
                error,
            },
            Outcome::Added(goal) => {
                goals.insert(0, goal);
                ClientState::Loaded { goals, error }
            }
            Outcome::Deleted(id) => {
                goals.retain(|g| g.id != id);
                ClientState::Loaded { goals, error }
            }
            Outcome::Failed(error) => ClientState::Failed { goals, error },
        }
    }

    /// What to render right now.
    pub fn view(&self) -> View<'_> {
        View {
            banner: self.error(),
            goals: (!self.is_busy()).then(|| self.goals()),
        }
    }
}

/// Render model: the banner shows whenever an error is present, the list
/// only while nothing is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View<'a> {
    pub banner: Option<&'a str>,
    pub goals: Option<&'a [Goal]>,
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(banner) = self.banner {
            writeln!(f, "Error: {}", banner)?;
        }
        match self.goals {
            Some([]) => writeln!(f, "No goals found.")?,
            Some(goals) => {
                for g in goals {
                    writeln!(f, "{:<34} {}", g.id, g.text)?;
                }
            }
            None => writeln!(f, "Loading...")?,
        }
        Ok(())
    }
}
