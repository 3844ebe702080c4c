// error.rs — Client-side failures and the banner text they produce.

use thiserror::Error;

use crate::state::Operation;

/// Why a request against the goals API failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request could not be sent or no response arrived.
    #[error("{0}")]
    Network(String),

    /// The response body was not the expected JSON.
    #[error("{0}")]
    Parse(String),

    /// The server answered with a non-success status.
    #[error("server responded with {status}")]
    Status { status: u16, message: Option<String> },

    /// The configured server URL cannot address the API.
    #[error("invalid server url: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// The text shown in the error banner when `operation` failed this way.
    ///
    /// A server-provided message wins; otherwise the operation's default for
    /// status failures, or the underlying failure's own message for anything
    /// else, falling back to the operation's generic text when that is empty.
    pub fn banner(&self, operation: Operation) -> String {
        match self {
            ClientError::Status {
                message: Some(m), ..
            } if !m.is_empty() => m.clone(),
            ClientError::Status { .. } => operation.status_default().to_string(),
            other => {
                let message = other.to_string();
                if message.is_empty() {
                    operation.fallback().to_string()
                } else {
                    message
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins() {
        let err = ClientError::Status {
            status: 500,
            message: Some("Failed to load goals.".into()),
        };
        assert_eq!(err.banner(Operation::Load), "Failed to load goals.");
    }

    #[test]
    fn status_without_message_uses_operation_default() {
        let err = ClientError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.banner(Operation::Load), "Fetching the goals failed.");
        assert_eq!(err.banner(Operation::Add), "Adding the goal failed.");
        assert_eq!(err.banner(Operation::Delete), "Deleting the goal failed.");

        let blank = ClientError::Status {
            status: 422,
            message: Some(String::new()),
        };
        assert_eq!(blank.banner(Operation::Add), "Adding the goal failed.");
    }

    #[test]
    fn transport_failures_use_their_own_message_or_fallback() {
        let err = ClientError::Parse("expected value at line 1 column 1".into());
        assert_eq!(err.banner(Operation::Add), "expected value at line 1 column 1");

        let empty = ClientError::Network(String::new());
        assert_eq!(
            empty.banner(Operation::Load),
            "Fetching goals failed - the server responded with an error."
        );
        assert_eq!(
            empty.banner(Operation::Delete),
            "Deleting the goal failed - the server responded with an error."
        );
    }
}
