use thiserror::Error;

use crate::models::{ActionType, Protocol};

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Unknown protocol: {0}")]
    UnknownProtocol(String),

    #[error("Unknown action type {action_type} for protocol {protocol}")]
    UnknownActionType { protocol: Protocol, action_type: String },

    #[error("Invalid data for {action_type} action: {source}")]
    InvalidData {
        action_type: ActionType,
        #[source]
        source: serde_json::Error,
    },
}

impl ActionError {
    /// Whether the error comes from a protocol/type pair that this crate does not know, as
    /// opposed to a known pair carrying malformed data.
    pub fn is_unrecognized_variant(&self) -> bool {
        matches!(self, ActionError::UnknownProtocol(_) | ActionError::UnknownActionType { .. })
    }
}
