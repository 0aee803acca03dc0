use std::error::Error as StdError;

use thiserror::Error;

use super::action_execution_error::ActionExecutionError;

#[derive(Debug, Error)]
pub enum ActionDispatchError {
    #[error("action name is invalid: {0}")]
    InvalidActionName(String),

    #[error("action [{0}] is already registered")]
    DuplicateAction(String),

    #[error("no handler registered for action [{0}]")]
    UnknownAction(String),

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("response encoding failed: {0}")]
    ResponseEncoding(String),

    /// The handler's own error, kept as-is.
    #[error(transparent)]
    Failed(Box<dyn StdError + Send + Sync>),
}

impl ActionDispatchError {
    /// Returns the handler error carried by [`ActionDispatchError::Failed`]
    /// when it is of type `E`.
    pub fn failure_cause<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        match self {
            Self::Failed(cause) => cause.downcast_ref::<E>(),
            _ => None,
        }
    }
}

impl From<ActionExecutionError> for ActionDispatchError {
    fn from(error: ActionExecutionError) -> Self {
        Self::Failed(Box::new(error))
    }
}
