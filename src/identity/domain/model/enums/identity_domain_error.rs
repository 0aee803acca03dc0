use thiserror::Error;

use crate::action_framework::domain::model::enums::action_execution_error::ActionExecutionError;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IdentityDomainError {
    #[error("username is invalid")]
    InvalidUsername,

    #[error("permission name is invalid")]
    InvalidPermissionName,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("principal [{0}] not found")]
    PrincipalNotFound(String),

    #[error("action rejected: {0}")]
    Rejected(String),

    #[error("action aborted: {0}")]
    Aborted(String),

    #[error("permission service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}

impl From<ActionExecutionError> for IdentityDomainError {
    fn from(error: ActionExecutionError) -> Self {
        match error {
            ActionExecutionError::InvalidRequest(message) => Self::InvalidRequest(message),
            ActionExecutionError::Rejected(message) => Self::Rejected(message),
            ActionExecutionError::Aborted(message) => Self::Aborted(message),
            transition @ ActionExecutionError::IllegalTransition { .. } => {
                Self::Aborted(transition.to_string())
            }
        }
    }
}
