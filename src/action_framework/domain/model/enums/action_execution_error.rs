use thiserror::Error;

use super::action_task_state::ActionTaskState;

/// Failures raised by the executor itself, before or around the handler.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ActionExecutionError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("action rejected: {0}")]
    Rejected(String),

    #[error("action aborted: {0}")]
    Aborted(String),

    #[error("task cannot move from {from} to {to}")]
    IllegalTransition {
        from: ActionTaskState,
        to: ActionTaskState,
    },
}
