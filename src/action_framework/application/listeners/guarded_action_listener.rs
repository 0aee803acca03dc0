use crate::action_framework::domain::{
    model::enums::action_execution_error::ActionExecutionError,
    services::action_listener::ActionListener,
};

const DROPPED_BEFORE_COMPLETION: &str = "action task dropped before completion";

/// Holds a listener until the task completes it. Dropped unfinished (the task
/// was cancelled or its runtime shut down), it fails the listener with
/// `Aborted` instead.
pub struct GuardedActionListener<T, E>
where
    T: 'static,
    E: From<ActionExecutionError> + 'static,
{
    delegate: Option<Box<dyn ActionListener<T, E>>>,
}

impl<T, E> GuardedActionListener<T, E>
where
    T: 'static,
    E: From<ActionExecutionError> + 'static,
{
    pub fn new(delegate: Box<dyn ActionListener<T, E>>) -> Self {
        Self {
            delegate: Some(delegate),
        }
    }

    pub fn complete(mut self, result: Result<T, E>) {
        if let Some(delegate) = self.delegate.take() {
            delegate.complete(result);
        }
    }
}

impl<T, E> Drop for GuardedActionListener<T, E>
where
    T: 'static,
    E: From<ActionExecutionError> + 'static,
{
    fn drop(&mut self) {
        if let Some(delegate) = self.delegate.take() {
            tracing::warn!(reason = DROPPED_BEFORE_COMPLETION, "listener completed by guard");
            delegate.on_failure(E::from(ActionExecutionError::Aborted(
                DROPPED_BEFORE_COMPLETION.to_string(),
            )));
        }
    }
}
