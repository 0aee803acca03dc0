use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::action_framework::domain::model::{
    enums::{action_execution_error::ActionExecutionError, action_task_state::ActionTaskState},
    value_objects::action_name::ActionName,
};

/// Context of a single `execute` call. Each call owns its own task; the
/// executor keeps none of them.
#[derive(Clone, Debug)]
pub struct ActionTask {
    id: Uuid,
    action_name: ActionName,
    state: ActionTaskState,
    started_at: DateTime<Utc>,
}

impl ActionTask {
    pub fn new(action_name: ActionName) -> Self {
        Self {
            id: Uuid::now_v7(),
            action_name,
            state: ActionTaskState::Created,
            started_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn action_name(&self) -> &ActionName {
        &self.action_name
    }
    pub fn state(&self) -> ActionTaskState {
        self.state
    }
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn mark_awaiting_service(&mut self) -> Result<(), ActionExecutionError> {
        self.transition(ActionTaskState::AwaitingService)
    }

    pub fn mark_completed(&mut self) -> Result<(), ActionExecutionError> {
        self.transition(ActionTaskState::Completed)
    }

    fn transition(&mut self, next: ActionTaskState) -> Result<(), ActionExecutionError> {
        if !self.state.can_transition_to(next) {
            return Err(ActionExecutionError::IllegalTransition {
                from: self.state,
                to: next,
            });
        }
        self.state = next;
        Ok(())
    }
}
