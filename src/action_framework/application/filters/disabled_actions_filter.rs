use std::collections::HashSet;

use async_trait::async_trait;

use crate::action_framework::domain::{
    model::{
        entities::action_task::ActionTask, enums::action_execution_error::ActionExecutionError,
    },
    services::action_filter::ActionFilter,
};

/// Rejects every task whose action name was switched off by configuration.
pub struct DisabledActionsFilter {
    disabled_actions: HashSet<String>,
}

impl DisabledActionsFilter {
    pub fn new(disabled_actions: impl IntoIterator<Item = String>) -> Self {
        Self {
            disabled_actions: disabled_actions
                .into_iter()
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }

    pub fn is_disabled(&self, action_name: &str) -> bool {
        self.disabled_actions.contains(action_name)
    }
}

#[async_trait]
impl ActionFilter for DisabledActionsFilter {
    async fn apply(&self, task: &ActionTask) -> Result<(), ActionExecutionError> {
        if self.is_disabled(task.action_name().value()) {
            return Err(ActionExecutionError::Rejected(format!(
                "action [{}] is disabled",
                task.action_name()
            )));
        }
        Ok(())
    }
}
