use async_trait::async_trait;

use crate::action_framework::domain::model::{
    entities::action_task::ActionTask, enums::action_execution_error::ActionExecutionError,
};

#[async_trait]
pub trait ActionFilter: Send + Sync {
    async fn apply(&self, task: &ActionTask) -> Result<(), ActionExecutionError>;
}
