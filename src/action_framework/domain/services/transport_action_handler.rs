use std::error::Error as StdError;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::action_framework::domain::model::{
    entities::action_task::ActionTask, enums::action_execution_error::ActionExecutionError,
};

pub trait ActionRequest: DeserializeOwned + Send + 'static {
    /// Checked synchronously before the handler runs.
    fn validate_request(&self) -> Result<(), ActionExecutionError>;
}

pub trait ActionResponse: Serialize + Send + 'static {}

impl<T> ActionResponse for T where T: Serialize + Send + 'static {}

#[async_trait]
pub trait TransportActionHandler: Send + Sync + 'static {
    const NAME: &'static str;

    type Request: ActionRequest;
    type Response: ActionResponse;
    type Error: StdError + From<ActionExecutionError> + Send + Sync + 'static;

    async fn do_execute(
        &self,
        task: &ActionTask,
        request: Self::Request,
    ) -> Result<Self::Response, Self::Error>;
}
