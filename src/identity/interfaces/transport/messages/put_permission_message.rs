use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    action_framework::domain::{
        model::enums::action_execution_error::ActionExecutionError,
        services::transport_action_handler::ActionRequest,
    },
    identity::domain::model::commands::put_permission_command::PutPermissionCommand,
};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PutPermissionRequest {
    pub username: String,
    pub permission: String,
}

impl PutPermissionRequest {
    pub fn into_command(self) -> Result<PutPermissionCommand, ActionExecutionError> {
        PutPermissionCommand::new(self.username, self.permission)
            .map_err(|e| ActionExecutionError::InvalidRequest(e.to_string()))
    }
}

impl ActionRequest for PutPermissionRequest {
    fn validate_request(&self) -> Result<(), ActionExecutionError> {
        self.clone().into_command().map(|_| ())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct PutPermissionResponse {
    pub acknowledged: bool,
}
