use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    action_framework::domain::{
        model::enums::action_execution_error::ActionExecutionError,
        services::transport_action_handler::ActionRequest,
    },
    identity::domain::model::commands::delete_permission_command::DeletePermissionCommand,
};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DeletePermissionRequest {
    pub username: String,
    pub permission: String,
}

impl DeletePermissionRequest {
    pub fn into_command(self) -> Result<DeletePermissionCommand, ActionExecutionError> {
        DeletePermissionCommand::new(self.username, self.permission)
            .map_err(|e| ActionExecutionError::InvalidRequest(e.to_string()))
    }
}

impl ActionRequest for DeletePermissionRequest {
    fn validate_request(&self) -> Result<(), ActionExecutionError> {
        self.clone().into_command().map(|_| ())
    }
}

/// `acknowledged` is `false` when the principal did not hold the permission.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct DeletePermissionResponse {
    pub acknowledged: bool,
}
