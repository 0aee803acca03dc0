use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    action_framework::domain::{
        model::enums::action_execution_error::ActionExecutionError,
        services::transport_action_handler::ActionRequest,
    },
    identity::domain::model::{
        entities::permission_set::PermissionSet,
        enums::identity_domain_error::IdentityDomainError, value_objects::username::Username,
    },
};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GetPermissionRequest {
    username: String,
}

impl GetPermissionRequest {
    pub fn new(username: String) -> Result<Self, IdentityDomainError> {
        let username = Username::new(username)?;
        Ok(Self {
            username: username.value().to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl ActionRequest for GetPermissionRequest {
    fn validate_request(&self) -> Result<(), ActionExecutionError> {
        Username::new(self.username.clone())
            .map(|_| ())
            .map_err(|e| ActionExecutionError::InvalidRequest(e.to_string()))
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct GetPermissionResponse {
    #[schema(value_type = Vec<String>)]
    permissions: PermissionSet,
}

impl GetPermissionResponse {
    pub fn new(permissions: PermissionSet) -> Self {
        Self { permissions }
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }
}
