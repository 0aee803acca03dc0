use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    action_framework::domain::{
        model::entities::action_task::ActionTask,
        services::transport_action_handler::TransportActionHandler,
    },
    identity::{
        domain::{
            model::{
                enums::{identity_action::IdentityAction, identity_domain_error::IdentityDomainError},
                value_objects::username::Username,
            },
            services::permission_query_service::PermissionQueryService,
        },
        interfaces::transport::messages::get_permission_message::{
            GetPermissionRequest, GetPermissionResponse,
        },
    },
};

/// Looks up the permission set of one principal.
pub struct TransportGetPermissionAction {
    permission_service: Arc<dyn PermissionQueryService>,
}

impl TransportGetPermissionAction {
    pub fn new(permission_service: Arc<dyn PermissionQueryService>) -> Self {
        Self { permission_service }
    }
}

#[async_trait]
impl TransportActionHandler for TransportGetPermissionAction {
    const NAME: &'static str = IdentityAction::GetPermission.name();

    type Request = GetPermissionRequest;
    type Response = GetPermissionResponse;
    type Error = IdentityDomainError;

    async fn do_execute(
        &self,
        task: &ActionTask,
        request: GetPermissionRequest,
    ) -> Result<GetPermissionResponse, IdentityDomainError> {
        let username = Username::new(request.username().to_string())?;
        tracing::debug!(task_id = %task.id(), username = %username, "looking up permissions");

        let permissions = self.permission_service.lookup(&username).await?;
        Ok(GetPermissionResponse::new(permissions))
    }
}
