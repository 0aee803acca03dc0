use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    action_framework::domain::{
        model::entities::action_task::ActionTask,
        services::transport_action_handler::TransportActionHandler,
    },
    identity::{
        domain::{
            model::enums::{
                identity_action::IdentityAction, identity_domain_error::IdentityDomainError,
            },
            services::permission_command_service::PermissionCommandService,
        },
        interfaces::transport::messages::delete_permission_message::{
            DeletePermissionRequest, DeletePermissionResponse,
        },
    },
};

pub struct TransportDeletePermissionAction {
    permission_service: Arc<dyn PermissionCommandService>,
}

impl TransportDeletePermissionAction {
    pub fn new(permission_service: Arc<dyn PermissionCommandService>) -> Self {
        Self { permission_service }
    }
}

#[async_trait]
impl TransportActionHandler for TransportDeletePermissionAction {
    const NAME: &'static str = IdentityAction::DeletePermission.name();

    type Request = DeletePermissionRequest;
    type Response = DeletePermissionResponse;
    type Error = IdentityDomainError;

    async fn do_execute(
        &self,
        task: &ActionTask,
        request: DeletePermissionRequest,
    ) -> Result<DeletePermissionResponse, IdentityDomainError> {
        let command = request.into_command()?;
        tracing::debug!(
            task_id = %task.id(),
            username = %command.username(),
            permission = command.permission().value(),
            "revoking permission"
        );

        let acknowledged = self
            .permission_service
            .handle_delete_permission(command)
            .await?;
        Ok(DeletePermissionResponse { acknowledged })
    }
}
