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
        interfaces::transport::messages::put_permission_message::{
            PutPermissionRequest, PutPermissionResponse,
        },
    },
};

pub struct TransportPutPermissionAction {
    permission_service: Arc<dyn PermissionCommandService>,
}

impl TransportPutPermissionAction {
    pub fn new(permission_service: Arc<dyn PermissionCommandService>) -> Self {
        Self { permission_service }
    }
}

#[async_trait]
impl TransportActionHandler for TransportPutPermissionAction {
    const NAME: &'static str = IdentityAction::PutPermission.name();

    type Request = PutPermissionRequest;
    type Response = PutPermissionResponse;
    type Error = IdentityDomainError;

    async fn do_execute(
        &self,
        task: &ActionTask,
        request: PutPermissionRequest,
    ) -> Result<PutPermissionResponse, IdentityDomainError> {
        let command = request.into_command()?;
        tracing::debug!(
            task_id = %task.id(),
            username = %command.username(),
            permission = command.permission().value(),
            "granting permission"
        );

        self.permission_service.handle_put_permission(command).await?;
        Ok(PutPermissionResponse { acknowledged: true })
    }
}
