use std::sync::Arc;

use async_trait::async_trait;

use crate::identity::{
    domain::{
        model::{
            commands::{
                delete_permission_command::DeletePermissionCommand,
                put_permission_command::PutPermissionCommand,
            },
            enums::identity_domain_error::IdentityDomainError,
        },
        services::permission_command_service::PermissionCommandService,
    },
    infrastructure::persistence::repositories::permission_repository::{
        PermissionRemoval, PermissionRepository,
    },
};

pub struct PermissionCommandServiceImpl {
    permission_repository: Arc<dyn PermissionRepository>,
}

impl PermissionCommandServiceImpl {
    pub fn new(permission_repository: Arc<dyn PermissionRepository>) -> Self {
        Self {
            permission_repository,
        }
    }
}

#[async_trait]
impl PermissionCommandService for PermissionCommandServiceImpl {
    async fn handle_put_permission(
        &self,
        command: PutPermissionCommand,
    ) -> Result<(), IdentityDomainError> {
        self.permission_repository
            .add_permission(command.username(), command.permission())
            .await
    }

    async fn handle_delete_permission(
        &self,
        command: DeletePermissionCommand,
    ) -> Result<bool, IdentityDomainError> {
        match self
            .permission_repository
            .remove_permission(command.username(), command.permission())
            .await?
        {
            PermissionRemoval::Removed => Ok(true),
            PermissionRemoval::NotHeld => Ok(false),
            PermissionRemoval::PrincipalMissing => Err(IdentityDomainError::PrincipalNotFound(
                command.username().value().to_string(),
            )),
        }
    }
}
