use async_trait::async_trait;

use crate::identity::domain::model::{
    commands::{
        delete_permission_command::DeletePermissionCommand,
        put_permission_command::PutPermissionCommand,
    },
    enums::identity_domain_error::IdentityDomainError,
};

#[async_trait]
pub trait PermissionCommandService: Send + Sync {
    async fn handle_put_permission(
        &self,
        command: PutPermissionCommand,
    ) -> Result<(), IdentityDomainError>;

    /// Returns `false` when the principal did not hold the permission.
    async fn handle_delete_permission(
        &self,
        command: DeletePermissionCommand,
    ) -> Result<bool, IdentityDomainError>;
}
