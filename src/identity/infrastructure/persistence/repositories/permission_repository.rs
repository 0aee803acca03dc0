use async_trait::async_trait;

use crate::identity::domain::model::{
    enums::identity_domain_error::IdentityDomainError,
    value_objects::{permission_name::PermissionName, username::Username},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PermissionRemoval {
    Removed,
    NotHeld,
    PrincipalMissing,
}

#[async_trait]
pub trait PermissionRepository: Send + Sync {
    /// `None` when no record exists for the principal.
    async fn find_permissions_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Vec<String>>, IdentityDomainError>;

    async fn add_permission(
        &self,
        username: &Username,
        permission: &PermissionName,
    ) -> Result<(), IdentityDomainError>;

    async fn remove_permission(
        &self,
        username: &Username,
        permission: &PermissionName,
    ) -> Result<PermissionRemoval, IdentityDomainError>;
}
