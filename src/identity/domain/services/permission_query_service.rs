use async_trait::async_trait;

use crate::identity::domain::model::{
    entities::permission_set::PermissionSet, enums::identity_domain_error::IdentityDomainError,
    value_objects::username::Username,
};

#[async_trait]
pub trait PermissionQueryService: Send + Sync {
    /// Fails with [`IdentityDomainError::PrincipalNotFound`] when the principal
    /// is unknown to the backing store.
    async fn lookup(&self, username: &Username) -> Result<PermissionSet, IdentityDomainError>;
}
