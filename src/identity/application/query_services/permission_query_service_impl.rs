use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::identity::{
    domain::{
        model::{
            entities::permission_set::PermissionSet,
            enums::identity_domain_error::IdentityDomainError, value_objects::username::Username,
        },
        services::permission_query_service::PermissionQueryService,
    },
    infrastructure::persistence::repositories::permission_repository::PermissionRepository,
};

pub struct PermissionQueryServiceImpl {
    permission_repository: Arc<dyn PermissionRepository>,
    lookup_timeout: Duration,
}

impl PermissionQueryServiceImpl {
    pub fn new(permission_repository: Arc<dyn PermissionRepository>) -> Self {
        Self::new_with_timeout(permission_repository, Duration::from_secs(5))
    }

    pub fn new_with_timeout(
        permission_repository: Arc<dyn PermissionRepository>,
        lookup_timeout: Duration,
    ) -> Self {
        Self {
            permission_repository,
            lookup_timeout,
        }
    }
}

#[async_trait]
impl PermissionQueryService for PermissionQueryServiceImpl {
    async fn lookup(&self, username: &Username) -> Result<PermissionSet, IdentityDomainError> {
        let stored = tokio::time::timeout(
            self.lookup_timeout,
            self.permission_repository
                .find_permissions_by_username(username),
        )
        .await
        .map_err(|_| {
            IdentityDomainError::ServiceUnavailable("permission lookup timed out".to_string())
        })??;

        let Some(values) = stored else {
            return Err(IdentityDomainError::PrincipalNotFound(
                username.value().to_string(),
            ));
        };

        PermissionSet::from_values(values).map_err(|_| {
            IdentityDomainError::InfrastructureError(format!(
                "stored permissions for [{username}] are invalid"
            ))
        })
    }
}
