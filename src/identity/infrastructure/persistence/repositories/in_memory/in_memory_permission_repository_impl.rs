use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::identity::{
    domain::model::{
        enums::identity_domain_error::IdentityDomainError,
        value_objects::{permission_name::PermissionName, username::Username},
    },
    infrastructure::persistence::repositories::permission_repository::{
        PermissionRemoval, PermissionRepository,
    },
};

pub struct InMemoryPermissionRepositoryImpl {
    permissions_by_username: RwLock<HashMap<String, BTreeSet<String>>>,
}

impl InMemoryPermissionRepositoryImpl {
    pub fn new() -> Self {
        Self::with_seed(HashMap::new())
    }

    pub fn with_seed(seed: HashMap<String, Vec<String>>) -> Self {
        Self {
            permissions_by_username: RwLock::new(
                seed.into_iter()
                    .map(|(username, permissions)| (username, permissions.into_iter().collect()))
                    .collect(),
            ),
        }
    }
}

impl Default for InMemoryPermissionRepositoryImpl {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PermissionRepository for InMemoryPermissionRepositoryImpl {
    async fn find_permissions_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Vec<String>>, IdentityDomainError> {
        let guard = self.permissions_by_username.read().await;
        Ok(guard
            .get(username.value())
            .map(|permissions| permissions.iter().cloned().collect()))
    }

    async fn add_permission(
        &self,
        username: &Username,
        permission: &PermissionName,
    ) -> Result<(), IdentityDomainError> {
        let mut guard = self.permissions_by_username.write().await;
        guard
            .entry(username.value().to_string())
            .or_default()
            .insert(permission.value().to_string());
        Ok(())
    }

    async fn remove_permission(
        &self,
        username: &Username,
        permission: &PermissionName,
    ) -> Result<PermissionRemoval, IdentityDomainError> {
        let mut guard = self.permissions_by_username.write().await;
        let removal = match guard.get_mut(username.value()) {
            None => PermissionRemoval::PrincipalMissing,
            Some(permissions) => {
                if permissions.remove(permission.value()) {
                    PermissionRemoval::Removed
                } else {
                    PermissionRemoval::NotHeld
                }
            }
        };
        Ok(removal)
    }
}
