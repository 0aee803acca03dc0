use async_trait::async_trait;
use sqlx::PgPool;

use crate::identity::{
    domain::model::{
        enums::identity_domain_error::IdentityDomainError,
        value_objects::{permission_name::PermissionName, username::Username},
    },
    infrastructure::persistence::repositories::permission_repository::{
        PermissionRemoval, PermissionRepository,
    },
};

pub struct SqlxPermissionRepositoryImpl {
    pool: PgPool,
}

impl SqlxPermissionRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn principal_exists(&self, username: &Username) -> Result<bool, IdentityDomainError> {
        let statement = r#"
            SELECT EXISTS (
                SELECT 1 FROM identity_principals WHERE username = $1
            )
        "#;

        sqlx::query_scalar::<_, bool>(statement)
            .bind(username.value())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| IdentityDomainError::ServiceUnavailable(e.to_string()))
    }
}

#[async_trait]
impl PermissionRepository for SqlxPermissionRepositoryImpl {
    async fn find_permissions_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Vec<String>>, IdentityDomainError> {
        if !self.principal_exists(username).await? {
            return Ok(None);
        }

        let statement = r#"
            SELECT permission
            FROM identity_principal_permissions
            WHERE username = $1
            ORDER BY permission
        "#;

        let rows = sqlx::query_scalar::<_, String>(statement)
            .bind(username.value())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| IdentityDomainError::ServiceUnavailable(e.to_string()))?;

        Ok(Some(rows))
    }

    async fn add_permission(
        &self,
        username: &Username,
        permission: &PermissionName,
    ) -> Result<(), IdentityDomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| IdentityDomainError::InfrastructureError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO identity_principals (username)
            VALUES ($1)
            ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(username.value())
        .execute(&mut *tx)
        .await
        .map_err(|e| IdentityDomainError::InfrastructureError(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO identity_principal_permissions (username, permission)
            VALUES ($1, $2)
            ON CONFLICT (username, permission) DO NOTHING
            "#,
        )
        .bind(username.value())
        .bind(permission.value())
        .execute(&mut *tx)
        .await
        .map_err(|e| IdentityDomainError::InfrastructureError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| IdentityDomainError::InfrastructureError(e.to_string()))
    }

    async fn remove_permission(
        &self,
        username: &Username,
        permission: &PermissionName,
    ) -> Result<PermissionRemoval, IdentityDomainError> {
        if !self.principal_exists(username).await? {
            return Ok(PermissionRemoval::PrincipalMissing);
        }

        let statement = r#"
            DELETE FROM identity_principal_permissions
            WHERE username = $1 AND permission = $2
        "#;

        let result = sqlx::query(statement)
            .bind(username.value())
            .bind(permission.value())
            .execute(&self.pool)
            .await
            .map_err(|e| IdentityDomainError::InfrastructureError(e.to_string()))?;

        Ok(if result.rows_affected() > 0 {
            PermissionRemoval::Removed
        } else {
            PermissionRemoval::NotHeld
        })
    }
}
