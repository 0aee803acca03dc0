use std::{collections::HashMap, sync::Arc};

use axum::Router;
use sqlx::PgPool;

use crate::{
    action_framework::{
        application::{
            dispatch::action_registry::ActionRegistry,
            filters::disabled_actions_filter::DisabledActionsFilter,
        },
        domain::{
            model::enums::action_dispatch_error::ActionDispatchError,
            services::action_filter::ActionFilter,
        },
    },
    config::app_config::{AppConfig, PermissionStoreKind},
    identity::{
        application::{
            command_services::permission_command_service_impl::PermissionCommandServiceImpl,
            query_services::permission_query_service_impl::PermissionQueryServiceImpl,
        },
        domain::model::value_objects::{permission_name::PermissionName, username::Username},
        infrastructure::persistence::repositories::{
            in_memory::in_memory_permission_repository_impl::InMemoryPermissionRepositoryImpl,
            permission_repository::PermissionRepository,
            postgres::sqlx_permission_repository_impl::SqlxPermissionRepositoryImpl,
        },
        interfaces::{
            rest::controllers::{
                identity_transport_rest_controller::{self, IdentityTransportRestControllerState},
                permission_rest_controller::{self, PermissionRestControllerState},
            },
            transport::identity_transport_actions::IdentityTransportActions,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_identity_router(config: &AppConfig) -> Result<Router, String> {
    let permission_repository: Arc<dyn PermissionRepository> = match config.permission_store {
        PermissionStoreKind::Memory => Arc::new(InMemoryPermissionRepositoryImpl::with_seed(
            validate_seed_permissions(&config.seed_permissions)?,
        )),
        PermissionStoreKind::Postgres => {
            let pool = PgPool::connect(&config.database_url())
                .await
                .map_err(|e| e.to_string())?;
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| e.to_string())?;
            Arc::new(SqlxPermissionRepositoryImpl::new(pool))
        }
    };

    tracing::info!(store = ?config.permission_store, "permission store ready");

    build_identity_router_with_repository(config, permission_repository).map_err(|e| e.to_string())
}

pub fn build_identity_router_with_repository(
    config: &AppConfig,
    permission_repository: Arc<dyn PermissionRepository>,
) -> Result<Router, ActionDispatchError> {
    let query_service = Arc::new(PermissionQueryServiceImpl::new_with_timeout(
        permission_repository.clone(),
        config.permission_lookup_timeout,
    ));
    let command_service = Arc::new(PermissionCommandServiceImpl::new(permission_repository));

    let filters: Vec<Arc<dyn ActionFilter>> = vec![Arc::new(DisabledActionsFilter::new(
        config.disabled_actions.clone(),
    ))];
    let actions = IdentityTransportActions::new(query_service, command_service, filters)?;

    let mut registry = ActionRegistry::builder();
    actions.register(&mut registry)?;
    let registry = Arc::new(registry.build());

    tracing::info!(actions = ?registry.action_names(), "identity transport actions registered");

    Ok(Router::new()
        .merge(permission_rest_controller::router(
            PermissionRestControllerState { actions },
        ))
        .merge(identity_transport_rest_controller::router(
            IdentityTransportRestControllerState { registry },
        )))
}

/// Runs every seed entry through `Username` and `PermissionName`. The first
/// invalid entry fails startup.
fn validate_seed_permissions(
    seed: &HashMap<String, Vec<String>>,
) -> Result<HashMap<String, Vec<String>>, String> {
    seed.iter()
        .map(|(username, permissions)| {
            let principal = Username::new(username.clone())
                .map_err(|e| format!("invalid seed principal [{username}]: {e}"))?;
            let permissions = permissions
                .iter()
                .map(|permission| {
                    PermissionName::new(permission.clone())
                        .map(String::from)
                        .map_err(|e| {
                            format!("invalid seed permission [{permission}] for [{username}]: {e}")
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok((principal.value().to_string(), permissions))
        })
        .collect()
}
