use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::Value;

use crate::{
    action_framework::{
        application::dispatch::action_registry::ActionRegistry,
        domain::model::enums::action_dispatch_error::ActionDispatchError,
    },
    identity::{
        domain::model::enums::identity_domain_error::IdentityDomainError,
        interfaces::rest::{
            controllers::permission_rest_controller::domain_error_status,
            resources::{
                action_catalog_resource::ActionCatalogResource,
                identity_error_response_resource::IdentityErrorResponseResource,
            },
        },
    },
};

#[derive(Clone)]
pub struct IdentityTransportRestControllerState {
    pub registry: Arc<ActionRegistry>,
}

pub fn router(state: IdentityTransportRestControllerState) -> Router {
    Router::new()
        .route("/_transport/actions", get(list_actions))
        .route("/_transport/actions/*action_name", post(dispatch_action))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/_transport/actions",
    tag = "transport",
    responses(
        (status = 200, description = "Registered action names", body = ActionCatalogResource)
    )
)]
pub async fn list_actions(
    State(state): State<IdentityTransportRestControllerState>,
) -> Json<ActionCatalogResource> {
    Json(ActionCatalogResource {
        actions: state.registry.action_names(),
    })
}

/// Decodes the JSON body as the named action's request and returns the action
/// response verbatim.
#[utoipa::path(
    post,
    path = "/_transport/actions/{action_name}",
    tag = "transport",
    params(("action_name" = String, Path, description = "Registered action name")),
    responses(
        (status = 200, description = "Action response"),
        (status = 400, description = "Malformed or invalid request", body = IdentityErrorResponseResource),
        (status = 404, description = "Unknown action or principal", body = IdentityErrorResponseResource),
        (status = 403, description = "Action disabled", body = IdentityErrorResponseResource)
    )
)]
pub async fn dispatch_action(
    State(state): State<IdentityTransportRestControllerState>,
    Path(action_name): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<IdentityErrorResponseResource>)> {
    let response = state
        .registry
        .dispatch_and_wait(&action_name, payload)
        .await
        .map_err(map_dispatch_error)?;

    Ok(Json(response))
}

fn map_dispatch_error(
    error: ActionDispatchError,
) -> (StatusCode, Json<IdentityErrorResponseResource>) {
    let status = match &error {
        ActionDispatchError::InvalidActionName(_) | ActionDispatchError::UnknownAction(_) => {
            StatusCode::NOT_FOUND
        }
        ActionDispatchError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
        ActionDispatchError::DuplicateAction(_) | ActionDispatchError::ResponseEncoding(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ActionDispatchError::Failed(_) => error
            .failure_cause::<IdentityDomainError>()
            .map(domain_error_status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
    };

    (
        status,
        Json(IdentityErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
