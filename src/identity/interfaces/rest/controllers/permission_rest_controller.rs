use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};
use validator::Validate;

use crate::{
    action_framework::application::listeners::oneshot_action_listener::listener_future,
    identity::{
        domain::model::enums::identity_domain_error::IdentityDomainError,
        interfaces::{
            rest::resources::{
                identity_error_response_resource::IdentityErrorResponseResource,
                put_permission_request_resource::PutPermissionRequestResource,
            },
            transport::{
                identity_transport_actions::IdentityTransportActions,
                messages::{
                    delete_permission_message::{DeletePermissionRequest, DeletePermissionResponse},
                    get_permission_message::{GetPermissionRequest, GetPermissionResponse},
                    put_permission_message::{PutPermissionRequest, PutPermissionResponse},
                },
            },
        },
    },
};

type ErrorResponse = (StatusCode, Json<IdentityErrorResponseResource>);

#[derive(Clone)]
pub struct PermissionRestControllerState {
    pub actions: IdentityTransportActions,
}

pub fn router(state: PermissionRestControllerState) -> Router {
    Router::new()
        .route(
            "/_identity/api/permissions/:username",
            get(get_permission).put(put_permission),
        )
        .route(
            "/_identity/api/permissions/:username/:permission",
            delete(delete_permission),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/_identity/api/permissions/{username}",
    tag = "identity",
    params(("username" = String, Path, description = "Principal name")),
    responses(
        (status = 200, description = "Permissions held by the principal", body = GetPermissionResponse),
        (status = 400, description = "Invalid username", body = IdentityErrorResponseResource),
        (status = 404, description = "Principal not found", body = IdentityErrorResponseResource),
        (status = 503, description = "Permission store unavailable", body = IdentityErrorResponseResource)
    )
)]
pub async fn get_permission(
    State(state): State<PermissionRestControllerState>,
    Path(username): Path<String>,
) -> Result<Json<GetPermissionResponse>, ErrorResponse> {
    let request = GetPermissionRequest::new(username).map_err(map_domain_error)?;

    let (listener, response) = listener_future();
    state.actions.get_permission.execute(request, listener);

    let response = response.await.map_err(map_domain_error)?;
    Ok(Json(response))
}

#[utoipa::path(
    put,
    path = "/_identity/api/permissions/{username}",
    tag = "identity",
    params(("username" = String, Path, description = "Principal name")),
    request_body = PutPermissionRequestResource,
    responses(
        (status = 200, description = "Permission granted", body = PutPermissionResponse),
        (status = 400, description = "Invalid request", body = IdentityErrorResponseResource),
        (status = 500, description = "Infrastructure error", body = IdentityErrorResponseResource)
    )
)]
pub async fn put_permission(
    State(state): State<PermissionRestControllerState>,
    Path(username): Path<String>,
    Json(request): Json<PutPermissionRequestResource>,
) -> Result<Json<PutPermissionResponse>, ErrorResponse> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(IdentityErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let (listener, response) = listener_future();
    state.actions.put_permission.execute(
        PutPermissionRequest {
            username,
            permission: request.permission,
        },
        listener,
    );

    let response = response.await.map_err(map_domain_error)?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/_identity/api/permissions/{username}/{permission}",
    tag = "identity",
    params(
        ("username" = String, Path, description = "Principal name"),
        ("permission" = String, Path, description = "Permission to revoke")
    ),
    responses(
        (status = 200, description = "Permission revoked, or not held", body = DeletePermissionResponse),
        (status = 400, description = "Invalid request", body = IdentityErrorResponseResource),
        (status = 404, description = "Principal not found", body = IdentityErrorResponseResource)
    )
)]
pub async fn delete_permission(
    State(state): State<PermissionRestControllerState>,
    Path((username, permission)): Path<(String, String)>,
) -> Result<Json<DeletePermissionResponse>, ErrorResponse> {
    let (listener, response) = listener_future();
    state.actions.delete_permission.execute(
        DeletePermissionRequest {
            username,
            permission,
        },
        listener,
    );

    let response = response.await.map_err(map_domain_error)?;
    Ok(Json(response))
}

pub fn domain_error_status(error: &IdentityDomainError) -> StatusCode {
    match error {
        IdentityDomainError::InvalidUsername
        | IdentityDomainError::InvalidPermissionName
        | IdentityDomainError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        IdentityDomainError::PrincipalNotFound(_) => StatusCode::NOT_FOUND,
        IdentityDomainError::Rejected(_) => StatusCode::FORBIDDEN,
        IdentityDomainError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        IdentityDomainError::Aborted(_) | IdentityDomainError::InfrastructureError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn map_domain_error(error: IdentityDomainError) -> ErrorResponse {
    (
        domain_error_status(&error),
        Json(IdentityErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
