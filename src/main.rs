use axum::Router;
use dotenvy::dotenv;
use identity_actions::{
    config::app_config::AppConfig,
    identity::{
        build_identity_router,
        interfaces::{
            rest::resources::{
                action_catalog_resource::ActionCatalogResource,
                identity_error_response_resource::IdentityErrorResponseResource,
                put_permission_request_resource::PutPermissionRequestResource,
            },
            transport::messages::{
                delete_permission_message::DeletePermissionResponse,
                get_permission_message::GetPermissionResponse,
                put_permission_message::PutPermissionResponse,
            },
        },
    },
};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        identity_actions::identity::interfaces::rest::controllers::permission_rest_controller::get_permission,
        identity_actions::identity::interfaces::rest::controllers::permission_rest_controller::put_permission,
        identity_actions::identity::interfaces::rest::controllers::permission_rest_controller::delete_permission,
        identity_actions::identity::interfaces::rest::controllers::identity_transport_rest_controller::list_actions,
        identity_actions::identity::interfaces::rest::controllers::identity_transport_rest_controller::dispatch_action
    ),
    components(
        schemas(
            GetPermissionResponse,
            PutPermissionRequestResource,
            PutPermissionResponse,
            DeletePermissionResponse,
            ActionCatalogResource,
            IdentityErrorResponseResource
        )
    ),
    tags(
        (name = "identity", description = "Principal permission management"),
        (name = "transport", description = "Dispatch of named transport actions")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();

    let identity_router = build_identity_router(&config)
        .await
        .expect("failed to build identity router");

    let app = Router::new()
        .merge(identity_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(port = config.port, "identity action service listening");
    tracing::info!(
        "swagger UI available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
