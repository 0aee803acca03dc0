pub mod action_catalog_resource;
pub mod identity_error_response_resource;
pub mod put_permission_request_resource;
