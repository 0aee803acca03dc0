pub mod identity_transport_rest_controller;
pub mod permission_rest_controller;
