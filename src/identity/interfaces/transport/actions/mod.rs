pub mod transport_delete_permission_action;
pub mod transport_get_permission_action;
pub mod transport_put_permission_action;
