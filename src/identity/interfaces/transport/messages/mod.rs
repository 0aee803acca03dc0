pub mod delete_permission_message;
pub mod get_permission_message;
pub mod put_permission_message;
