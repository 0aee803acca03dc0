pub mod delete_permission_command;
pub mod put_permission_command;
