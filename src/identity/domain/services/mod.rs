pub mod permission_command_service;
pub mod permission_query_service;
