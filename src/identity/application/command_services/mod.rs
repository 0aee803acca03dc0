pub mod permission_command_service_impl;
