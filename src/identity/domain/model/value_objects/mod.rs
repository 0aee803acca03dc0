pub mod permission_name;
pub mod username;
