pub mod permission_set;
