pub mod in_memory;
pub mod permission_repository;
pub mod postgres;
