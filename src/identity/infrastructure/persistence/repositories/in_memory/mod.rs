pub mod in_memory_permission_repository_impl;
