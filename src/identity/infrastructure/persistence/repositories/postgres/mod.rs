pub mod sqlx_permission_repository_impl;
