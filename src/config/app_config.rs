use std::{collections::HashMap, str::FromStr, time::Duration};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PermissionStoreKind {
    Memory,
    Postgres,
}

impl FromStr for PermissionStoreKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "postgres" => Ok(Self::Postgres),
            other => Err(format!("unsupported permission store [{other}]")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub permission_store: PermissionStoreKind,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub permission_lookup_timeout: Duration,
    pub disabled_actions: Vec<String>,
    pub seed_permissions: HashMap<String, Vec<String>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8081,
            permission_store: PermissionStoreKind::Memory,
            postgres_host: "127.0.0.1".to_string(),
            postgres_port: 5432,
            postgres_user: "postgres".to_string(),
            postgres_password: "admin".to_string(),
            postgres_database: "identity".to_string(),
            permission_lookup_timeout: Duration::from_millis(5000),
            disabled_actions: Vec::new(),
            seed_permissions: HashMap::new(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            permission_store: std::env::var("PERMISSION_STORE")
                .ok()
                .and_then(|v| match v.parse() {
                    Ok(kind) => Some(kind),
                    Err(error) => {
                        tracing::warn!(%error, "falling back to in-memory permission store");
                        None
                    }
                })
                .unwrap_or(defaults.permission_store),
            postgres_host: std::env::var("POSTGRES_HOST").unwrap_or(defaults.postgres_host),
            postgres_port: std::env::var("POSTGRES_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.postgres_port),
            postgres_user: std::env::var("POSTGRES_USER").unwrap_or(defaults.postgres_user),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or(defaults.postgres_password),
            postgres_database: std::env::var("POSTGRES_DATABASE")
                .unwrap_or(defaults.postgres_database),
            permission_lookup_timeout: std::env::var("PERMISSION_LOOKUP_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.permission_lookup_timeout),
            disabled_actions: std::env::var("IDENTITY_DISABLED_ACTIONS")
                .map(|v| parse_list(&v))
                .unwrap_or_default(),
            seed_permissions: std::env::var("IDENTITY_SEED_PERMISSIONS")
                .map(|v| parse_seed_permissions(&v))
                .unwrap_or_default(),
        }
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_database
        )
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses `alice=read,write;bob=read`. Entries without `=` or with an empty
/// username are skipped.
pub fn parse_seed_permissions(value: &str) -> HashMap<String, Vec<String>> {
    value
        .split(';')
        .filter_map(|entry| {
            let (username, permissions) = entry.split_once('=')?;
            let username = username.trim();
            if username.is_empty() {
                tracing::warn!(entry, "ignoring seed entry without username");
                return None;
            }
            Some((username.to_string(), parse_list(permissions)))
        })
        .collect()
}
