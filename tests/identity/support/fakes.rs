use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use identity_actions::{
    action_framework::domain::services::action_listener::ActionListener,
    identity::{
        domain::{
            model::{
                entities::permission_set::PermissionSet,
                enums::identity_domain_error::IdentityDomainError,
                value_objects::{permission_name::PermissionName, username::Username},
            },
            services::permission_query_service::PermissionQueryService,
        },
        infrastructure::persistence::repositories::permission_repository::{
            PermissionRemoval, PermissionRepository,
        },
    },
};

#[derive(Default)]
struct FakeQueryState {
    lookup_calls: usize,
    permissions_by_username: HashMap<String, Vec<String>>,
    delays_by_username: HashMap<String, Duration>,
    failures_by_username: HashMap<String, IdentityDomainError>,
}

pub struct FakePermissionQueryService {
    state: Mutex<FakeQueryState>,
}

impl FakePermissionQueryService {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeQueryState::default()),
        }
    }

    pub fn set_permissions(&self, username: &str, permissions: &[&str]) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .permissions_by_username
            .insert(
                username.to_string(),
                permissions.iter().map(|p| p.to_string()).collect(),
            );
    }

    pub fn set_delay(&self, username: &str, delay: Duration) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .delays_by_username
            .insert(username.to_string(), delay);
    }

    pub fn set_failure(&self, username: &str, error: IdentityDomainError) {
        self.state
            .lock()
            .expect("mutex poisoned")
            .failures_by_username
            .insert(username.to_string(), error);
    }

    pub fn lookup_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").lookup_calls
    }
}

#[async_trait]
impl PermissionQueryService for FakePermissionQueryService {
    async fn lookup(&self, username: &Username) -> Result<PermissionSet, IdentityDomainError> {
        let (delay, outcome) = {
            let mut state = self.state.lock().expect("mutex poisoned");
            state.lookup_calls += 1;

            let outcome = match state.failures_by_username.get(username.value()) {
                Some(error) => Err(error.clone()),
                None => match state.permissions_by_username.get(username.value()) {
                    Some(values) => PermissionSet::from_values(values.clone()),
                    None => Err(IdentityDomainError::PrincipalNotFound(
                        username.value().to_string(),
                    )),
                },
            };
            (state.delays_by_username.get(username.value()).copied(), outcome)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        outcome
    }
}

#[derive(Default)]
struct FakeRepositoryState {
    find_calls: usize,
    stored: HashMap<String, Vec<String>>,
    delay: Option<Duration>,
    failure: Option<IdentityDomainError>,
}

pub struct FakePermissionRepository {
    state: Mutex<FakeRepositoryState>,
}

impl FakePermissionRepository {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeRepositoryState::default()),
        }
    }

    pub fn set_stored(&self, username: &str, permissions: &[&str]) {
        self.state.lock().expect("mutex poisoned").stored.insert(
            username.to_string(),
            permissions.iter().map(|p| p.to_string()).collect(),
        );
    }

    pub fn set_delay(&self, delay: Duration) {
        self.state.lock().expect("mutex poisoned").delay = Some(delay);
    }

    pub fn set_failure(&self, error: IdentityDomainError) {
        self.state.lock().expect("mutex poisoned").failure = Some(error);
    }

    pub fn find_calls(&self) -> usize {
        self.state.lock().expect("mutex poisoned").find_calls
    }
}

#[async_trait]
impl PermissionRepository for FakePermissionRepository {
    async fn find_permissions_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Vec<String>>, IdentityDomainError> {
        let (delay, outcome) = {
            let mut state = self.state.lock().expect("mutex poisoned");
            state.find_calls += 1;
            let outcome = match &state.failure {
                Some(error) => Err(error.clone()),
                None => Ok(state.stored.get(username.value()).cloned()),
            };
            (state.delay, outcome)
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        outcome
    }

    async fn add_permission(
        &self,
        username: &Username,
        permission: &PermissionName,
    ) -> Result<(), IdentityDomainError> {
        self.state
            .lock()
            .expect("mutex poisoned")
            .stored
            .entry(username.value().to_string())
            .or_default()
            .push(permission.value().to_string());
        Ok(())
    }

    async fn remove_permission(
        &self,
        username: &Username,
        permission: &PermissionName,
    ) -> Result<PermissionRemoval, IdentityDomainError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        let Some(values) = state.stored.get_mut(username.value()) else {
            return Ok(PermissionRemoval::PrincipalMissing);
        };
        let before = values.len();
        values.retain(|value| value != permission.value());
        Ok(if values.len() < before {
            PermissionRemoval::Removed
        } else {
            PermissionRemoval::NotHeld
        })
    }
}

pub type Outcomes<T, E> = Arc<Mutex<Vec<Result<T, E>>>>;

pub struct RecordingListener<T, E> {
    outcomes: Outcomes<T, E>,
}

impl<T, E> RecordingListener<T, E> {
    pub fn new() -> (Self, Outcomes<T, E>) {
        let outcomes = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                outcomes: outcomes.clone(),
            },
            outcomes,
        )
    }
}

impl<T, E> ActionListener<T, E> for RecordingListener<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn on_response(self: Box<Self>, response: T) {
        self.outcomes
            .lock()
            .expect("mutex poisoned")
            .push(Ok(response));
    }

    fn on_failure(self: Box<Self>, error: E) {
        self.outcomes
            .lock()
            .expect("mutex poisoned")
            .push(Err(error));
    }
}
