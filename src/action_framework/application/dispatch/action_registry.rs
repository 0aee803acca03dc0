use std::{collections::HashMap, sync::Arc};

use serde_json::Value;
use uuid::Uuid;

use crate::action_framework::{
    application::{
        dispatch::transport_action_executor::TransportActionExecutor,
        listeners::{
            mapped_action_listener::MappedActionListener,
            oneshot_action_listener::listener_future,
        },
    },
    domain::{
        model::{
            enums::action_dispatch_error::ActionDispatchError,
            value_objects::action_name::ActionName,
        },
        services::{action_listener::ActionListener, transport_action_handler::TransportActionHandler},
    },
};

pub type JsonActionListener = Box<dyn ActionListener<Value, ActionDispatchError>>;

/// A registered action seen through its JSON boundary.
pub trait RegisteredAction: Send + Sync {
    fn action_name(&self) -> &ActionName;

    /// Decodes `payload` into the action's request type and executes it.
    /// Returns `None` when the payload could not be decoded; `listener` has
    /// been completed with the decode error in that case.
    fn dispatch(&self, payload: Value, listener: JsonActionListener) -> Option<Uuid>;
}

impl<H> RegisteredAction for TransportActionExecutor<H>
where
    H: TransportActionHandler,
{
    fn action_name(&self) -> &ActionName {
        TransportActionExecutor::action_name(self)
    }

    fn dispatch(&self, payload: Value, listener: JsonActionListener) -> Option<Uuid> {
        let request = match serde_json::from_value::<H::Request>(payload) {
            Ok(request) => request,
            Err(error) => {
                listener.on_failure(ActionDispatchError::MalformedRequest(error.to_string()));
                return None;
            }
        };

        let listener = MappedActionListener::new(
            listener,
            |response: H::Response| {
                serde_json::to_value(response)
                    .map_err(|e| ActionDispatchError::ResponseEncoding(e.to_string()))
            },
            |error: H::Error| ActionDispatchError::Failed(Box::new(error)),
        );

        Some(self.execute(request, listener))
    }
}

#[derive(Default)]
pub struct ActionRegistryBuilder {
    actions: HashMap<ActionName, Arc<dyn RegisteredAction>>,
}

impl ActionRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<H>(
        &mut self,
        executor: Arc<TransportActionExecutor<H>>,
    ) -> Result<&mut Self, ActionDispatchError>
    where
        H: TransportActionHandler,
    {
        let name = executor.action_name().clone();
        if self.actions.contains_key(&name) {
            return Err(ActionDispatchError::DuplicateAction(name.value().to_string()));
        }

        tracing::debug!(action = %name, "transport action registered");
        self.actions.insert(name, executor);
        Ok(self)
    }

    pub fn build(self) -> ActionRegistry {
        ActionRegistry {
            actions: self.actions,
        }
    }
}

/// Name to handler routing table. Immutable once built.
pub struct ActionRegistry {
    actions: HashMap<ActionName, Arc<dyn RegisteredAction>>,
}

impl ActionRegistry {
    pub fn builder() -> ActionRegistryBuilder {
        ActionRegistryBuilder::new()
    }

    pub fn resolve(&self, action_name: &str) -> Result<Arc<dyn RegisteredAction>, ActionDispatchError> {
        ActionName::new(action_name.to_string())
            .ok()
            .and_then(|name| self.actions.get(&name))
            .map(Arc::clone)
            .ok_or_else(|| ActionDispatchError::UnknownAction(action_name.to_string()))
    }

    pub fn action_names(&self) -> Vec<String> {
        let mut names = self
            .actions
            .keys()
            .map(|name| name.value().to_string())
            .collect::<Vec<_>>();
        names.sort();
        names
    }

    pub fn dispatch<L>(&self, action_name: &str, payload: Value, listener: L) -> Option<Uuid>
    where
        L: ActionListener<Value, ActionDispatchError>,
    {
        let listener: JsonActionListener = Box::new(listener);
        match self.resolve(action_name) {
            Ok(action) => action.dispatch(payload, listener),
            Err(error) => {
                tracing::warn!(action = action_name, %error, "dispatch to unknown action");
                listener.on_failure(error);
                None
            }
        }
    }

    pub async fn dispatch_and_wait(
        &self,
        action_name: &str,
        payload: Value,
    ) -> Result<Value, ActionDispatchError> {
        let (listener, response) = listener_future();
        self.dispatch(action_name, payload, listener);
        response.await
    }
}
