use std::sync::Arc;

use crate::{
    action_framework::{
        application::dispatch::{
            action_registry::ActionRegistryBuilder,
            transport_action_executor::TransportActionExecutor,
        },
        domain::{
            model::enums::action_dispatch_error::ActionDispatchError,
            services::action_filter::ActionFilter,
        },
    },
    identity::{
        domain::services::{
            permission_command_service::PermissionCommandService,
            permission_query_service::PermissionQueryService,
        },
        interfaces::transport::actions::{
            transport_delete_permission_action::TransportDeletePermissionAction,
            transport_get_permission_action::TransportGetPermissionAction,
            transport_put_permission_action::TransportPutPermissionAction,
        },
    },
};

#[derive(Clone)]
pub struct IdentityTransportActions {
    pub get_permission: Arc<TransportActionExecutor<TransportGetPermissionAction>>,
    pub put_permission: Arc<TransportActionExecutor<TransportPutPermissionAction>>,
    pub delete_permission: Arc<TransportActionExecutor<TransportDeletePermissionAction>>,
}

impl IdentityTransportActions {
    pub fn new(
        query_service: Arc<dyn PermissionQueryService>,
        command_service: Arc<dyn PermissionCommandService>,
        filters: Vec<Arc<dyn ActionFilter>>,
    ) -> Result<Self, ActionDispatchError> {
        Ok(Self {
            get_permission: Arc::new(TransportActionExecutor::new(
                TransportGetPermissionAction::new(query_service),
                filters.clone(),
            )?),
            put_permission: Arc::new(TransportActionExecutor::new(
                TransportPutPermissionAction::new(command_service.clone()),
                filters.clone(),
            )?),
            delete_permission: Arc::new(TransportActionExecutor::new(
                TransportDeletePermissionAction::new(command_service),
                filters,
            )?),
        })
    }

    pub fn register(&self, builder: &mut ActionRegistryBuilder) -> Result<(), ActionDispatchError> {
        builder
            .register(self.get_permission.clone())?
            .register(self.put_permission.clone())?
            .register(self.delete_permission.clone())?;
        Ok(())
    }
}
