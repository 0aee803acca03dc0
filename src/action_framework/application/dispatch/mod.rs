pub mod action_registry;
pub mod transport_action_executor;
