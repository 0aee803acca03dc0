pub mod action_filter;
pub mod action_listener;
pub mod transport_action_handler;
