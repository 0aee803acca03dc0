pub mod actions;
pub mod identity_transport_actions;
pub mod messages;
