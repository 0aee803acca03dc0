pub mod fn_action_listener;
pub mod guarded_action_listener;
pub mod mapped_action_listener;
pub mod oneshot_action_listener;
