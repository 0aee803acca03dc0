pub mod action_dispatch_error;
pub mod action_execution_error;
pub mod action_task_state;
