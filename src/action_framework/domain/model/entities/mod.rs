pub mod action_task;
