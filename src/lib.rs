pub mod action_framework;
pub mod config;
pub mod identity;
