pub mod dispatch;
pub mod filters;
pub mod listeners;
