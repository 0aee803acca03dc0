pub mod identity_action;
pub mod identity_domain_error;
