use std::fmt;

use crate::action_framework::domain::model::enums::action_dispatch_error::ActionDispatchError;

lazy_static::lazy_static! {
    static ref ACTION_NAME_REGEX: regex::Regex =
        regex::Regex::new(r"^[a-z][a-z0-9_]*(:[a-z0-9_*]+(/[a-z0-9_*]+)*)?$").expect("valid regex");
}

/// Routing key of a transport action, e.g. `cluster:admin/identity/permission/get`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ActionName(String);

impl ActionName {
    pub fn new(value: String) -> Result<Self, ActionDispatchError> {
        if !ACTION_NAME_REGEX.is_match(&value) {
            return Err(ActionDispatchError::InvalidActionName(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
