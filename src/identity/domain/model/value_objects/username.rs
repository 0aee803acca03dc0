use std::fmt;

use crate::identity::domain::model::enums::identity_domain_error::IdentityDomainError;

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Username(String);

impl Username {
    pub fn new(value: String) -> Result<Self, IdentityDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(IdentityDomainError::InvalidUsername);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
