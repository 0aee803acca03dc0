use serde::{Deserialize, Serialize};

use crate::identity::domain::model::enums::identity_domain_error::IdentityDomainError;

const MAX_PERMISSION_NAME_LENGTH: usize = 256;

lazy_static::lazy_static! {
    static ref PERMISSION_NAME_REGEX: regex::Regex =
        regex::Regex::new(r"^[A-Za-z0-9_.:/*-]+$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PermissionName(String);

impl PermissionName {
    pub fn new(value: String) -> Result<Self, IdentityDomainError> {
        let trimmed = value.trim();
        if trimmed.len() > MAX_PERMISSION_NAME_LENGTH || !PERMISSION_NAME_REGEX.is_match(trimmed) {
            return Err(IdentityDomainError::InvalidPermissionName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PermissionName {
    type Error = IdentityDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PermissionName> for String {
    fn from(value: PermissionName) -> Self {
        value.0
    }
}
