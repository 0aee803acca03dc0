use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::identity::domain::model::{
    enums::identity_domain_error::IdentityDomainError,
    value_objects::permission_name::PermissionName,
};

/// Permissions held by one principal. Ordered so that serialized output is
/// stable.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<PermissionName>);

impl PermissionSet {
    pub fn from_values(
        values: impl IntoIterator<Item = String>,
    ) -> Result<Self, IdentityDomainError> {
        values
            .into_iter()
            .map(PermissionName::new)
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self)
    }

    pub fn contains(&self, permission: &str) -> bool {
        self.iter().any(|p| p.value() == permission)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PermissionName> {
        self.0.iter()
    }

    pub fn values(&self) -> Vec<String> {
        self.iter().map(|p| p.value().to_string()).collect()
    }
}
