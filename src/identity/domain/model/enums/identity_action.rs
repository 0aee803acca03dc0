use std::str::FromStr;

use super::identity_domain_error::IdentityDomainError;

/// Every transport action the identity module exposes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum IdentityAction {
    GetPermission,
    PutPermission,
    DeletePermission,
}

impl IdentityAction {
    pub const ALL: [IdentityAction; 3] = [
        Self::GetPermission,
        Self::PutPermission,
        Self::DeletePermission,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::GetPermission => "cluster:admin/identity/permission/get",
            Self::PutPermission => "cluster:admin/identity/permission/put",
            Self::DeletePermission => "cluster:admin/identity/permission/delete",
        }
    }
}

impl FromStr for IdentityAction {
    type Err = IdentityDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == value)
            .ok_or_else(|| IdentityDomainError::InvalidRequest(format!("unknown action [{value}]")))
    }
}
