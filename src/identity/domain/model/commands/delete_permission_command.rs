use crate::identity::domain::model::{
    enums::identity_domain_error::IdentityDomainError,
    value_objects::{permission_name::PermissionName, username::Username},
};

#[derive(Clone, Debug)]
pub struct DeletePermissionCommand {
    username: Username,
    permission: PermissionName,
}

impl DeletePermissionCommand {
    pub fn new(username: String, permission: String) -> Result<Self, IdentityDomainError> {
        Ok(Self {
            username: Username::new(username)?,
            permission: PermissionName::new(permission)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }
    pub fn permission(&self) -> &PermissionName {
        &self.permission
    }
}
