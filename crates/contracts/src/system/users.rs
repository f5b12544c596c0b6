use crate::shared::validation::{validate_full_name, validate_username, ValidationError};
use crate::system::auth::Role;
use serde::{Deserialize, Serialize};

/// Account that can never be removed from the user list.
pub const PROTECTED_USERNAME: &str = "admin";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub role: Role,
    pub outlet: String,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl User {
    pub fn is_protected(&self) -> bool {
        self.username == PROTECTED_USERNAME
    }

    /// Dropdown label used by every employee picker: `Full Name (OUTLET)`.
    pub fn picker_label(&self) -> String {
        format!("{} ({})", self.full_name, self.outlet)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub username: String,
    pub full_name: String,
    pub role: Role,
    pub outlet: String,
}

/// Raw values of the "add user" form as typed by the owner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub username: String,
    pub full_name: String,
    pub role: String,
    pub outlet: String,
}

impl UserDraft {
    pub fn validate(&self) -> Result<CreateUserDto, ValidationError> {
        let username = self.username.trim();
        validate_username(username)?;
        validate_full_name(&self.full_name)?;
        let role = Role::from_code(&self.role).ok_or(ValidationError::RoleNotSelected)?;
        let outlet = self.outlet.trim();
        if outlet.is_empty() {
            return Err(ValidationError::OutletNotSelected);
        }
        Ok(CreateUserDto {
            username: username.to_string(),
            full_name: self.full_name.trim().to_string(),
            role,
            outlet: outlet.to_string(),
        })
    }
}
