use serde::{Deserialize, Serialize};
use std::fmt;

/// Access role of a back-office user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Owner,
    Manager,
    Sales,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Owner, Role::Manager, Role::Sales];

    pub fn code(&self) -> &'static str {
        match self {
            Role::Owner => "OWNER",
            Role::Manager => "MANAGER",
            Role::Sales => "SALES",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Password the backend assigns to freshly created accounts of this role.
    pub fn default_password(&self) -> &'static str {
        match self {
            Role::Owner => "admin123",
            Role::Manager => "manager123",
            Role::Sales => "sales123",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
    #[serde(default)]
    pub message: Option<String>,
}

/// Profile of the signed-in user, persisted as `currentUser`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    pub full_name: String,
    pub role: Role,
    pub outlet: String,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_codes_round_trip_through_json() {
        let json = serde_json::to_string(&Role::Manager).unwrap();
        assert_eq!(json, "\"MANAGER\"");
        assert_eq!(Role::from_code("sales"), Some(Role::Sales));
        assert_eq!(Role::from_code("cashier"), None);
    }

    #[test]
    fn user_info_reads_backend_payload() {
        let raw = r#"{"id":7,"username":"priya","fullName":"Priya S","role":"SALES","outlet":"SKY_BLUE_WOMEN","isActive":true}"#;
        let user: UserInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(user.full_name, "Priya S");
        assert_eq!(user.role, Role::Sales);
        assert_eq!(user.id, Some(7));
    }
}
