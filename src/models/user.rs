//! User model
//!
//! Staff accounts in the mentor hierarchy and the role/permission data the
//! session derives from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::utils::errors::PcbPointError;

/// Staff role, as tagged by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Admin,
    Supervisor,
    SeniorMentor,
    GroupMentor,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Supervisor, Role::SeniorMentor, Role::GroupMentor];

    /// Wire name, also used as the login path segment
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Supervisor => "supervisor",
            Role::SeniorMentor => "seniorMentor",
            Role::GroupMentor => "groupMentor",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Supervisor => "Supervisor",
            Role::SeniorMentor => "Senior Mentor",
            Role::GroupMentor => "Group Mentor",
        }
    }

    /// The role directly above in the hierarchy, if any
    pub fn parent(&self) -> Option<Role> {
        match self {
            Role::Admin => None,
            Role::Supervisor => Some(Role::Admin),
            Role::SeniorMentor => Some(Role::Supervisor),
            Role::GroupMentor => Some(Role::SeniorMentor),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = PcbPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "admin" => Ok(Role::Admin),
            "supervisor" => Ok(Role::Supervisor),
            "seniormentor" => Ok(Role::SeniorMentor),
            "groupmentor" => Ok(Role::GroupMentor),
            _ => Err(PcbPointError::InvalidInput(format!("Unknown role: {}", s))),
        }
    }
}

/// A staff member as returned by `/api/me` and the listing endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
    /// Id of the next level up in the hierarchy
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Supervisor feature permissions, from `/api/role/get`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(rename = "FeeManagement", default)]
    pub fee_management: bool,
    #[serde(rename = "KitDispatch", default)]
    pub kit_dispatch: bool,
}

/// The resolved identity of the logged-in user
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub user: User,
    pub permissions: Permissions,
}

impl Profile {
    pub fn role(&self) -> Role {
        self.user.role
    }
}

/// Login form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response; some endpoints also echo the role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub role: Option<Role>,
}

/// Form for adding a supervisor or mentor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStaffRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}
