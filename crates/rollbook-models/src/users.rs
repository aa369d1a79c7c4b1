//! Application user models and DTOs for the user-administration screens.

use crate::ids::{RoleId, UserId};
use crate::roles::RoleRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    #[serde(default)]
    pub roles: Vec<RoleRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl AppUser {
    pub fn search_fields(&self) -> [&str; 2] {
        [&self.username, &self.email]
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateUserDto {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    /// Write-only; never echoed back by the backend.
    #[validate(length(min = 8))]
    pub password: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub role_ids: Vec<RoleId>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserDto {
    #[validate(email)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[validate(length(min = 8))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct AssignRolesDto {
    #[validate(length(min = 1))]
    pub role_ids: Vec<RoleId>,
}
