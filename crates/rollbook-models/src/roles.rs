//! Access-control role models and DTOs.

use crate::ids::RoleId;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// A role reference: bare ID or denormalized record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleRef {
    Id(RoleId),
    Full(Box<Role>),
}

impl RoleRef {
    pub fn id(&self) -> RoleId {
        match self {
            Self::Id(id) => *id,
            Self::Full(role) => role.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Full(role) => Some(&role.name),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateRoleDto {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct UpdateRoleDto {
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}
