//! Teacher and staff-role models and DTOs.

use crate::ids::{StaffRoleId, TeacherId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffRole {
    pub id: StaffRoleId,
    pub name_en: String,
    pub name_si: String,
}

/// A staff-role reference: bare ID or denormalized record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StaffRoleRef {
    Id(StaffRoleId),
    Full(Box<StaffRole>),
}

impl StaffRoleRef {
    pub fn id(&self) -> StaffRoleId {
        match self {
            Self::Id(id) => *id,
            Self::Full(role) => role.id,
        }
    }

    pub fn name_en(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Full(role) => Some(&role.name_en),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name_en: String,
    pub name_si: String,
    #[serde(default, deserialize_with = "rollbook_core::serde::empty_string_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "rollbook_core::serde::empty_string_as_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub roles: Vec<StaffRoleRef>,
    /// Club this teacher is master-in-charge of, when any.
    #[serde(default, deserialize_with = "rollbook_core::serde::empty_string_as_none")]
    pub mic_of: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Teacher {
    pub fn search_fields(&self) -> [&str; 2] {
        [&self.name_en, &self.name_si]
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateTeacherDto {
    #[validate(length(min = 1, max = 150))]
    pub name_en: String,
    #[validate(length(min = 1, max = 150))]
    pub name_si: String,
    #[validate(email)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[validate(length(min = 9, max = 15))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub role_ids: Vec<StaffRoleId>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTeacherDto {
    #[validate(length(min = 1, max = 150))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[validate(length(min = 1, max = 150))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_si: Option<String>,
    #[validate(email)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[validate(length(min = 9, max = 15))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_ids: Option<Vec<StaffRoleId>>,
}

/// Assigns (or clears) the club a teacher is master-in-charge of.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct SetMicDto {
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateStaffRoleDto {
    #[validate(length(min = 1, max = 100))]
    pub name_en: String,
    #[validate(length(min = 1, max = 100))]
    pub name_si: String,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct UpdateStaffRoleDto {
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_si: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teacher_email_must_be_valid_when_present() {
        let dto = CreateTeacherDto {
            name_en: "K. Jayasuriya".to_string(),
            name_si: "කේ. ජයසූරිය".to_string(),
            email: Some("not-an-email".to_string()),
            phone: None,
            role_ids: vec![],
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn teacher_decodes_with_role_id_list() {
        let body = r#"{
            "id": "9a7ce1d5-5d4a-4d86-a7f5-55c9b3727a01",
            "name_en": "K. Jayasuriya",
            "name_si": "කේ. ජයසූරිය",
            "roles": ["b3d2c57e-f9cf-49f4-b33e-1de7e95c4a02"],
            "mic_of": ""
        }"#;
        let teacher: Teacher = serde_json::from_str(body).unwrap();
        assert_eq!(teacher.roles.len(), 1);
        assert!(teacher.roles[0].name_en().is_none());
        assert_eq!(teacher.mic_of, None);
    }
}
