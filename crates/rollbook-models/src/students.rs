//! Student models and DTOs.

use crate::grades::GradeRef;
use crate::houses::HouseRef;
use crate::ids::{GradeId, HouseId, StudentId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A student record as the backend returns it. Fields the backend does not
/// always include stay optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub admission_no: String,
    pub name_en: String,
    pub name_si: String,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, deserialize_with = "rollbook_core::serde::empty_string_as_none")]
    pub guardian_name: Option<String>,
    #[serde(default, deserialize_with = "rollbook_core::serde::empty_string_as_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub grade: Option<GradeRef>,
    #[serde(default)]
    pub house: Option<HouseRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Student {
    /// Fields the listing screens search across.
    pub fn search_fields(&self) -> [&str; 3] {
        [&self.admission_no, &self.name_en, &self.name_si]
    }
}

/// A student reference: bare ID or denormalized record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StudentRef {
    Id(StudentId),
    Full(Box<Student>),
}

impl StudentRef {
    pub fn id(&self) -> StudentId {
        match self {
            Self::Id(id) => *id,
            Self::Full(student) => student.id,
        }
    }

    pub fn name_en(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Full(student) => Some(&student.name_en),
        }
    }

    /// Best label available for table rows: the name when denormalized,
    /// the ID otherwise.
    pub fn display_label(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::Full(student) => student.name_en.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 20))]
    pub admission_no: String,
    #[validate(length(min = 1, max = 150))]
    pub name_en: String,
    #[validate(length(min = 1, max = 150))]
    pub name_si: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(min = 1, max = 150))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,
    #[validate(length(min = 9, max = 15))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub grade_id: GradeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_id: Option<HouseId>,
}

/// All fields optional; only provided fields are updated.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 20))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission_no: Option<String>,
    #[validate(length(min = 1, max = 150))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[validate(length(min = 1, max = 150))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_si: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(min = 1, max = 150))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,
    #[validate(length(min = 9, max = 15))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_id: Option<GradeId>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct AssignHouseDto {
    pub house_id: HouseId,
    #[validate(range(min = 2000, max = 2100))]
    pub year: i32,
}
