//! Grade (year-level cohort) models and DTOs.

use crate::ids::GradeId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A year-level cohort, e.g. "Grade 5".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: GradeId,
    pub name_en: String,
    pub name_si: String,
    /// Position of the grade in the ladder, lowest first.
    pub ordinal: i32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A grade reference as the backend returns it: either a bare ID or the
/// denormalized record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradeRef {
    Id(GradeId),
    Full(Box<Grade>),
}

impl GradeRef {
    pub fn id(&self) -> GradeId {
        match self {
            Self::Id(id) => *id,
            Self::Full(grade) => grade.id,
        }
    }

    /// English name when the record was denormalized.
    pub fn name_en(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Full(grade) => Some(&grade.name_en),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateGradeDto {
    #[validate(length(min = 1, max = 100))]
    pub name_en: String,
    #[validate(length(min = 1, max = 100))]
    pub name_si: String,
    #[validate(range(min = 1))]
    pub ordinal: i32,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct UpdateGradeDto {
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_si: Option<String>,
    #[validate(range(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_ref_decodes_bare_id_and_full_object() {
        let id: GradeRef = serde_json::from_str(
            r#""4fd1a9f2-16cb-4d4e-90a5-06a94cf0f3b7""#,
        )
        .unwrap();
        assert!(matches!(id, GradeRef::Id(_)));
        assert!(id.name_en().is_none());

        let full: GradeRef = serde_json::from_str(
            r#"{
                "id": "4fd1a9f2-16cb-4d4e-90a5-06a94cf0f3b7",
                "name_en": "Grade 5",
                "name_si": "5 ශ්‍රේණිය",
                "ordinal": 5
            }"#,
        )
        .unwrap();
        assert_eq!(full.name_en(), Some("Grade 5"));
        assert_eq!(full.id().to_string(), "4fd1a9f2-16cb-4d4e-90a5-06a94cf0f3b7");
    }

    #[test]
    fn create_dto_requires_both_names() {
        let dto = CreateGradeDto {
            name_en: "".to_string(),
            name_si: "1 ශ්‍රේණිය".to_string(),
            ordinal: 1,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn ordinal_must_be_positive() {
        let dto = CreateGradeDto {
            name_en: "Grade 1".to_string(),
            name_si: "1 ශ්‍රේණිය".to_string(),
            ordinal: 0,
        };
        assert!(dto.validate().is_err());
    }
}
