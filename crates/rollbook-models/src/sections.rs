//! Section models and DTOs. A section is an administrative grouping of one
//! or more grades (e.g. "Primary" covering grades 1-5).

use crate::ids::{GradeId, SectionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub name_en: String,
    pub name_si: String,
    #[serde(default)]
    pub grade_ids: Vec<GradeId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateSectionDto {
    #[validate(length(min = 1, max = 100))]
    pub name_en: String,
    #[validate(length(min = 1, max = 100))]
    pub name_si: String,
    #[validate(length(min = 1))]
    pub grade_ids: Vec<GradeId>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct UpdateSectionDto {
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_si: Option<String>,
    #[validate(length(min = 1))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_ids: Option<Vec<GradeId>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_requires_at_least_one_grade() {
        let dto = CreateSectionDto {
            name_en: "Primary".to_string(),
            name_si: "ප්‍රාථමික".to_string(),
            grade_ids: vec![],
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn update_with_no_fields_is_valid() {
        assert!(UpdateSectionDto::default().validate().is_ok());
    }
}
