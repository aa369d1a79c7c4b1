//! Competition models and DTOs for the inter-house program.

use crate::houses::HouseRef;
use crate::ids::{CompetitionId, HouseId, StudentId};
use crate::students::StudentRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompetitionCategory {
    Individual,
    House,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competition {
    pub id: CompetitionId,
    pub name_en: String,
    pub name_si: String,
    pub year: i32,
    pub category: CompetitionCategory,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Finishing place in a competition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Place {
    First,
    Second,
    Third,
}

impl Place {
    /// House points awarded for the place when the recorder does not
    /// override them.
    pub fn default_points(&self) -> i32 {
        match self {
            Self::First => 10,
            Self::Second => 7,
            Self::Third => 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionResult {
    pub competition_id: CompetitionId,
    pub student: StudentRef,
    #[serde(default)]
    pub house: Option<HouseRef>,
    pub place: Place,
    pub points: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateCompetitionDto {
    #[validate(length(min = 1, max = 150))]
    pub name_en: String,
    #[validate(length(min = 1, max = 150))]
    pub name_si: String,
    #[validate(range(min = 2000, max = 2100))]
    pub year: i32,
    pub category: CompetitionCategory,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCompetitionDto {
    #[validate(length(min = 1, max = 150))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[validate(length(min = 1, max = 150))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_si: Option<String>,
    #[validate(range(min = 2000, max = 2100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CompetitionCategory>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RecordResultDto {
    pub student_id: StudentId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_id: Option<HouseId>,
    pub place: Place,
    /// Defaults from the place when omitted.
    #[validate(range(min = 0))]
    pub points: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_carry_default_points() {
        assert_eq!(Place::First.default_points(), 10);
        assert_eq!(Place::Second.default_points(), 7);
        assert_eq!(Place::Third.default_points(), 5);
    }

    #[test]
    fn place_uses_lowercase_wire_form() {
        assert_eq!(serde_json::to_string(&Place::First).unwrap(), r#""first""#);
        let place: Place = serde_json::from_str(r#""third""#).unwrap();
        assert_eq!(place, Place::Third);
    }
}
