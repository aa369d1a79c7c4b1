//! Exam models and DTOs.

use crate::grades::GradeRef;
use crate::ids::{ExamId, GradeId};
use crate::students::StudentRef;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    pub id: ExamId,
    pub name_en: String,
    pub name_si: String,
    pub year: i32,
    #[serde(default)]
    pub grade: Option<GradeRef>,
    #[serde(default)]
    pub held_on: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// An exam reference: bare ID or denormalized record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExamRef {
    Id(ExamId),
    Full(Box<Exam>),
}

impl ExamRef {
    pub fn id(&self) -> ExamId {
        match self {
            Self::Id(id) => *id,
            Self::Full(exam) => exam.id,
        }
    }

    pub fn name_en(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Full(exam) => Some(&exam.name_en),
        }
    }
}

/// A per-student result row. `percentage` is the already-computed 0-100
/// mark the dashboards band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamResult {
    pub student: StudentRef,
    pub percentage: f64,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateExamDto {
    #[validate(length(min = 1, max = 150))]
    pub name_en: String,
    #[validate(length(min = 1, max = 150))]
    pub name_si: String,
    #[validate(range(min = 2000, max = 2100))]
    pub year: i32,
    pub grade_id: GradeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub held_on: Option<NaiveDate>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct UpdateExamDto {
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
    pub held_on: Option<NaiveDate>,
}
