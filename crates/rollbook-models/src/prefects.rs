//! Prefect appointment models and DTOs.

use crate::ids::{PrefectId, StudentId};
use crate::students::StudentRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Leadership rank of a prefect appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefectRank {
    Head,
    Deputy,
    Senior,
    Junior,
}

impl PrefectRank {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Head => "Head Prefect",
            Self::Deputy => "Deputy Head Prefect",
            Self::Senior => "Senior Prefect",
            Self::Junior => "Junior Prefect",
        }
    }
}

impl fmt::Display for PrefectRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prefect {
    pub id: PrefectId,
    pub student: StudentRef,
    pub rank: PrefectRank,
    pub appointed_year: i32,
    #[serde(default)]
    pub duty_positions: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct AppointPrefectDto {
    pub student_id: StudentId,
    pub rank: PrefectRank,
    #[validate(range(min = 2000, max = 2100))]
    pub appointed_year: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub duty_positions: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePrefectDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<PrefectRank>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duty_positions: Option<Vec<String>>,
}
