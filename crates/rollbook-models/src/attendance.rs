//! Attendance models and DTOs.
//!
//! The backend keeps one record per student per date (create-if-absent);
//! the client only decides *when* a write may be attempted, via
//! `rollbook_core::attendance`.

use crate::ids::{AttendanceId, GradeId, StudentId};
use crate::students::StudentRef;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendance {
    pub id: AttendanceId,
    pub student: StudentRef,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Submission payload for a marking run: the students present on `date`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct MarkAttendanceDto {
    #[validate(length(min = 1))]
    pub student_ids: Vec<StudentId>,
    pub date: NaiveDate,
}

/// Query parameters for listing attendance records.
#[derive(Debug, Default, Clone, Serialize)]
pub struct AttendanceFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_id: Option<GradeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_dto_requires_students() {
        let dto = MarkAttendanceDto {
            student_ids: vec![],
            date: NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn filter_serializes_only_set_fields() {
        let filter = AttendanceFilter {
            date: Some(NaiveDate::from_ymd_opt(2024, 6, 9).unwrap()),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&filter).unwrap();
        assert_eq!(encoded, serde_json::json!({"date": "2024-06-09"}));
    }

    #[test]
    fn status_uses_lowercase_wire_form() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            r#""present""#
        );
    }
}
