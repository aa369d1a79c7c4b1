//! Read-only report DTOs.
//!
//! The backend computes these aggregates under `/reports/...`; the client
//! renders them and derives nothing beyond display categories.

use crate::exams::ExamRef;
use crate::grades::GradeRef;
use crate::houses::HouseRef;
use crate::students::StudentRef;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-grade attendance totals for one month, one entry per Sunday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSummaryReport {
    pub year: i32,
    pub month: u32,
    pub grades: Vec<GradeAttendanceRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeAttendanceRow {
    pub grade: GradeRef,
    pub total_students: i64,
    pub sundays: Vec<SundayCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SundayCount {
    pub date: NaiveDate,
    pub present: i64,
}

/// Per-student percentages for one exam.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamPerformanceReport {
    pub exam: ExamRef,
    pub rows: Vec<StudentPerformanceRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentPerformanceRow {
    pub student: StudentRef,
    pub percentage: f64,
}

/// House standings for one competition year.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HousePointsReport {
    pub year: i32,
    pub houses: Vec<HousePointsRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HousePointsRow {
    pub house: HouseRef,
    pub points: i64,
}
