//! Attendance data models plus the view types for the monthly sheet.

pub use rollbook_models::attendance::*;

use chrono::NaiveDate;
use rollbook_core::search::group_by_key;
use rollbook_models::ids::StudentId;
use rollbook_models::students::StudentRef;
use serde::Deserialize;
use std::collections::HashSet;

/// Backend outcome of a marking run. Records that already existed for the
/// date are skipped, not rewritten.
#[derive(Debug, Deserialize)]
pub struct MarkOutcome {
    pub marked: i64,
    #[serde(default)]
    pub skipped: i64,
}

/// One grade's block of the monthly sheet.
#[derive(Debug, PartialEq, Eq)]
pub struct GradeSheet {
    pub grade_label: String,
    pub rows: Vec<SheetRow>,
}

/// One student row: a presence flag per Sunday column.
#[derive(Debug, PartialEq, Eq)]
pub struct SheetRow {
    pub student_label: String,
    pub present: Vec<bool>,
}

/// Folds fetched records into per-grade rows with one column per Sunday.
/// Grades keep the order they first appear in; records whose student was
/// not denormalized fall under a single unlabeled group.
pub fn build_sheet(records: Vec<Attendance>, sundays: &[NaiveDate]) -> Vec<GradeSheet> {
    let present: HashSet<(StudentId, NaiveDate)> = records
        .iter()
        .filter(|r| r.status == AttendanceStatus::Present)
        .map(|r| (r.student.id(), r.date))
        .collect();

    let grouped = group_by_key(records, |record| match &record.student {
        StudentRef::Full(student) => student
            .grade
            .as_ref()
            .and_then(|g| g.name_en())
            .unwrap_or("-")
            .to_string(),
        StudentRef::Id(_) => "-".to_string(),
    });

    grouped
        .into_iter()
        .map(|(grade_label, records)| {
            let mut seen = HashSet::new();
            let mut rows = Vec::new();
            for record in records {
                let student_id = record.student.id();
                if !seen.insert(student_id) {
                    continue;
                }
                let flags = sundays
                    .iter()
                    .map(|sunday| present.contains(&(student_id, *sunday)))
                    .collect();
                rows.push(SheetRow {
                    student_label: record.student.display_label(),
                    present: flags,
                });
            }
            GradeSheet { grade_label, rows }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollbook_models::ids::{AttendanceId, StudentId};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn record(student_json: &str, day: u32, status: AttendanceStatus) -> Attendance {
        Attendance {
            id: AttendanceId::new(),
            student: serde_json::from_str(student_json).unwrap(),
            date: date(day),
            status,
            recorded_at: None,
        }
    }

    const AMAL: &str = r#"{
        "id": "0b6f3f4e-41a4-4e05-a2c1-6f1b76cbb0aa",
        "admission_no": "STU-0001",
        "name_en": "Amal Perera",
        "name_si": "අමල් පෙරේරා",
        "grade": {
            "id": "4fd1a9f2-16cb-4d4e-90a5-06a94cf0f3b7",
            "name_en": "Grade 5",
            "name_si": "5 ශ්‍රේණිය",
            "ordinal": 5
        }
    }"#;

    #[test]
    fn sheet_marks_present_sundays_only() {
        let sundays = [date(2), date(9), date(16)];
        let records = vec![
            record(AMAL, 2, AttendanceStatus::Present),
            record(AMAL, 9, AttendanceStatus::Absent),
        ];

        let sheet = build_sheet(records, &sundays);
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet[0].grade_label, "Grade 5");
        assert_eq!(sheet[0].rows.len(), 1);
        assert_eq!(sheet[0].rows[0].present, vec![true, false, false]);
    }

    #[test]
    fn bare_id_students_group_under_dash() {
        let student_id = StudentId::new();
        let sundays = [date(2)];
        let records = vec![record(
            &format!("\"{}\"", student_id),
            2,
            AttendanceStatus::Present,
        )];

        let sheet = build_sheet(records, &sundays);
        assert_eq!(sheet[0].grade_label, "-");
        assert_eq!(sheet[0].rows[0].student_label, student_id.to_string());
    }

    #[test]
    fn duplicate_records_collapse_to_one_row() {
        let sundays = [date(2), date(9)];
        let records = vec![
            record(AMAL, 2, AttendanceStatus::Present),
            record(AMAL, 9, AttendanceStatus::Present),
        ];

        let sheet = build_sheet(records, &sundays);
        assert_eq!(sheet[0].rows.len(), 1);
        assert_eq!(sheet[0].rows[0].present, vec![true, true]);
    }
}
