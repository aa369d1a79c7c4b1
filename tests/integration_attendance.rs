mod common;

use chrono::NaiveDate;
use common::{client_for, spawn_backend};
use rollbook::modules::attendance::model::build_sheet;
use rollbook::modules::attendance::service::AttendanceService;
use rollbook_core::attendance::{check_marking, default_marking_date};
use rollbook_core::calendar::sundays_in_month;
use rollbook_models::attendance::{AttendanceFilter, MarkAttendanceDto};
use rollbook_models::ids::StudentId;

fn sunday(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

#[tokio::test]
async fn test_marking_is_create_if_absent() {
    let (base_url, _state) = spawn_backend().await;
    let api = client_for(&base_url);

    let students = vec![StudentId::new(), StudentId::new(), StudentId::new()];

    let first = AttendanceService::mark(
        &api,
        &MarkAttendanceDto {
            student_ids: students.clone(),
            date: sunday(9),
        },
    )
    .await
    .unwrap();
    assert_eq!(first.marked, 3);
    assert_eq!(first.skipped, 0);

    // Same Sunday again: the two existing records are left alone and only
    // the newcomer is written.
    let mut with_newcomer = students.clone();
    with_newcomer.truncate(2);
    with_newcomer.push(StudentId::new());

    let second = AttendanceService::mark(
        &api,
        &MarkAttendanceDto {
            student_ids: with_newcomer,
            date: sunday(9),
        },
    )
    .await
    .unwrap();
    assert_eq!(second.marked, 1);
    assert_eq!(second.skipped, 2);
}

#[tokio::test]
async fn test_month_listing_feeds_the_sheet() {
    let (base_url, _state) = spawn_backend().await;
    let api = client_for(&base_url);

    let student = StudentId::new();
    for day in [2, 9] {
        AttendanceService::mark(
            &api,
            &MarkAttendanceDto {
                student_ids: vec![student],
                date: sunday(day),
            },
        )
        .await
        .unwrap();
    }
    // A July record that the June filter must exclude.
    AttendanceService::mark(
        &api,
        &MarkAttendanceDto {
            student_ids: vec![student],
            date: NaiveDate::from_ymd_opt(2024, 7, 7).unwrap(),
        },
    )
    .await
    .unwrap();

    let filter = AttendanceFilter {
        grade_id: None,
        date: None,
        from: Some(sunday(1)),
        to: Some(sunday(30)),
    };
    let records = AttendanceService::list(&api, &filter).await.unwrap();
    assert_eq!(records.len(), 2);

    let sundays = sundays_in_month(2024, 6);
    let sheet = build_sheet(records, &sundays);
    assert_eq!(sheet.len(), 1);
    assert_eq!(sheet[0].rows.len(), 1);
    // June has five Sundays; attendance was marked on the first two.
    assert_eq!(sheet[0].rows[0].present, vec![true, true, false, false, false]);
}

#[tokio::test]
async fn test_policy_gates_the_write_path() {
    let (base_url, _state) = spawn_backend().await;
    let api = client_for(&base_url);

    // Monday morning: the preselected date is the upcoming Sunday and the
    // window is shut, so no request may be attempted.
    let monday = NaiveDate::from_ymd_opt(2024, 6, 10)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let target = default_marking_date(monday);
    assert_eq!(target, sunday(16));

    let decision = check_marking(target, monday);
    assert!(!decision.can_mark);
    assert_eq!(
        decision.reason.as_deref(),
        Some("Marking will open on Sunday at 7:30 AM.")
    );

    // Inside the window the same flow goes through to the backend.
    let open = sunday(9).and_hms_opt(10, 0, 0).unwrap();
    let decision = check_marking(sunday(9), open);
    assert!(decision.can_mark);

    let outcome = AttendanceService::mark(
        &api,
        &MarkAttendanceDto {
            student_ids: vec![StudentId::new()],
            date: sunday(9),
        },
    )
    .await
    .unwrap();
    assert_eq!(outcome.marked, 1);
}
