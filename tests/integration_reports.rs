mod common;

use common::{client_for, spawn_backend};
use rollbook::modules::reports::service::ReportService;
use rollbook_core::performance::PerformanceBand;
use rollbook_models::ids::ExamId;

#[tokio::test]
async fn test_attendance_summary_decodes_denormalized_grades() {
    let (base_url, _state) = spawn_backend().await;
    let api = client_for(&base_url);

    let report = ReportService::attendance_summary(&api, 2024, 6).await.unwrap();
    assert_eq!(report.year, 2024);
    assert_eq!(report.month, 6);
    assert_eq!(report.grades.len(), 1);

    let row = &report.grades[0];
    assert_eq!(row.grade.name_en(), Some("Grade 5"));
    assert_eq!(row.total_students, 25);
    assert_eq!(row.sundays.len(), 2);
    assert_eq!(row.sundays[1].present, 23);
}

#[tokio::test]
async fn test_exam_performance_rows_band_client_side() {
    let (base_url, _state) = spawn_backend().await;
    let api = client_for(&base_url);

    let report = ReportService::exam_performance(&api, ExamId::new()).await.unwrap();
    assert_eq!(report.rows.len(), 2);

    let bands: Vec<PerformanceBand> = report
        .rows
        .iter()
        .map(|r| PerformanceBand::from_percentage(r.percentage))
        .collect();
    assert_eq!(bands, vec![PerformanceBand::Excellent, PerformanceBand::Average]);
}

#[tokio::test]
async fn test_house_points_accepts_mixed_reference_shapes() {
    let (base_url, _state) = spawn_backend().await;
    let api = client_for(&base_url);

    let report = ReportService::house_points(&api, 2024).await.unwrap();
    assert_eq!(report.year, 2024);
    assert_eq!(report.houses.len(), 2);

    // One row came back as a bare ID, the other denormalized.
    assert_eq!(report.houses[0].house.name_en(), None);
    assert_eq!(report.houses[1].house.name_en(), Some("Gemunu"));
    assert_eq!(report.houses[1].points, 61);
}
