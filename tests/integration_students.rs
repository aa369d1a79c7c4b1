mod common;

use common::{client_for, spawn_backend};
use rollbook::modules::students::service::StudentService;
use rollbook_core::errors::ErrorKind;
use rollbook_core::pagination::PageQuery;
use rollbook_core::search::matches_query;
use rollbook_models::ids::{GradeId, StudentId};
use rollbook_models::students::{CreateStudentDto, UpdateStudentDto};

fn sample_student(admission_no: &str, name_en: &str, grade_id: GradeId) -> CreateStudentDto {
    CreateStudentDto {
        admission_no: admission_no.to_string(),
        name_en: name_en.to_string(),
        name_si: "අමල් පෙරේරා".to_string(),
        date_of_birth: chrono::NaiveDate::from_ymd_opt(2012, 3, 14),
        guardian_name: Some("Sunil Perera".to_string()),
        phone: Some("0712345678".to_string()),
        grade_id,
        house_id: None,
    }
}

#[tokio::test]
async fn test_student_crud_roundtrip() {
    let (base_url, _state) = spawn_backend().await;
    let api = client_for(&base_url);

    let grade_id = GradeId::new();
    let dto = sample_student("STU-0001", "Amal Perera", grade_id);

    let created = StudentService::create(&api, &dto).await.unwrap();
    assert_eq!(created.admission_no, "STU-0001");
    assert_eq!(created.grade.as_ref().map(|g| g.id()), Some(grade_id));

    let fetched = StudentService::get(&api, created.id).await.unwrap();
    assert_eq!(fetched.name_en, "Amal Perera");
    assert_eq!(fetched.guardian_name.as_deref(), Some("Sunil Perera"));

    let update = UpdateStudentDto {
        name_en: Some("Nimal Perera".to_string()),
        ..Default::default()
    };
    let updated = StudentService::update(&api, created.id, &update).await.unwrap();
    assert_eq!(updated.name_en, "Nimal Perera");
    // Untouched fields survive a partial update.
    assert_eq!(updated.admission_no, "STU-0001");

    StudentService::delete(&api, created.id).await.unwrap();
    let err = StudentService::get(&api, created.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_listing_paginates_and_filters_by_grade() {
    let (base_url, _state) = spawn_backend().await;
    let api = client_for(&base_url);

    let grade_a = GradeId::new();
    let grade_b = GradeId::new();

    for i in 0..15 {
        let grade = if i < 10 { grade_a } else { grade_b };
        let dto = sample_student(&format!("STU-{:04}", i), &format!("Student {}", i), grade);
        StudentService::create(&api, &dto).await.unwrap();
    }

    let page = StudentService::list(&api, PageQuery::new(Some(1), Some(10)), None)
        .await
        .unwrap();
    assert_eq!(page.data.len(), 10);
    assert_eq!(page.meta.total, 15);
    assert_eq!(page.meta.total_pages, 2);

    let second = StudentService::list(&api, PageQuery::new(Some(2), Some(10)), None)
        .await
        .unwrap();
    assert_eq!(second.data.len(), 5);

    let only_b = StudentService::list(&api, PageQuery::new(Some(1), Some(100)), Some(grade_b))
        .await
        .unwrap();
    assert_eq!(only_b.data.len(), 5);
    assert!(only_b.data.iter().all(|s| s.grade.as_ref().map(|g| g.id()) == Some(grade_b)));
}

#[tokio::test]
async fn test_search_narrows_a_fetched_page_locally() {
    let (base_url, _state) = spawn_backend().await;
    let api = client_for(&base_url);

    let grade = GradeId::new();
    for (no, name) in [("STU-0001", "Amal Perera"), ("STU-0002", "Kasun Silva")] {
        StudentService::create(&api, &sample_student(no, name, grade))
            .await
            .unwrap();
    }

    let page = StudentService::list(&api, PageQuery::default(), None).await.unwrap();
    let hits: Vec<_> = page
        .data
        .iter()
        .filter(|s| matches_query(&s.search_fields(), "silva"))
        .collect();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name_en, "Kasun Silva");
}

#[tokio::test]
async fn test_duplicate_admission_number_surfaces_backend_message() {
    let (base_url, _state) = spawn_backend().await;
    let api = client_for(&base_url);

    let grade = GradeId::new();
    let dto = sample_student("STU-0001", "Amal Perera", grade);
    StudentService::create(&api, &dto).await.unwrap();

    let err = StudentService::create(&api, &dto).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Backend { status: 400 });
    assert_eq!(
        err.user_message(),
        "Student with admission number STU-0001 already exists"
    );
}

#[tokio::test]
async fn test_deleting_a_missing_student_is_not_found() {
    let (base_url, _state) = spawn_backend().await;
    let api = client_for(&base_url);

    let err = StudentService::delete(&api, StudentId::new()).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.user_message(), "Student not found");
}
