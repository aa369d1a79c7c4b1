//! Backend seeding through the public API.
//!
//! Generation is parallel (rayon) and cheap; the writes themselves go one
//! request at a time so a failing backend surfaces its own error message
//! instead of a half-parsed batch failure.

pub mod models;
pub mod staff;
pub mod structure;
pub mod students;

pub use models::{SeedConfig, StructurePlan};

use rollbook_api::ApiClient;
use rollbook_core::errors::AppError;
use std::time::Instant;

/// Seeds the whole dataset: structure first, then people.
pub async fn seed_all(api: &ApiClient, config: &SeedConfig) -> Result<(), AppError> {
    let start_time = Instant::now();

    let grade_ids = structure::seed_grades(api, config.structure.grades).await?;
    let house_ids = structure::seed_houses(api, config.structure.houses).await?;
    students::seed_students(api, &grade_ids, &house_ids, config.students_per_grade).await?;
    staff::seed_teachers(api, config.teachers).await?;

    println!("✅ Seeding finished in {:?}", start_time.elapsed());
    Ok(())
}

/// Deletes every student. Grades, houses, and staff are left alone.
pub async fn clear_students(api: &ApiClient) -> Result<usize, AppError> {
    use rollbook_core::pagination::Paginated;
    use rollbook_models::students::Student;

    let mut removed = 0;
    loop {
        let page: Paginated<Student> = api
            .get_with_query("/students", &[("page", "1"), ("limit", "100")])
            .await?;
        if page.data.is_empty() {
            break;
        }
        for student in page.data {
            api.delete(&format!("/students/{}", student.id)).await?;
            removed += 1;
        }
    }

    println!("🧹 Removed {} students", removed);
    Ok(removed)
}
