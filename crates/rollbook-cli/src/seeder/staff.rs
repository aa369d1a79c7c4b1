//! Teacher seeding: generates fake teaching staff and registers them
//! through the API.

use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;
use rollbook_api::ApiClient;
use rollbook_core::errors::AppError;
use rollbook_models::ids::TeacherId;
use rollbook_models::staff::{CreateTeacherDto, Teacher};
use std::time::Instant;

const SINHALA_NAMES: [&str; 4] = [
    "කේ. ජයසූරිය",
    "එස්. විජේරත්න",
    "එම්. දිසානායක",
    "ආර්. හේරත්",
];

/// Generates teacher DTOs in parallel.
pub fn generate_teachers(count: usize) -> Vec<CreateTeacherDto> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first: String = FirstName().fake();
            let last: String = LastName().fake();

            CreateTeacherDto {
                name_en: format!("{} {}", first, last),
                name_si: SINHALA_NAMES[idx % SINHALA_NAMES.len()].to_string(),
                email: Some(SafeEmail().fake()),
                phone: Some(format!("07{}{:07}", idx % 8 + 1, (idx + 1) * 6271 % 10_000_000)),
                role_ids: vec![],
            }
        })
        .collect()
}

/// Seeds teachers through the API, returning the created IDs.
pub async fn seed_teachers(api: &ApiClient, count: usize) -> Result<Vec<TeacherId>, AppError> {
    let start_time = Instant::now();
    println!("🧑‍🏫 Seeding {} teachers...", count);

    let mut teacher_ids = Vec::with_capacity(count);
    for dto in generate_teachers(count) {
        let teacher: Teacher = api.post("/teachers", &dto).await?;
        teacher_ids.push(teacher.id);
    }

    println!(
        "   ✓ Created {} teachers in {:?}",
        teacher_ids.len(),
        start_time.elapsed()
    );
    Ok(teacher_ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn generated_teachers_pass_their_own_validation() {
        for dto in generate_teachers(10) {
            assert!(dto.validate().is_ok(), "invalid seed dto: {:?}", dto);
        }
    }
}
