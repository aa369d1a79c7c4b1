//! Student seeding: generates fake students and registers them through
//! the API.

use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;
use rollbook_api::ApiClient;
use rollbook_core::errors::AppError;
use rollbook_models::ids::{GradeId, HouseId, StudentId};
use rollbook_models::students::{CreateStudentDto, Student};
use std::time::Instant;

const SINHALA_NAMES: [&str; 8] = [
    "අමල් පෙරේරා",
    "නිමල් සිල්වා",
    "කමල් ප්‍රනාන්දු",
    "සුනිල් බණ්ඩාර",
    "චමරි ජයසිංහ",
    "දිලිනි වීරසිංහ",
    "තරිඳු ගුණවර්ධන",
    "සඳුනි රත්නායක",
];

/// Generates student DTOs in parallel, spread evenly across the grades
/// and cycled through the houses.
pub fn generate_students(
    grade_ids: &[GradeId],
    house_ids: &[HouseId],
    per_grade: usize,
) -> Vec<CreateStudentDto> {
    grade_ids
        .par_iter()
        .enumerate()
        .flat_map(|(grade_idx, &grade_id)| {
            (0..per_grade)
                .map(|student_idx| {
                    let serial = grade_idx * per_grade + student_idx + 1;
                    let first: String = FirstName().fake();
                    let last: String = LastName().fake();

                    CreateStudentDto {
                        admission_no: format!("STU-{:04}", serial),
                        name_en: format!("{} {}", first, last),
                        name_si: SINHALA_NAMES[serial % SINHALA_NAMES.len()].to_string(),
                        date_of_birth: chrono::NaiveDate::from_ymd_opt(
                            2016 - grade_idx as i32,
                            (student_idx % 12) as u32 + 1,
                            (student_idx % 28) as u32 + 1,
                        ),
                        guardian_name: Some(format!("{} {}", FirstName().fake::<String>(), last)),
                        phone: Some(format!("07{}{:07}", serial % 8 + 1, serial * 7919 % 10_000_000)),
                        grade_id,
                        house_id: house_ids
                            .get(serial % house_ids.len().max(1))
                            .copied(),
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Seeds students through the API, returning the created IDs.
pub async fn seed_students(
    api: &ApiClient,
    grade_ids: &[GradeId],
    house_ids: &[HouseId],
    per_grade: usize,
) -> Result<Vec<StudentId>, AppError> {
    let start_time = Instant::now();
    let dtos = generate_students(grade_ids, house_ids, per_grade);
    println!("🎒 Seeding {} students...", dtos.len());

    let mut student_ids = Vec::with_capacity(dtos.len());
    for dto in &dtos {
        let student: Student = api.post("/students", dto).await?;
        student_ids.push(student.id);
    }

    println!(
        "   ✓ Created {} students in {:?}",
        student_ids.len(),
        start_time.elapsed()
    );
    Ok(student_ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn students_spread_across_grades_with_unique_admission_numbers() {
        let grades = vec![GradeId::new(), GradeId::new()];
        let houses = vec![HouseId::new(), HouseId::new()];
        let students = generate_students(&grades, &houses, 5);

        assert_eq!(students.len(), 10);

        let mut admission_numbers: Vec<_> =
            students.iter().map(|s| s.admission_no.clone()).collect();
        admission_numbers.sort();
        admission_numbers.dedup();
        assert_eq!(admission_numbers.len(), 10);

        assert!(students.iter().all(|s| s.house_id.is_some()));
        assert_eq!(
            students.iter().filter(|s| s.grade_id == grades[0]).count(),
            5
        );
    }

    #[test]
    fn generated_students_pass_their_own_validation() {
        use validator::Validate;

        let grades = vec![GradeId::new()];
        let houses = vec![HouseId::new()];
        for dto in generate_students(&grades, &houses, 30) {
            assert!(dto.validate().is_ok(), "invalid seed dto: {:?}", dto);
        }
    }
}
