//! Seeds the school structure: the grade ladder and the houses.

use rollbook_api::ApiClient;
use rollbook_core::errors::AppError;
use rollbook_models::grades::{CreateGradeDto, Grade};
use rollbook_models::houses::{CreateHouseDto, House};
use rollbook_models::ids::{GradeId, HouseId};
use std::time::Instant;

const SINHALA_ORDINALS: [&str; 10] = [
    "1 ශ්‍රේණිය",
    "2 ශ්‍රේණිය",
    "3 ශ්‍රේණිය",
    "4 ශ්‍රේණිය",
    "5 ශ්‍රේණිය",
    "6 ශ්‍රේණිය",
    "7 ශ්‍රේණිය",
    "8 ශ්‍රේණිය",
    "9 ශ්‍රේණිය",
    "10 ශ්‍රේණිය",
];

const HOUSE_NAMES: [(&str, &str, &str); 4] = [
    ("Mahasen", "මහසෙන්", "blue"),
    ("Gemunu", "ගැමුණු", "red"),
    ("Parakum", "පරාක්‍රම", "yellow"),
    ("Tissa", "තිස්ස", "green"),
];

/// Generates the grade ladder DTOs.
pub fn generate_grades(count: usize) -> Vec<CreateGradeDto> {
    (1..=count)
        .map(|ordinal| CreateGradeDto {
            name_en: format!("Grade {}", ordinal),
            name_si: SINHALA_ORDINALS
                .get(ordinal - 1)
                .map(|s| s.to_string())
                .unwrap_or_else(|| format!("{} ශ්‍රේණිය", ordinal)),
            ordinal: ordinal as i32,
        })
        .collect()
}

/// Generates house DTOs from the fixed name pool.
pub fn generate_houses(count: usize) -> Vec<CreateHouseDto> {
    (0..count)
        .map(|i| {
            let (name_en, name_si, color) = HOUSE_NAMES[i % HOUSE_NAMES.len()];
            CreateHouseDto {
                name_en: name_en.to_string(),
                name_si: name_si.to_string(),
                color: Some(color.to_string()),
            }
        })
        .collect()
}

/// Seeds grades through the API, returning the created IDs.
pub async fn seed_grades(api: &ApiClient, count: usize) -> Result<Vec<GradeId>, AppError> {
    let start_time = Instant::now();
    println!("📚 Seeding {} grades...", count);

    let mut grade_ids = Vec::with_capacity(count);
    for dto in generate_grades(count) {
        let grade: Grade = api.post("/grades", &dto).await?;
        grade_ids.push(grade.id);
    }

    println!(
        "   ✓ Created {} grades in {:?}",
        grade_ids.len(),
        start_time.elapsed()
    );
    Ok(grade_ids)
}

/// Seeds houses through the API, returning the created IDs.
pub async fn seed_houses(api: &ApiClient, count: usize) -> Result<Vec<HouseId>, AppError> {
    let start_time = Instant::now();
    println!("🏠 Seeding {} houses...", count);

    let mut house_ids = Vec::with_capacity(count);
    for dto in generate_houses(count) {
        let house: House = api.post("/houses", &dto).await?;
        house_ids.push(house.id);
    }

    println!(
        "   ✓ Created {} houses in {:?}",
        house_ids.len(),
        start_time.elapsed()
    );
    Ok(house_ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_is_ordered_and_bilingual() {
        let grades = generate_grades(10);
        assert_eq!(grades.len(), 10);
        assert_eq!(grades[0].name_en, "Grade 1");
        assert_eq!(grades[0].name_si, "1 ශ්‍රේණිය");
        assert_eq!(grades[9].ordinal, 10);
    }

    #[test]
    fn ladder_past_the_named_ordinals_still_generates() {
        let grades = generate_grades(12);
        assert_eq!(grades[11].name_si, "12 ශ්‍රේණිය");
    }

    #[test]
    fn house_pool_cycles() {
        let houses = generate_houses(6);
        assert_eq!(houses[0].name_en, "Mahasen");
        assert_eq!(houses[4].name_en, "Mahasen");
    }
}
