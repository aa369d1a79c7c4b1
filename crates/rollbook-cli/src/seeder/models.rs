//! Configuration structures for controlling how fake data is generated
//! during seeding runs.

/// Configuration for the school structure.
#[derive(Clone)]
pub struct StructurePlan {
    /// Number of grades in the ladder, named "Grade 1".."Grade N".
    pub grades: usize,
    /// Houses to create; the fixed default set is used when empty.
    pub houses: usize,
}

impl Default for StructurePlan {
    fn default() -> Self {
        Self {
            grades: 10,
            houses: 4,
        }
    }
}

/// Complete configuration for a seeding run.
#[derive(Clone)]
pub struct SeedConfig {
    pub structure: StructurePlan,
    pub students_per_grade: usize,
    pub teachers: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            structure: StructurePlan::default(),
            students_per_grade: 25,
            teachers: 12,
        }
    }
}
