//! Strongly-typed ID newtypes for domain entities.
//!
//! Newtype wrappers around `Uuid` per entity, so a `StudentId` cannot be
//! handed to an endpoint expecting a `GradeId`.
//!
//! # Example
//!
//! ```ignore
//! use rollbook_models::ids::{GradeId, StudentId};
//!
//! fn fetch_student(id: StudentId) { /* ... */ }
//!
//! let student_id = StudentId::new();
//! fetch_student(student_id);          // OK
//! // fetch_student(GradeId::new());   // Compile error
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Defines a strongly-typed ID newtype with serde passthrough, display,
/// and string parsing (needed for CLI arguments).
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new random ID.
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from an existing UUID.
            #[inline]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Create an ID from a u128 value (useful for constants).
            #[inline]
            pub const fn from_u128(v: u128) -> Self {
                Self(Uuid::from_u128(v))
            }

            /// Get the inner UUID value.
            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }

            /// Get a reference to the inner UUID.
            #[inline]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifies a student.
    StudentId
);
define_id!(
    /// Identifies a grade (year-level cohort).
    GradeId
);
define_id!(
    /// Identifies a section (grouping of grades).
    SectionId
);
define_id!(
    /// Identifies a house.
    HouseId
);
define_id!(
    /// Identifies an attendance record.
    AttendanceId
);
define_id!(
    /// Identifies an exam.
    ExamId
);
define_id!(
    /// Identifies a competition.
    CompetitionId
);
define_id!(
    /// Identifies a teacher.
    TeacherId
);
define_id!(
    /// Identifies a staff role.
    StaffRoleId
);
define_id!(
    /// Identifies a prefect appointment.
    PrefectId
);
define_id!(
    /// Identifies an application user.
    UserId
);
define_id!(
    /// Identifies an access-control role.
    RoleId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_uuid_strings() {
        let id = StudentId::from_u128(7);
        let encoded = serde_json::to_string(&id).unwrap();
        assert_eq!(encoded, format!("\"{}\"", id.0));

        let decoded: StudentId = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, id);
    }

    #[test]
    fn ids_parse_from_strings() {
        let id = GradeId::new();
        let parsed: GradeId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);

        assert!("not-a-uuid".parse::<GradeId>().is_err());
    }
}
