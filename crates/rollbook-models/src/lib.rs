//! # Rollbook Models
//!
//! The data dictionary of the rollbook console: typed IDs, entity records
//! as the backend returns them, and the create/update DTOs the screens
//! validate before submission.
//!
//! Records carry names in two languages (`name_en`, `name_si`). Foreign
//! keys arrive either as a bare ID or as a denormalized object, modeled as
//! untagged `*Ref` enums. Fields the backend does not always include are
//! `Option` with `#[serde(default)]`.
//!
//! # Modules
//!
//! - [`ids`]: strongly-typed ID newtypes
//! - [`grades`], [`sections`], [`houses`]: the school structure
//! - [`students`], [`staff`], [`prefects`]: people
//! - [`attendance`], [`exams`], [`competitions`]: records per activity
//! - [`users`], [`roles`]: application access administration
//! - [`reports`]: read-only aggregates the backend precomputes

pub mod attendance;
pub mod competitions;
pub mod exams;
pub mod grades;
pub mod houses;
pub mod ids;
pub mod prefects;
pub mod reports;
pub mod roles;
pub mod sections;
pub mod staff;
pub mod students;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use ids::{
    AttendanceId, CompetitionId, ExamId, GradeId, HouseId, PrefectId, RoleId, SectionId,
    StaffRoleId, StudentId, TeacherId, UserId,
};

pub use attendance::{Attendance, AttendanceFilter, AttendanceStatus, MarkAttendanceDto};
pub use competitions::{
    Competition, CompetitionCategory, CompetitionResult, CreateCompetitionDto, Place,
    RecordResultDto, UpdateCompetitionDto,
};
pub use exams::{CreateExamDto, Exam, ExamRef, ExamResult, UpdateExamDto};
pub use grades::{CreateGradeDto, Grade, GradeRef, UpdateGradeDto};
pub use houses::{CreateHouseDto, House, HouseRef, UpdateHouseDto};
pub use prefects::{AppointPrefectDto, Prefect, PrefectRank, UpdatePrefectDto};
pub use reports::{
    AttendanceSummaryReport, ExamPerformanceReport, GradeAttendanceRow, HousePointsReport,
    HousePointsRow, StudentPerformanceRow, SundayCount,
};
pub use roles::{CreateRoleDto, Role, RoleRef, UpdateRoleDto};
pub use sections::{CreateSectionDto, Section, UpdateSectionDto};
pub use staff::{
    CreateStaffRoleDto, CreateTeacherDto, SetMicDto, StaffRole, StaffRoleRef, Teacher,
    UpdateStaffRoleDto, UpdateTeacherDto,
};
pub use students::{
    AssignHouseDto, CreateStudentDto, Student, StudentRef, UpdateStudentDto,
};
pub use users::{AppUser, AssignRolesDto, CreateUserDto, UpdateUserDto};
