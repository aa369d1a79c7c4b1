use crate::modules::attendance::{self, AttendanceCommand};
use crate::modules::competitions::{self, CompetitionsCommand};
use crate::modules::exams::{self, ExamsCommand};
use crate::modules::grades::{self, GradesCommand};
use crate::modules::houses::{self, HousesCommand};
use crate::modules::prefects::{self, PrefectsCommand};
use crate::modules::reports::{self, ReportsCommand};
use crate::modules::roles::{self, RolesCommand};
use crate::modules::sections::{self, SectionsCommand};
use crate::modules::staff::{self, StaffCommand};
use crate::modules::students::{self, StudentsCommand};
use crate::modules::users::{self, UsersCommand};
use crate::state::AppState;
use clap::{Parser, Subcommand};
use rollbook_core::errors::AppError;

#[derive(Parser)]
#[command(name = "rollbook")]
#[command(about = "Rollbook - school administration console", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage students
    #[command(subcommand)]
    Students(StudentsCommand),
    /// Manage the grade ladder
    #[command(subcommand)]
    Grades(GradesCommand),
    /// Manage sections
    #[command(subcommand)]
    Sections(SectionsCommand),
    /// Manage houses
    #[command(subcommand)]
    Houses(HousesCommand),
    /// Sunday attendance
    #[command(subcommand)]
    Attendance(AttendanceCommand),
    /// Manage exams and results
    #[command(subcommand)]
    Exams(ExamsCommand),
    /// Manage competitions and placings
    #[command(subcommand)]
    Competitions(CompetitionsCommand),
    /// Manage prefect appointments
    #[command(subcommand)]
    Prefects(PrefectsCommand),
    /// Manage teaching staff and staff roles
    #[command(subcommand)]
    Staff(StaffCommand),
    /// Administer application users
    #[command(subcommand)]
    Users(UsersCommand),
    /// Administer access roles
    #[command(subcommand)]
    Roles(RolesCommand),
    /// Read-only dashboards
    #[command(subcommand)]
    Reports(ReportsCommand),
}

pub async fn run(cli: Cli, state: &AppState) -> Result<(), AppError> {
    match cli.command {
        Commands::Students(cmd) => students::commands::run(state, cmd).await,
        Commands::Grades(cmd) => grades::commands::run(state, cmd).await,
        Commands::Sections(cmd) => sections::commands::run(state, cmd).await,
        Commands::Houses(cmd) => houses::commands::run(state, cmd).await,
        Commands::Attendance(cmd) => attendance::commands::run(state, cmd).await,
        Commands::Exams(cmd) => exams::commands::run(state, cmd).await,
        Commands::Competitions(cmd) => competitions::commands::run(state, cmd).await,
        Commands::Prefects(cmd) => prefects::commands::run(state, cmd).await,
        Commands::Staff(cmd) => staff::commands::run(state, cmd).await,
        Commands::Users(cmd) => users::commands::run(state, cmd).await,
        Commands::Roles(cmd) => roles::commands::run(state, cmd).await,
        Commands::Reports(cmd) => reports::commands::run(state, cmd).await,
    }
}
