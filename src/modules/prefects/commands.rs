use crate::modules::prefects::model::{AppointPrefectDto, PrefectRank, UpdatePrefectDto};
use crate::modules::prefects::service::PrefectService;
use crate::state::AppState;
use crate::utils::prompt::confirm_destructive;
use crate::utils::render::Table;
use crate::validator::validate_dto;
use clap::Subcommand;
use rollbook_core::errors::AppError;
use rollbook_core::search::group_by_key;
use rollbook_models::ids::{PrefectId, StudentId};

fn parse_rank(s: &str) -> Result<PrefectRank, String> {
    match s {
        "head" => Ok(PrefectRank::Head),
        "deputy" => Ok(PrefectRank::Deputy),
        "senior" => Ok(PrefectRank::Senior),
        "junior" => Ok(PrefectRank::Junior),
        other => Err(format!(
            "unknown rank '{}', expected head|deputy|senior|junior",
            other
        )),
    }
}

#[derive(Debug, Subcommand)]
pub enum PrefectsCommand {
    /// List appointments grouped by rank, optionally for one year
    List {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Appoint a student as a prefect
    Appoint {
        #[arg(long)]
        student: StudentId,
        #[arg(long, value_parser = parse_rank)]
        rank: PrefectRank,
        #[arg(long)]
        year: i32,
        /// Duty positions, e.g. "main gate" (repeatable)
        #[arg(long = "duty")]
        duties: Vec<String>,
    },
    /// Change an appointment's rank or duties
    Update {
        id: PrefectId,
        #[arg(long, value_parser = parse_rank)]
        rank: Option<PrefectRank>,
        #[arg(long = "duty")]
        duties: Vec<String>,
    },
    /// Remove an appointment
    Remove {
        id: PrefectId,
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(state: &AppState, command: PrefectsCommand) -> Result<(), AppError> {
    match command {
        PrefectsCommand::List { year } => {
            let prefects = PrefectService::list(&state.api, year).await?;
            if prefects.is_empty() {
                println!("No prefects appointed.");
                return Ok(());
            }

            for (rank, group) in group_by_key(prefects, |p| p.rank) {
                println!("\n{}", rank.label());
                let mut table = Table::new(&["ID", "Student", "Year", "Duties"]);
                for prefect in group {
                    table.row(vec![
                        prefect.id.to_string(),
                        prefect.student.display_label(),
                        prefect.appointed_year.to_string(),
                        prefect.duty_positions.join(", "),
                    ]);
                }
                table.print();
            }
            Ok(())
        }
        PrefectsCommand::Appoint {
            student,
            rank,
            year,
            duties,
        } => {
            let dto = AppointPrefectDto {
                student_id: student,
                rank,
                appointed_year: year,
                duty_positions: duties,
            };
            validate_dto(&dto)?;
            let prefect = PrefectService::appoint(&state.api, &dto).await?;
            println!(
                "Appointed {} as {} for {}",
                prefect.student.display_label(),
                prefect.rank,
                prefect.appointed_year
            );
            Ok(())
        }
        PrefectsCommand::Update { id, rank, duties } => {
            let dto = UpdatePrefectDto {
                rank,
                duty_positions: if duties.is_empty() { None } else { Some(duties) },
            };
            validate_dto(&dto)?;
            let prefect = PrefectService::update(&state.api, id, &dto).await?;
            println!("Updated appointment {} ({})", prefect.id, prefect.rank);
            Ok(())
        }
        PrefectsCommand::Remove { id, yes } => {
            if !confirm_destructive(&format!("Remove appointment {}?", id), yes)? {
                println!("Aborted.");
                return Ok(());
            }
            PrefectService::remove(&state.api, id).await?;
            println!("Removed appointment {}", id);
            Ok(())
        }
    }
}
