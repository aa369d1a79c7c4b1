use crate::modules::competitions::model::{
    CompetitionCategory, CreateCompetitionDto, Place, RecordResultDto, UpdateCompetitionDto,
};
use crate::modules::competitions::service::CompetitionService;
use crate::state::AppState;
use crate::utils::prompt::{confirm_destructive, text_or_prompt};
use crate::utils::render::{Table, or_dash};
use crate::validator::validate_dto;
use clap::Subcommand;
use rollbook_core::errors::AppError;
use rollbook_models::ids::{CompetitionId, HouseId, StudentId};

fn parse_category(s: &str) -> Result<CompetitionCategory, String> {
    match s {
        "individual" => Ok(CompetitionCategory::Individual),
        "house" => Ok(CompetitionCategory::House),
        other => Err(format!("unknown category '{}', expected individual|house", other)),
    }
}

fn parse_place(s: &str) -> Result<Place, String> {
    match s {
        "first" | "1" => Ok(Place::First),
        "second" | "2" => Ok(Place::Second),
        "third" | "3" => Ok(Place::Third),
        other => Err(format!("unknown place '{}', expected first|second|third", other)),
    }
}

#[derive(Debug, Subcommand)]
pub enum CompetitionsCommand {
    /// List competitions, optionally for one year
    List {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Add a competition
    Create {
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        name_si: Option<String>,
        #[arg(long)]
        year: i32,
        #[arg(long, value_parser = parse_category)]
        category: CompetitionCategory,
    },
    /// Update a competition
    Update {
        id: CompetitionId,
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        name_si: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long, value_parser = parse_category)]
        category: Option<CompetitionCategory>,
    },
    /// Remove a competition
    Delete {
        id: CompetitionId,
        #[arg(long)]
        yes: bool,
    },
    /// Record a placing; points default from the place
    RecordResult {
        id: CompetitionId,
        #[arg(long)]
        student: StudentId,
        #[arg(long)]
        house: Option<HouseId>,
        #[arg(long, value_parser = parse_place)]
        place: Place,
        #[arg(long)]
        points: Option<i32>,
    },
    /// List recorded results
    Results { id: CompetitionId },
}

pub async fn run(state: &AppState, command: CompetitionsCommand) -> Result<(), AppError> {
    match command {
        CompetitionsCommand::List { year } => {
            let competitions = CompetitionService::list(&state.api, year).await?;
            if competitions.is_empty() {
                println!("No competitions found.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "Name", "නම", "Year", "Category"]);
            for competition in &competitions {
                let category = match competition.category {
                    CompetitionCategory::Individual => "individual",
                    CompetitionCategory::House => "house",
                };
                table.row(vec![
                    competition.id.to_string(),
                    competition.name_en.clone(),
                    competition.name_si.clone(),
                    competition.year.to_string(),
                    category.to_string(),
                ]);
            }
            table.print();
            Ok(())
        }
        CompetitionsCommand::Create {
            name_en,
            name_si,
            year,
            category,
        } => {
            let dto = CreateCompetitionDto {
                name_en: text_or_prompt(name_en, "Name (English)")?,
                name_si: text_or_prompt(name_si, "Name (Sinhala)")?,
                year,
                category,
            };
            validate_dto(&dto)?;
            let competition = CompetitionService::create(&state.api, &dto).await?;
            println!("Created competition {} ({})", competition.name_en, competition.id);
            Ok(())
        }
        CompetitionsCommand::Update {
            id,
            name_en,
            name_si,
            year,
            category,
        } => {
            let dto = UpdateCompetitionDto {
                name_en,
                name_si,
                year,
                category,
            };
            validate_dto(&dto)?;
            let competition = CompetitionService::update(&state.api, id, &dto).await?;
            println!("Updated competition {} ({})", competition.name_en, competition.id);
            Ok(())
        }
        CompetitionsCommand::Delete { id, yes } => {
            if !confirm_destructive(&format!("Delete competition {}?", id), yes)? {
                println!("Aborted.");
                return Ok(());
            }
            CompetitionService::delete(&state.api, id).await?;
            println!("Deleted competition {}", id);
            Ok(())
        }
        CompetitionsCommand::RecordResult {
            id,
            student,
            house,
            place,
            points,
        } => {
            let dto = RecordResultDto {
                student_id: student,
                house_id: house,
                place,
                points: points.unwrap_or_else(|| place.default_points()),
            };
            validate_dto(&dto)?;
            let result = CompetitionService::record_result(&state.api, id, &dto).await?;
            println!(
                "Recorded {} for {} ({} points)",
                result.student.display_label(),
                id,
                result.points
            );
            Ok(())
        }
        CompetitionsCommand::Results { id } => {
            let results = CompetitionService::results(&state.api, id).await?;
            if results.is_empty() {
                println!("No results recorded.");
                return Ok(());
            }

            let mut table = Table::new(&["Student", "House", "Place", "Points"]);
            for result in &results {
                let place = match result.place {
                    Place::First => "1st",
                    Place::Second => "2nd",
                    Place::Third => "3rd",
                };
                table.row(vec![
                    result.student.display_label(),
                    or_dash(result.house.as_ref().and_then(|h| h.name_en())),
                    place.to_string(),
                    result.points.to_string(),
                ]);
            }
            table.print();
            Ok(())
        }
    }
}
