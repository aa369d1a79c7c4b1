use crate::modules::grades::model::{CreateGradeDto, UpdateGradeDto};
use crate::modules::grades::service::GradeService;
use crate::state::AppState;
use crate::utils::prompt::{confirm_destructive, text_or_prompt};
use crate::utils::render::Table;
use crate::validator::validate_dto;
use clap::Subcommand;
use rollbook_core::errors::AppError;
use rollbook_models::ids::GradeId;

#[derive(Debug, Subcommand)]
pub enum GradesCommand {
    /// List the grade ladder
    List,
    /// Show one grade
    Get { id: GradeId },
    /// Add a grade
    Create {
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        name_si: Option<String>,
        #[arg(long)]
        ordinal: i32,
    },
    /// Update a grade
    Update {
        id: GradeId,
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        name_si: Option<String>,
        #[arg(long)]
        ordinal: Option<i32>,
    },
    /// Remove a grade
    Delete {
        id: GradeId,
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(state: &AppState, command: GradesCommand) -> Result<(), AppError> {
    match command {
        GradesCommand::List => {
            let mut grades = GradeService::list(&state.api).await?;
            grades.sort_by_key(|g| g.ordinal);

            if grades.is_empty() {
                println!("No grades defined.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "#", "Name", "නම"]);
            for grade in &grades {
                table.row(vec![
                    grade.id.to_string(),
                    grade.ordinal.to_string(),
                    grade.name_en.clone(),
                    grade.name_si.clone(),
                ]);
            }
            table.print();
            Ok(())
        }
        GradesCommand::Get { id } => {
            let grade = GradeService::get(&state.api, id).await?;
            println!("Name    : {}", grade.name_en);
            println!("නම      : {}", grade.name_si);
            println!("Ordinal : {}", grade.ordinal);
            Ok(())
        }
        GradesCommand::Create {
            name_en,
            name_si,
            ordinal,
        } => {
            let dto = CreateGradeDto {
                name_en: text_or_prompt(name_en, "Name (English)")?,
                name_si: text_or_prompt(name_si, "Name (Sinhala)")?,
                ordinal,
            };
            validate_dto(&dto)?;
            let grade = GradeService::create(&state.api, &dto).await?;
            println!("Created grade {} ({})", grade.name_en, grade.id);
            Ok(())
        }
        GradesCommand::Update {
            id,
            name_en,
            name_si,
            ordinal,
        } => {
            let dto = UpdateGradeDto {
                name_en,
                name_si,
                ordinal,
            };
            validate_dto(&dto)?;
            let grade = GradeService::update(&state.api, id, &dto).await?;
            println!("Updated grade {} ({})", grade.name_en, grade.id);
            Ok(())
        }
        GradesCommand::Delete { id, yes } => {
            if !confirm_destructive(&format!("Delete grade {}?", id), yes)? {
                println!("Aborted.");
                return Ok(());
            }
            GradeService::delete(&state.api, id).await?;
            println!("Deleted grade {}", id);
            Ok(())
        }
    }
}
