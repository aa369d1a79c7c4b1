use crate::modules::sections::model::{CreateSectionDto, UpdateSectionDto};
use crate::modules::sections::service::SectionService;
use crate::state::AppState;
use crate::utils::prompt::{confirm_destructive, text_or_prompt};
use crate::utils::render::Table;
use crate::validator::validate_dto;
use clap::Subcommand;
use rollbook_core::errors::AppError;
use rollbook_models::ids::{GradeId, SectionId};

#[derive(Debug, Subcommand)]
pub enum SectionsCommand {
    /// List sections
    List,
    /// Show one section
    Get { id: SectionId },
    /// Add a section covering one or more grades
    Create {
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        name_si: Option<String>,
        /// Grades the section covers (repeatable)
        #[arg(long = "grade", required = true)]
        grades: Vec<GradeId>,
    },
    /// Update a section; passing --grade replaces the membership
    Update {
        id: SectionId,
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        name_si: Option<String>,
        #[arg(long = "grade")]
        grades: Vec<GradeId>,
    },
    /// Remove a section
    Delete {
        id: SectionId,
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(state: &AppState, command: SectionsCommand) -> Result<(), AppError> {
    match command {
        SectionsCommand::List => {
            let sections = SectionService::list(&state.api).await?;
            if sections.is_empty() {
                println!("No sections defined.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "Name", "නම", "Grades"]);
            for section in &sections {
                table.row(vec![
                    section.id.to_string(),
                    section.name_en.clone(),
                    section.name_si.clone(),
                    section.grade_ids.len().to_string(),
                ]);
            }
            table.print();
            Ok(())
        }
        SectionsCommand::Get { id } => {
            let section = SectionService::get(&state.api, id).await?;
            println!("Name   : {}", section.name_en);
            println!("නම     : {}", section.name_si);
            println!("Grades :");
            for grade_id in &section.grade_ids {
                println!("  {}", grade_id);
            }
            Ok(())
        }
        SectionsCommand::Create {
            name_en,
            name_si,
            grades,
        } => {
            let dto = CreateSectionDto {
                name_en: text_or_prompt(name_en, "Name (English)")?,
                name_si: text_or_prompt(name_si, "Name (Sinhala)")?,
                grade_ids: grades,
            };
            validate_dto(&dto)?;
            let section = SectionService::create(&state.api, &dto).await?;
            println!("Created section {} ({})", section.name_en, section.id);
            Ok(())
        }
        SectionsCommand::Update {
            id,
            name_en,
            name_si,
            grades,
        } => {
            let dto = UpdateSectionDto {
                name_en,
                name_si,
                grade_ids: if grades.is_empty() {
                    None
                } else {
                    Some(grades)
                },
            };
            validate_dto(&dto)?;
            let section = SectionService::update(&state.api, id, &dto).await?;
            println!("Updated section {} ({})", section.name_en, section.id);
            Ok(())
        }
        SectionsCommand::Delete { id, yes } => {
            if !confirm_destructive(&format!("Delete section {}?", id), yes)? {
                println!("Aborted.");
                return Ok(());
            }
            SectionService::delete(&state.api, id).await?;
            println!("Deleted section {}", id);
            Ok(())
        }
    }
}
