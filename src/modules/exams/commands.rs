use crate::modules::exams::model::{CreateExamDto, UpdateExamDto};
use crate::modules::exams::service::ExamService;
use crate::state::AppState;
use crate::utils::prompt::{confirm_destructive, text_or_prompt};
use crate::utils::render::{Table, or_dash};
use crate::validator::validate_dto;
use chrono::NaiveDate;
use clap::Subcommand;
use rollbook_core::errors::AppError;
use rollbook_core::performance::PerformanceBand;
use rollbook_models::ids::{ExamId, GradeId};

#[derive(Debug, Subcommand)]
pub enum ExamsCommand {
    /// List exams, optionally for one year
    List {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Show one exam
    Get { id: ExamId },
    /// Add an exam
    Create {
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        name_si: Option<String>,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        grade: GradeId,
        #[arg(long)]
        held_on: Option<NaiveDate>,
    },
    /// Update an exam
    Update {
        id: ExamId,
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        name_si: Option<String>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        held_on: Option<NaiveDate>,
    },
    /// Remove an exam
    Delete {
        id: ExamId,
        #[arg(long)]
        yes: bool,
    },
    /// Per-student results with performance bands
    Results { id: ExamId },
}

pub async fn run(state: &AppState, command: ExamsCommand) -> Result<(), AppError> {
    match command {
        ExamsCommand::List { year } => {
            let exams = ExamService::list(&state.api, year).await?;
            if exams.is_empty() {
                println!("No exams found.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "Name", "නම", "Year", "Grade", "Held on"]);
            for exam in &exams {
                table.row(vec![
                    exam.id.to_string(),
                    exam.name_en.clone(),
                    exam.name_si.clone(),
                    exam.year.to_string(),
                    or_dash(exam.grade.as_ref().and_then(|g| g.name_en())),
                    or_dash(exam.held_on.map(|d| d.to_string()).as_deref()),
                ]);
            }
            table.print();
            Ok(())
        }
        ExamsCommand::Get { id } => {
            let exam = ExamService::get(&state.api, id).await?;
            println!("Name    : {}", exam.name_en);
            println!("නම      : {}", exam.name_si);
            println!("Year    : {}", exam.year);
            println!(
                "Grade   : {}",
                or_dash(exam.grade.as_ref().and_then(|g| g.name_en()))
            );
            println!(
                "Held on : {}",
                or_dash(exam.held_on.map(|d| d.to_string()).as_deref())
            );
            Ok(())
        }
        ExamsCommand::Create {
            name_en,
            name_si,
            year,
            grade,
            held_on,
        } => {
            let dto = CreateExamDto {
                name_en: text_or_prompt(name_en, "Name (English)")?,
                name_si: text_or_prompt(name_si, "Name (Sinhala)")?,
                year,
                grade_id: grade,
                held_on,
            };
            validate_dto(&dto)?;
            let exam = ExamService::create(&state.api, &dto).await?;
            println!("Created exam {} ({})", exam.name_en, exam.id);
            Ok(())
        }
        ExamsCommand::Update {
            id,
            name_en,
            name_si,
            year,
            held_on,
        } => {
            let dto = UpdateExamDto {
                name_en,
                name_si,
                year,
                held_on,
            };
            validate_dto(&dto)?;
            let exam = ExamService::update(&state.api, id, &dto).await?;
            println!("Updated exam {} ({})", exam.name_en, exam.id);
            Ok(())
        }
        ExamsCommand::Delete { id, yes } => {
            if !confirm_destructive(&format!("Delete exam {}?", id), yes)? {
                println!("Aborted.");
                return Ok(());
            }
            ExamService::delete(&state.api, id).await?;
            println!("Deleted exam {}", id);
            Ok(())
        }
        ExamsCommand::Results { id } => {
            let results = ExamService::results(&state.api, id).await?;
            if results.is_empty() {
                println!("No results recorded.");
                return Ok(());
            }

            let mut table = Table::new(&["Student", "%", "Band"]);
            for result in &results {
                let band = PerformanceBand::from_percentage(result.percentage);
                table.row(vec![
                    result.student.display_label(),
                    format!("{:.1}", result.percentage),
                    band.label().to_string(),
                ]);
            }
            table.print();
            Ok(())
        }
    }
}
