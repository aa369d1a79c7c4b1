use crate::modules::attendance::model::{AttendanceFilter, MarkAttendanceDto, build_sheet};
use crate::modules::attendance::service::AttendanceService;
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::utils::render::Table;
use crate::validator::validate_dto;
use chrono::{Datelike, Local, NaiveDate};
use clap::Subcommand;
use dialoguer::MultiSelect;
use rollbook_core::attendance::{check_marking, default_marking_date};
use rollbook_core::calendar::{month_range, sundays_in_month};
use rollbook_core::errors::AppError;
use rollbook_core::pagination::PageQuery;
use rollbook_models::ids::{GradeId, StudentId};

#[derive(Debug, Subcommand)]
pub enum AttendanceCommand {
    /// Show the preselected marking date and whether marking is open
    Status {
        /// Check a specific date instead of the preselected one
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Mark students present for a Sunday
    Mark {
        /// Target date; defaults to the preselected Sunday
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Grade to pick students from interactively
        #[arg(long)]
        grade: Option<GradeId>,
        /// Students to mark directly (repeatable)
        #[arg(long = "student")]
        students: Vec<StudentId>,
    },
    /// Monthly sheet: one row per student, one column per Sunday
    Sheet {
        #[arg(long)]
        month: u32,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        grade: Option<GradeId>,
    },
}

pub async fn run(state: &AppState, command: AttendanceCommand) -> Result<(), AppError> {
    match command {
        AttendanceCommand::Status { date } => status(date),
        AttendanceCommand::Mark {
            date,
            grade,
            students,
        } => mark(state, date, grade, students).await,
        AttendanceCommand::Sheet { month, year, grade } => {
            sheet(state, month, year, grade).await
        }
    }
}

fn status(date: Option<NaiveDate>) -> Result<(), AppError> {
    let now = Local::now().naive_local();
    let target = date.unwrap_or_else(|| default_marking_date(now));
    let decision = check_marking(target, now);

    println!("Marking date : {}", target);
    if decision.can_mark {
        println!("Status       : open");
    } else {
        println!("Status       : closed");
        if let Some(reason) = decision.reason {
            println!("Reason       : {}", reason);
        }
    }
    Ok(())
}

async fn mark(
    state: &AppState,
    date: Option<NaiveDate>,
    grade: Option<GradeId>,
    students: Vec<StudentId>,
) -> Result<(), AppError> {
    let now = Local::now().naive_local();
    let target = date.unwrap_or_else(|| default_marking_date(now));

    let decision = check_marking(target, now);
    if !decision.can_mark {
        return Err(AppError::validation(
            decision.reason.unwrap_or_else(|| "Marking is closed.".to_string()),
        ));
    }

    let student_ids = if students.is_empty() {
        select_students(state, grade).await?
    } else {
        students
    };

    let dto = MarkAttendanceDto {
        student_ids,
        date: target,
    };
    validate_dto(&dto)?;

    let outcome = AttendanceService::mark(&state.api, &dto).await?;
    println!(
        "Marked {} student(s) present for {} ({} already recorded)",
        outcome.marked, target, outcome.skipped
    );
    Ok(())
}

/// Fetches a grade's students and lets the operator tick off who is
/// present.
async fn select_students(
    state: &AppState,
    grade: Option<GradeId>,
) -> Result<Vec<StudentId>, AppError> {
    let grade =
        grade.ok_or_else(|| AppError::validation("Pass --grade or --student to choose students"))?;

    let page = StudentService::list(
        &state.api,
        PageQuery::new(Some(1), Some(100)),
        Some(grade),
    )
    .await?;

    if page.data.is_empty() {
        return Err(AppError::not_found("No students in the selected grade"));
    }

    let labels: Vec<String> = page
        .data
        .iter()
        .map(|s| format!("{} {}", s.admission_no, s.name_en))
        .collect();

    let picked = MultiSelect::new()
        .with_prompt("Students present (space to toggle, enter to submit)")
        .items(&labels)
        .interact()
        .map_err(AppError::internal)?;

    if picked.is_empty() {
        return Err(AppError::validation("No students selected"));
    }

    Ok(picked.into_iter().map(|i| page.data[i].id).collect())
}

async fn sheet(
    state: &AppState,
    month: u32,
    year: i32,
    grade: Option<GradeId>,
) -> Result<(), AppError> {
    let (from, to) = month_range(year, month)
        .ok_or_else(|| AppError::validation("Month must be between 1 and 12"))?;
    let sundays = sundays_in_month(year, month);

    let filter = AttendanceFilter {
        grade_id: grade,
        date: None,
        from: Some(from),
        to: Some(to),
    };
    let records = AttendanceService::list(&state.api, &filter).await?;

    if records.is_empty() {
        println!("No attendance recorded for {}-{:02}.", year, month);
        return Ok(());
    }

    let mut headers: Vec<String> = vec!["Student".to_string()];
    headers.extend(sundays.iter().map(|s| format!("{:02}", s.day())));
    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();

    for block in build_sheet(records, &sundays) {
        println!("\n{}", block.grade_label);
        let mut table = Table::new(&header_refs);
        for row in block.rows {
            let mut cells = vec![row.student_label];
            cells.extend(
                row.present
                    .iter()
                    .map(|p| if *p { "✓" } else { "·" })
                    .map(str::to_string),
            );
            table.row(cells);
        }
        table.print();
    }
    Ok(())
}
