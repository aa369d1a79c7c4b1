use crate::modules::reports::service::ReportService;
use crate::state::AppState;
use crate::utils::render::{Table, or_dash};
use chrono::Datelike;
use clap::Subcommand;
use rollbook_core::calendar::month_range;
use rollbook_core::errors::AppError;
use rollbook_core::performance::PerformanceBand;
use rollbook_models::ids::ExamId;

#[derive(Debug, Subcommand)]
pub enum ReportsCommand {
    /// Per-grade attendance totals for a month
    Attendance {
        #[arg(long)]
        month: u32,
        #[arg(long)]
        year: i32,
    },
    /// Per-student exam percentages with performance bands
    ExamPerformance {
        #[arg(long)]
        exam: ExamId,
    },
    /// House standings for a competition year
    HousePoints {
        #[arg(long)]
        year: i32,
    },
}

pub async fn run(state: &AppState, command: ReportsCommand) -> Result<(), AppError> {
    match command {
        ReportsCommand::Attendance { month, year } => attendance(state, year, month).await,
        ReportsCommand::ExamPerformance { exam } => exam_performance(state, exam).await,
        ReportsCommand::HousePoints { year } => house_points(state, year).await,
    }
}

async fn attendance(state: &AppState, year: i32, month: u32) -> Result<(), AppError> {
    // Validate the selector before asking the backend for it.
    month_range(year, month).ok_or_else(|| AppError::validation("Month must be between 1 and 12"))?;

    let report = ReportService::attendance_summary(&state.api, year, month).await?;
    if report.grades.is_empty() {
        println!("No attendance recorded for {}-{:02}.", year, month);
        return Ok(());
    }

    println!("Attendance {}-{:02}", report.year, report.month);
    let mut table = Table::new(&["Grade", "Students", "Sundays", "Avg present"]);
    for row in &report.grades {
        let sundays = row.sundays.len() as i64;
        let avg = if sundays > 0 {
            row.sundays.iter().map(|s| s.present).sum::<i64>() as f64 / sundays as f64
        } else {
            0.0
        };
        table.row(vec![
            or_dash(row.grade.name_en()),
            row.total_students.to_string(),
            sundays.to_string(),
            format!("{:.1}", avg),
        ]);
    }
    table.print();

    for row in &report.grades {
        println!("\n{}", or_dash(row.grade.name_en()));
        let mut detail = Table::new(&["Sunday", "Present", "Out of"]);
        for sunday in &row.sundays {
            detail.row(vec![
                format!("{:02}", sunday.date.day()),
                sunday.present.to_string(),
                row.total_students.to_string(),
            ]);
        }
        detail.print();
    }
    Ok(())
}

async fn exam_performance(state: &AppState, exam: ExamId) -> Result<(), AppError> {
    let report = ReportService::exam_performance(&state.api, exam).await?;
    if report.rows.is_empty() {
        println!("No results recorded.");
        return Ok(());
    }

    println!("Exam: {}", or_dash(report.exam.name_en()));
    let mut table = Table::new(&["Student", "%", "Band"]);
    for row in &report.rows {
        let band = PerformanceBand::from_percentage(row.percentage);
        table.row(vec![
            row.student.display_label(),
            format!("{:.1}", row.percentage),
            band.label().to_string(),
        ]);
    }
    table.print();
    Ok(())
}

async fn house_points(state: &AppState, year: i32) -> Result<(), AppError> {
    let report = ReportService::house_points(&state.api, year).await?;
    if report.houses.is_empty() {
        println!("No points recorded for {}.", year);
        return Ok(());
    }

    let mut standings = report.houses;
    standings.sort_by(|a, b| b.points.cmp(&a.points));

    println!("House standings {}", report.year);
    let mut table = Table::new(&["#", "House", "Points"]);
    for (position, row) in standings.iter().enumerate() {
        table.row(vec![
            (position + 1).to_string(),
            or_dash(row.house.name_en()),
            row.points.to_string(),
        ]);
    }
    table.print();
    Ok(())
}
