use crate::modules::students::model::{
    AssignHouseDto, CreateStudentDto, Student, UpdateStudentDto,
};
use crate::modules::students::service::StudentService;
use crate::state::AppState;
use crate::utils::prompt::{confirm_destructive, optional_text_or_prompt, text_or_prompt};
use crate::utils::render::{Table, or_dash, print_meta};
use crate::validator::validate_dto;
use chrono::NaiveDate;
use clap::Subcommand;
use rollbook_core::errors::AppError;
use rollbook_core::pagination::PageQuery;
use rollbook_core::search::matches_query;
use rollbook_models::ids::{GradeId, HouseId, StudentId};

#[derive(Debug, Subcommand)]
pub enum StudentsCommand {
    /// List students, optionally narrowed by a search term and grade
    List {
        /// Case-insensitive match against names and admission number
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        grade: Option<GradeId>,
        #[arg(long)]
        page: Option<i64>,
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Show one student
    Get { id: StudentId },
    /// Register a student (prompts for fields not given as flags)
    Create {
        #[arg(long)]
        admission_no: Option<String>,
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        name_si: Option<String>,
        #[arg(long)]
        date_of_birth: Option<NaiveDate>,
        #[arg(long)]
        guardian: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        grade: GradeId,
        #[arg(long)]
        house: Option<HouseId>,
    },
    /// Update a student; only the given fields change
    Update {
        id: StudentId,
        #[arg(long)]
        admission_no: Option<String>,
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        name_si: Option<String>,
        #[arg(long)]
        date_of_birth: Option<NaiveDate>,
        #[arg(long)]
        guardian: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        grade: Option<GradeId>,
    },
    /// Remove a student
    Delete {
        id: StudentId,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Assign the student to a house for a competition year
    AssignHouse {
        id: StudentId,
        #[arg(long)]
        house: HouseId,
        #[arg(long)]
        year: i32,
    },
}

pub async fn run(state: &AppState, command: StudentsCommand) -> Result<(), AppError> {
    match command {
        StudentsCommand::List {
            search,
            grade,
            page,
            limit,
        } => list_students(state, search, grade, page, limit).await,
        StudentsCommand::Get { id } => get_student(state, id).await,
        StudentsCommand::Create {
            admission_no,
            name_en,
            name_si,
            date_of_birth,
            guardian,
            phone,
            grade,
            house,
        } => {
            let dto = CreateStudentDto {
                admission_no: text_or_prompt(admission_no, "Admission number")?,
                name_en: text_or_prompt(name_en, "Name (English)")?,
                name_si: text_or_prompt(name_si, "Name (Sinhala)")?,
                date_of_birth,
                guardian_name: optional_text_or_prompt(guardian, "Guardian name")?,
                phone: optional_text_or_prompt(phone, "Phone")?,
                grade_id: grade,
                house_id: house,
            };
            create_student(state, dto).await
        }
        StudentsCommand::Update {
            id,
            admission_no,
            name_en,
            name_si,
            date_of_birth,
            guardian,
            phone,
            grade,
        } => {
            let dto = UpdateStudentDto {
                admission_no,
                name_en,
                name_si,
                date_of_birth,
                guardian_name: guardian,
                phone,
                grade_id: grade,
            };
            update_student(state, id, dto).await
        }
        StudentsCommand::Delete { id, yes } => delete_student(state, id, yes).await,
        StudentsCommand::AssignHouse { id, house, year } => {
            let dto = AssignHouseDto {
                house_id: house,
                year,
            };
            assign_house(state, id, dto).await
        }
    }
}

async fn list_students(
    state: &AppState,
    search: Option<String>,
    grade: Option<GradeId>,
    page: Option<i64>,
    limit: Option<i64>,
) -> Result<(), AppError> {
    let result = StudentService::list(&state.api, PageQuery::new(page, limit), grade).await?;

    let needle = search.unwrap_or_default();
    let visible: Vec<&Student> = result
        .data
        .iter()
        .filter(|s| matches_query(&s.search_fields(), &needle))
        .collect();

    if visible.is_empty() {
        println!("No students found.");
        return Ok(());
    }

    let mut table = Table::new(&["ID", "Admission", "Name", "නම", "Grade", "House"]);
    for student in visible {
        table.row(vec![
            student.id.to_string(),
            student.admission_no.clone(),
            student.name_en.clone(),
            student.name_si.clone(),
            or_dash(student.grade.as_ref().and_then(|g| g.name_en())),
            or_dash(student.house.as_ref().and_then(|h| h.name_en())),
        ]);
    }
    table.print();
    print_meta(&result.meta);
    Ok(())
}

async fn get_student(state: &AppState, id: StudentId) -> Result<(), AppError> {
    let student = StudentService::get(&state.api, id).await?;

    println!("Admission : {}", student.admission_no);
    println!("Name      : {}", student.name_en);
    println!("නම        : {}", student.name_si);
    println!(
        "Born      : {}",
        or_dash(student.date_of_birth.map(|d| d.to_string()).as_deref())
    );
    println!("Guardian  : {}", or_dash(student.guardian_name.as_deref()));
    println!("Phone     : {}", or_dash(student.phone.as_deref()));
    println!(
        "Grade     : {}",
        or_dash(student.grade.as_ref().and_then(|g| g.name_en()))
    );
    println!(
        "House     : {}",
        or_dash(student.house.as_ref().and_then(|h| h.name_en()))
    );
    Ok(())
}

async fn create_student(state: &AppState, dto: CreateStudentDto) -> Result<(), AppError> {
    validate_dto(&dto)?;
    let student = StudentService::create(&state.api, &dto).await?;
    println!("Created student {} ({})", student.name_en, student.id);
    Ok(())
}

async fn update_student(
    state: &AppState,
    id: StudentId,
    dto: UpdateStudentDto,
) -> Result<(), AppError> {
    validate_dto(&dto)?;
    let student = StudentService::update(&state.api, id, &dto).await?;
    println!("Updated student {} ({})", student.name_en, student.id);
    Ok(())
}

async fn delete_student(state: &AppState, id: StudentId, yes: bool) -> Result<(), AppError> {
    if !confirm_destructive(&format!("Delete student {}?", id), yes)? {
        println!("Aborted.");
        return Ok(());
    }
    StudentService::delete(&state.api, id).await?;
    println!("Deleted student {}", id);
    Ok(())
}

async fn assign_house(
    state: &AppState,
    id: StudentId,
    dto: AssignHouseDto,
) -> Result<(), AppError> {
    validate_dto(&dto)?;
    let student = StudentService::assign_house(&state.api, id, &dto).await?;
    println!(
        "Assigned {} to {} for {}",
        student.name_en,
        or_dash(student.house.as_ref().and_then(|h| h.name_en())),
        dto.year
    );
    Ok(())
}
