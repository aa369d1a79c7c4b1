use crate::modules::staff::model::{
    CreateStaffRoleDto, CreateTeacherDto, SetMicDto, Teacher, UpdateStaffRoleDto, UpdateTeacherDto,
};
use crate::modules::staff::service::{StaffRoleService, TeacherService};
use crate::state::AppState;
use crate::utils::prompt::{confirm_destructive, optional_text_or_prompt, text_or_prompt};
use crate::utils::render::{Table, or_dash};
use crate::validator::validate_dto;
use clap::Subcommand;
use rollbook_core::errors::AppError;
use rollbook_core::search::matches_query;
use rollbook_models::ids::{StaffRoleId, TeacherId};

#[derive(Debug, Subcommand)]
pub enum StaffCommand {
    /// Teaching staff
    #[command(subcommand)]
    Teachers(TeachersCommand),
    /// Staff role definitions
    #[command(subcommand)]
    Roles(StaffRolesCommand),
}

#[derive(Debug, Subcommand)]
pub enum TeachersCommand {
    /// List teachers, optionally narrowed by a search term
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one teacher
    Get { id: TeacherId },
    /// Add a teacher
    Create {
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        name_si: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long = "role")]
        roles: Vec<StaffRoleId>,
    },
    /// Update a teacher
    Update {
        id: TeacherId,
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        name_si: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long = "role")]
        roles: Vec<StaffRoleId>,
    },
    /// Remove a teacher
    Delete {
        id: TeacherId,
        #[arg(long)]
        yes: bool,
    },
    /// Set the club the teacher is master-in-charge of; omit --club to clear
    SetMic {
        id: TeacherId,
        #[arg(long)]
        club: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum StaffRolesCommand {
    /// List staff roles
    List,
    /// Add a staff role
    Create {
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        name_si: Option<String>,
    },
    /// Update a staff role
    Update {
        id: StaffRoleId,
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        name_si: Option<String>,
    },
    /// Remove a staff role
    Delete {
        id: StaffRoleId,
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(state: &AppState, command: StaffCommand) -> Result<(), AppError> {
    match command {
        StaffCommand::Teachers(cmd) => run_teachers(state, cmd).await,
        StaffCommand::Roles(cmd) => run_roles(state, cmd).await,
    }
}

async fn run_teachers(state: &AppState, command: TeachersCommand) -> Result<(), AppError> {
    match command {
        TeachersCommand::List { search } => {
            let teachers = TeacherService::list(&state.api).await?;

            let needle = search.unwrap_or_default();
            let visible: Vec<&Teacher> = teachers
                .iter()
                .filter(|t| matches_query(&t.search_fields(), &needle))
                .collect();

            if visible.is_empty() {
                println!("No teachers found.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "Name", "නම", "Email", "MIC of"]);
            for teacher in visible {
                table.row(vec![
                    teacher.id.to_string(),
                    teacher.name_en.clone(),
                    teacher.name_si.clone(),
                    or_dash(teacher.email.as_deref()),
                    or_dash(teacher.mic_of.as_deref()),
                ]);
            }
            table.print();
            Ok(())
        }
        TeachersCommand::Get { id } => {
            let teacher = TeacherService::get(&state.api, id).await?;
            println!("Name   : {}", teacher.name_en);
            println!("නම     : {}", teacher.name_si);
            println!("Email  : {}", or_dash(teacher.email.as_deref()));
            println!("Phone  : {}", or_dash(teacher.phone.as_deref()));
            println!("MIC of : {}", or_dash(teacher.mic_of.as_deref()));
            if !teacher.roles.is_empty() {
                println!("Roles  :");
                for role in &teacher.roles {
                    match role.name_en() {
                        Some(name) => println!("  {}", name),
                        None => println!("  {}", role.id()),
                    }
                }
            }
            Ok(())
        }
        TeachersCommand::Create {
            name_en,
            name_si,
            email,
            phone,
            roles,
        } => {
            let dto = CreateTeacherDto {
                name_en: text_or_prompt(name_en, "Name (English)")?,
                name_si: text_or_prompt(name_si, "Name (Sinhala)")?,
                email: optional_text_or_prompt(email, "Email")?,
                phone: optional_text_or_prompt(phone, "Phone")?,
                role_ids: roles,
            };
            validate_dto(&dto)?;
            let teacher = TeacherService::create(&state.api, &dto).await?;
            println!("Created teacher {} ({})", teacher.name_en, teacher.id);
            Ok(())
        }
        TeachersCommand::Update {
            id,
            name_en,
            name_si,
            email,
            phone,
            roles,
        } => {
            let dto = UpdateTeacherDto {
                name_en,
                name_si,
                email,
                phone,
                role_ids: if roles.is_empty() { None } else { Some(roles) },
            };
            validate_dto(&dto)?;
            let teacher = TeacherService::update(&state.api, id, &dto).await?;
            println!("Updated teacher {} ({})", teacher.name_en, teacher.id);
            Ok(())
        }
        TeachersCommand::Delete { id, yes } => {
            if !confirm_destructive(&format!("Delete teacher {}?", id), yes)? {
                println!("Aborted.");
                return Ok(());
            }
            TeacherService::delete(&state.api, id).await?;
            println!("Deleted teacher {}", id);
            Ok(())
        }
        TeachersCommand::SetMic { id, club } => {
            let dto = SetMicDto { club };
            validate_dto(&dto)?;
            let teacher = TeacherService::set_mic(&state.api, id, &dto).await?;
            match &teacher.mic_of {
                Some(club) => println!("{} is now MIC of {}", teacher.name_en, club),
                None => println!("{} is no longer an MIC", teacher.name_en),
            }
            Ok(())
        }
    }
}

async fn run_roles(state: &AppState, command: StaffRolesCommand) -> Result<(), AppError> {
    match command {
        StaffRolesCommand::List => {
            let roles = StaffRoleService::list(&state.api).await?;
            if roles.is_empty() {
                println!("No staff roles defined.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "Name", "නම"]);
            for role in &roles {
                table.row(vec![
                    role.id.to_string(),
                    role.name_en.clone(),
                    role.name_si.clone(),
                ]);
            }
            table.print();
            Ok(())
        }
        StaffRolesCommand::Create { name_en, name_si } => {
            let dto = CreateStaffRoleDto {
                name_en: text_or_prompt(name_en, "Name (English)")?,
                name_si: text_or_prompt(name_si, "Name (Sinhala)")?,
            };
            validate_dto(&dto)?;
            let role = StaffRoleService::create(&state.api, &dto).await?;
            println!("Created staff role {} ({})", role.name_en, role.id);
            Ok(())
        }
        StaffRolesCommand::Update {
            id,
            name_en,
            name_si,
        } => {
            let dto = UpdateStaffRoleDto { name_en, name_si };
            validate_dto(&dto)?;
            let role = StaffRoleService::update(&state.api, id, &dto).await?;
            println!("Updated staff role {} ({})", role.name_en, role.id);
            Ok(())
        }
        StaffRolesCommand::Delete { id, yes } => {
            if !confirm_destructive(&format!("Delete staff role {}?", id), yes)? {
                println!("Aborted.");
                return Ok(());
            }
            StaffRoleService::delete(&state.api, id).await?;
            println!("Deleted staff role {}", id);
            Ok(())
        }
    }
}
