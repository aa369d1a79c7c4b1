use crate::modules::users::model::{AppUser, AssignRolesDto, CreateUserDto, UpdateUserDto};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::prompt::{confirm_destructive, text_or_prompt};
use crate::utils::render::{Table, print_meta};
use crate::validator::validate_dto;
use clap::Subcommand;
use dialoguer::Password;
use rollbook_core::errors::AppError;
use rollbook_core::pagination::PageQuery;
use rollbook_core::search::matches_query;
use rollbook_models::ids::{RoleId, UserId};

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List application users
    List {
        #[arg(short, long)]
        search: Option<String>,
        #[arg(long)]
        page: Option<i64>,
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Show one user
    Get { id: UserId },
    /// Create a user; the password is prompted when not given
    Create {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long = "role")]
        roles: Vec<RoleId>,
    },
    /// Update a user
    Update {
        id: UserId,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        /// Activate or deactivate the account
        #[arg(long)]
        active: Option<bool>,
    },
    /// Remove a user
    Delete {
        id: UserId,
        #[arg(long)]
        yes: bool,
    },
    /// Replace a user's role assignments
    AssignRoles {
        id: UserId,
        #[arg(long = "role", required = true)]
        roles: Vec<RoleId>,
    },
}

pub async fn run(state: &AppState, command: UsersCommand) -> Result<(), AppError> {
    match command {
        UsersCommand::List {
            search,
            page,
            limit,
        } => {
            let result = UserService::list(&state.api, PageQuery::new(page, limit)).await?;

            let needle = search.unwrap_or_default();
            let visible: Vec<&AppUser> = result
                .data
                .iter()
                .filter(|u| matches_query(&u.search_fields(), &needle))
                .collect();

            if visible.is_empty() {
                println!("No users found.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "Username", "Email", "Active", "Roles"]);
            for user in visible {
                let roles = user
                    .roles
                    .iter()
                    .map(|r| r.name().map(str::to_string).unwrap_or_else(|| r.id().to_string()))
                    .collect::<Vec<_>>()
                    .join(", ");
                table.row(vec![
                    user.id.to_string(),
                    user.username.clone(),
                    user.email.clone(),
                    if user.is_active { "yes" } else { "no" }.to_string(),
                    roles,
                ]);
            }
            table.print();
            print_meta(&result.meta);
            Ok(())
        }
        UsersCommand::Get { id } => {
            let user = UserService::get(&state.api, id).await?;
            println!("Username : {}", user.username);
            println!("Email    : {}", user.email);
            println!("Active   : {}", if user.is_active { "yes" } else { "no" });
            if !user.roles.is_empty() {
                println!("Roles    :");
                for role in &user.roles {
                    match role.name() {
                        Some(name) => println!("  {}", name),
                        None => println!("  {}", role.id()),
                    }
                }
            }
            Ok(())
        }
        UsersCommand::Create {
            username,
            email,
            password,
            roles,
        } => {
            let password = match password {
                Some(p) => p,
                None => Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(AppError::internal)?,
            };
            let dto = CreateUserDto {
                username: text_or_prompt(username, "Username")?,
                email: text_or_prompt(email, "Email")?,
                password,
                role_ids: roles,
            };
            validate_dto(&dto)?;
            let user = UserService::create(&state.api, &dto).await?;
            println!("Created user {} ({})", user.username, user.id);
            Ok(())
        }
        UsersCommand::Update {
            id,
            email,
            password,
            active,
        } => {
            let dto = UpdateUserDto {
                email,
                password,
                is_active: active,
            };
            validate_dto(&dto)?;
            let user = UserService::update(&state.api, id, &dto).await?;
            println!("Updated user {} ({})", user.username, user.id);
            Ok(())
        }
        UsersCommand::Delete { id, yes } => {
            if !confirm_destructive(&format!("Delete user {}?", id), yes)? {
                println!("Aborted.");
                return Ok(());
            }
            UserService::delete(&state.api, id).await?;
            println!("Deleted user {}", id);
            Ok(())
        }
        UsersCommand::AssignRoles { id, roles } => {
            let dto = AssignRolesDto { role_ids: roles };
            validate_dto(&dto)?;
            let user = UserService::assign_roles(&state.api, id, &dto).await?;
            println!("Updated roles for {} ({} assigned)", user.username, user.roles.len());
            Ok(())
        }
    }
}
