use crate::modules::roles::model::{CreateRoleDto, UpdateRoleDto};
use crate::modules::roles::service::RoleService;
use crate::state::AppState;
use crate::utils::prompt::{confirm_destructive, text_or_prompt};
use crate::utils::render::Table;
use crate::validator::validate_dto;
use clap::Subcommand;
use rollbook_core::errors::AppError;
use rollbook_models::ids::RoleId;

#[derive(Debug, Subcommand)]
pub enum RolesCommand {
    /// List roles
    List,
    /// Show one role and its permissions
    Get { id: RoleId },
    /// Add a role
    Create {
        #[arg(long)]
        name: Option<String>,
        /// Permission names (repeatable)
        #[arg(long = "permission")]
        permissions: Vec<String>,
    },
    /// Update a role; passing --permission replaces the set
    Update {
        id: RoleId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "permission")]
        permissions: Vec<String>,
    },
    /// Remove a role
    Delete {
        id: RoleId,
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(state: &AppState, command: RolesCommand) -> Result<(), AppError> {
    match command {
        RolesCommand::List => {
            let roles = RoleService::list(&state.api).await?;
            if roles.is_empty() {
                println!("No roles defined.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "Name", "Permissions"]);
            for role in &roles {
                table.row(vec![
                    role.id.to_string(),
                    role.name.clone(),
                    role.permissions.len().to_string(),
                ]);
            }
            table.print();
            Ok(())
        }
        RolesCommand::Get { id } => {
            let role = RoleService::get(&state.api, id).await?;
            println!("Name        : {}", role.name);
            println!("Permissions :");
            for permission in &role.permissions {
                println!("  {}", permission);
            }
            Ok(())
        }
        RolesCommand::Create { name, permissions } => {
            let dto = CreateRoleDto {
                name: text_or_prompt(name, "Role name")?,
                permissions,
            };
            validate_dto(&dto)?;
            let role = RoleService::create(&state.api, &dto).await?;
            println!("Created role {} ({})", role.name, role.id);
            Ok(())
        }
        RolesCommand::Update {
            id,
            name,
            permissions,
        } => {
            let dto = UpdateRoleDto {
                name,
                permissions: if permissions.is_empty() {
                    None
                } else {
                    Some(permissions)
                },
            };
            validate_dto(&dto)?;
            let role = RoleService::update(&state.api, id, &dto).await?;
            println!("Updated role {} ({})", role.name, role.id);
            Ok(())
        }
        RolesCommand::Delete { id, yes } => {
            if !confirm_destructive(&format!("Delete role {}?", id), yes)? {
                println!("Aborted.");
                return Ok(());
            }
            RoleService::delete(&state.api, id).await?;
            println!("Deleted role {}", id);
            Ok(())
        }
    }
}
