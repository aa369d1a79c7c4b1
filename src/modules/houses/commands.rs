use crate::modules::houses::model::{CreateHouseDto, UpdateHouseDto};
use crate::modules::houses::service::HouseService;
use crate::state::AppState;
use crate::utils::prompt::{confirm_destructive, text_or_prompt};
use crate::utils::render::{Table, or_dash};
use crate::validator::validate_dto;
use clap::Subcommand;
use rollbook_core::errors::AppError;
use rollbook_models::ids::HouseId;

#[derive(Debug, Subcommand)]
pub enum HousesCommand {
    /// List houses
    List,
    /// Add a house
    Create {
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        name_si: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Update a house
    Update {
        id: HouseId,
        #[arg(long)]
        name_en: Option<String>,
        #[arg(long)]
        name_si: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Remove a house
    Delete {
        id: HouseId,
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(state: &AppState, command: HousesCommand) -> Result<(), AppError> {
    match command {
        HousesCommand::List => {
            let houses = HouseService::list(&state.api).await?;
            if houses.is_empty() {
                println!("No houses defined.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "Name", "නම", "Color"]);
            for house in &houses {
                table.row(vec![
                    house.id.to_string(),
                    house.name_en.clone(),
                    house.name_si.clone(),
                    or_dash(house.color.as_deref()),
                ]);
            }
            table.print();
            Ok(())
        }
        HousesCommand::Create {
            name_en,
            name_si,
            color,
        } => {
            let dto = CreateHouseDto {
                name_en: text_or_prompt(name_en, "Name (English)")?,
                name_si: text_or_prompt(name_si, "Name (Sinhala)")?,
                color,
            };
            validate_dto(&dto)?;
            let house = HouseService::create(&state.api, &dto).await?;
            println!("Created house {} ({})", house.name_en, house.id);
            Ok(())
        }
        HousesCommand::Update {
            id,
            name_en,
            name_si,
            color,
        } => {
            let dto = UpdateHouseDto {
                name_en,
                name_si,
                color,
            };
            validate_dto(&dto)?;
            let house = HouseService::update(&state.api, id, &dto).await?;
            println!("Updated house {} ({})", house.name_en, house.id);
            Ok(())
        }
        HousesCommand::Delete { id, yes } => {
            if !confirm_destructive(&format!("Delete house {}?", id), yes)? {
                println!("Aborted.");
                return Ok(());
            }
            HouseService::delete(&state.api, id).await?;
            println!("Deleted house {}", id);
            Ok(())
        }
    }
}
