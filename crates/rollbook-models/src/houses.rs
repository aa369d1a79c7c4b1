//! House models and DTOs. Students are assigned to a house per year for
//! the inter-house competitions.

use crate::ids::HouseId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct House {
    pub id: HouseId,
    pub name_en: String,
    pub name_si: String,
    #[serde(default, deserialize_with = "rollbook_core::serde::empty_string_as_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A house reference: bare ID or denormalized record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HouseRef {
    Id(HouseId),
    Full(Box<House>),
}

impl HouseRef {
    pub fn id(&self) -> HouseId {
        match self {
            Self::Id(id) => *id,
            Self::Full(house) => house.id,
        }
    }

    pub fn name_en(&self) -> Option<&str> {
        match self {
            Self::Id(_) => None,
            Self::Full(house) => Some(&house.name_en),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateHouseDto {
    #[validate(length(min = 1, max = 100))]
    pub name_en: String,
    #[validate(length(min = 1, max = 100))]
    pub name_si: String,
    #[validate(length(max = 30))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct UpdateHouseDto {
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_si: Option<String>,
    #[validate(length(max = 30))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
