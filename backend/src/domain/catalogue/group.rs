//! Top-level catalogue group (for example "Engine" or "Brakes").

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::validation::validate_non_empty_field;
use super::{CatalogueRecord, CatalogueValidationError};

/// Persisted group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
}

/// Validated input for creating or renaming a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDraft {
    name: String,
}

impl GroupDraft {
    pub fn try_new(name: &str) -> Result<Self, CatalogueValidationError> {
        Ok(Self {
            name: validate_non_empty_field(name, "group.name")?,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl CatalogueRecord for Group {
    type Draft = GroupDraft;
    const NOUN: &'static str = "group";

    fn key(&self) -> i32 {
        self.id
    }
}
