//! Category within a group.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::validation::{ensure_reference, validate_non_empty_field};
use super::{CatalogueRecord, CatalogueValidationError};

/// Persisted category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Category {
    pub id: i32,
    pub group_id: i32,
    pub name: String,
    pub description: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
}

/// Validated input for category writes.
///
/// The description may be empty; the name may not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    group_id: i32,
    name: String,
    description: String,
}

impl CategoryDraft {
    pub fn try_new(
        group_id: i32,
        name: &str,
        description: &str,
    ) -> Result<Self, CatalogueValidationError> {
        Ok(Self {
            group_id: ensure_reference(group_id, "category.group_id")?,
            name: validate_non_empty_field(name, "category.name")?,
            description: description.trim().to_owned(),
        })
    }

    pub fn group_id(&self) -> i32 {
        self.group_id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}

impl CatalogueRecord for Category {
    type Draft = CategoryDraft;
    const NOUN: &'static str = "category";

    fn key(&self) -> i32 {
        self.id
    }
}
