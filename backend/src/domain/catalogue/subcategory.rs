//! Subcategory within a category. Parts hang off subcategories.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::validation::{ensure_reference, validate_non_empty_field};
use super::{CatalogueRecord, CatalogueValidationError};

/// Persisted subcategory.
///
/// The key is exposed as `subcategory_id`, matching the column name that
/// parts reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Subcategory {
    pub subcategory_id: i32,
    pub category_id: i32,
    pub name: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryDraft {
    category_id: i32,
    name: String,
}

impl SubcategoryDraft {
    pub fn try_new(category_id: i32, name: &str) -> Result<Self, CatalogueValidationError> {
        Ok(Self {
            category_id: ensure_reference(category_id, "subcategory.category_id")?,
            name: validate_non_empty_field(name, "subcategory.name")?,
        })
    }

    pub fn category_id(&self) -> i32 {
        self.category_id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl CatalogueRecord for Subcategory {
    type Draft = SubcategoryDraft;
    const NOUN: &'static str = "subcategory";

    fn key(&self) -> i32 {
        self.subcategory_id
    }
}
