//! Catalogue domain types: groups, categories, subcategories and parts.
//!
//! The catalogue is a four level hierarchy. Every level is stored in its own
//! table and referenced by integer key from the level below it:
//! `Group <- Category <- Subcategory <- Part`.
//!
//! Drafts are validated on construction; persisted entities are read-models
//! handed back by repositories and are serialised verbatim on the wire.

use std::fmt;

use rust_decimal::Decimal;

mod category;
mod group;
mod part;
mod subcategory;
mod validation;

#[cfg(test)]
mod tests;

pub use category::{Category, CategoryDraft};
pub use group::{Group, GroupDraft};
pub use part::{MAX_PRICE, Part, PartDraft};
pub use subcategory::{Subcategory, SubcategoryDraft};

/// Validation errors returned by catalogue draft constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogueValidationError {
    EmptyField { field: &'static str },
    NegativeValue { field: &'static str, value: i32 },
    InvalidReference { field: &'static str, value: i32 },
    NonPositivePrice { price: Decimal },
    PriceOutOfRange { price: Decimal },
}

impl fmt::Display for CatalogueValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::NegativeValue { field, value } => {
                write!(f, "{field} must not be negative (got {value})")
            }
            Self::InvalidReference { field, value } => {
                write!(f, "{field} must be a positive identifier (got {value})")
            }
            Self::NonPositivePrice { price } => {
                write!(f, "price must be greater than zero (got {price})")
            }
            Self::PriceOutOfRange { price } => {
                write!(f, "price must not exceed {MAX_PRICE} (got {price})")
            }
        }
    }
}

impl std::error::Error for CatalogueValidationError {}

/// Catalogue entity addressable by an integer key.
///
/// Ties a persisted read-model to the draft used to create or replace it so
/// repositories and services can be written once for every level.
pub trait CatalogueRecord: Send + Sync + 'static {
    /// Validated input for inserts and updates.
    type Draft: Send + Sync + 'static;

    /// Human-readable singular name used in error messages.
    const NOUN: &'static str;

    /// Primary key of the record.
    fn key(&self) -> i32;
}
