//! Sellable part, the unit of inventory.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::validation::{
    ensure_non_negative, ensure_reference, normalise_optional, validate_non_empty_field,
};
use super::{CatalogueRecord, CatalogueValidationError};

/// Largest price representable by the `NUMERIC(12,2)` column: `9999999999.99`.
pub const MAX_PRICE: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

/// Persisted part.
///
/// `price` is serialised as a decimal string (for example `"19.99"`) so no
/// precision is lost in transit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Part {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub subcategory_id: i32,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated part awaiting insert or replacement.
///
/// ## Invariants
/// - `name` is trimmed and non-empty.
/// - `price` is rounded to cents and lies in `(0, MAX_PRICE]`.
/// - `quantity` is non-negative.
/// - `subcategory_id` is positive. Whether it exists is left to the store.
/// - `image_url` is `None` rather than blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartDraft {
    name: String,
    description: String,
    price: Decimal,
    image_url: Option<String>,
    subcategory_id: i32,
    quantity: i32,
}

impl PartDraft {
    /// Validate raw part fields.
    ///
    /// # Examples
    /// ```
    /// use autoparts::domain::PartDraft;
    /// use rust_decimal::Decimal;
    ///
    /// let draft = PartDraft::try_new("Brake pad", "", Decimal::new(1999, 2), None, 3, 10)
    ///     .expect("valid part");
    /// assert_eq!(draft.price().to_string(), "19.99");
    /// ```
    pub fn try_new(
        name: &str,
        description: &str,
        price: Decimal,
        image_url: Option<&str>,
        subcategory_id: i32,
        quantity: i32,
    ) -> Result<Self, CatalogueValidationError> {
        let name = validate_non_empty_field(name, "part.name")?;
        let price = validate_price(price)?;
        let subcategory_id = ensure_reference(subcategory_id, "part.subcategory_id")?;
        let quantity = ensure_non_negative(quantity, "part.quantity")?;
        Ok(Self {
            name,
            description: description.trim().to_owned(),
            price,
            image_url: normalise_optional(image_url),
            subcategory_id,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn subcategory_id(&self) -> i32 {
        self.subcategory_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }
}

fn validate_price(price: Decimal) -> Result<Decimal, CatalogueValidationError> {
    let rounded = price.round_dp(2);
    if rounded <= Decimal::ZERO {
        return Err(CatalogueValidationError::NonPositivePrice { price });
    }
    if rounded > MAX_PRICE {
        return Err(CatalogueValidationError::PriceOutOfRange { price });
    }
    Ok(rounded)
}

impl CatalogueRecord for Part {
    type Draft = PartDraft;
    const NOUN: &'static str = "part";

    fn key(&self) -> i32 {
        self.id
    }
}
