//! Spreadsheet row parsing.
//!
//! Column layout, left to right:
//!
//! | # | field          | on failure                      |
//! |---|----------------|---------------------------------|
//! | 0 | name           | reject (blank)                  |
//! | 1 | description    | may be empty                    |
//! | 2 | price          | reject                          |
//! | 3 | subcategory id | reject                          |
//! | 4 | quantity       | default to 0                    |
//! | 5 | image URL      | optional, blank means no image  |

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::{CatalogueValidationError, PartDraft};

/// Number of leading cells every data row must carry.
pub const REQUIRED_CELLS: usize = 5;

const NAME: usize = 0;
const DESCRIPTION: usize = 1;
const PRICE: usize = 2;
const SUBCATEGORY: usize = 3;
const QUANTITY: usize = 4;
const IMAGE: usize = 5;

/// Why a data row was not imported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowRejection {
    #[error("too few cells: found {found}, need {REQUIRED_CELLS}")]
    TooFewCells { found: usize },
    #[error("missing name")]
    MissingName,
    #[error("invalid price")]
    InvalidPrice,
    #[error("invalid subcategory reference")]
    InvalidSubcategory,
    #[error("invalid row: {message}")]
    Invalid { message: String },
    #[error("insert failed: {message}")]
    Persistence { message: String },
}

/// One validated data row, ready to be stored as a part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRow {
    /// Position in the sheet; the header is line 0.
    pub line: usize,
    pub part: PartDraft,
}

/// Parse the cells of data row `line` into an [`InventoryRow`].
///
/// # Examples
/// ```
/// use autoparts::domain::inventory_import::{RowRejection, parse_row};
///
/// let cells: Vec<String> = ["Filter", "", "abc", "2", "1"].map(String::from).into();
/// assert_eq!(parse_row(1, &cells), Err(RowRejection::InvalidPrice));
/// ```
pub fn parse_row(line: usize, cells: &[String]) -> Result<InventoryRow, RowRejection> {
    if cells.len() < REQUIRED_CELLS {
        return Err(RowRejection::TooFewCells { found: cells.len() });
    }
    let cell = |index: usize| cells.get(index).map_or("", |value| value.trim());

    let price = parse_price(cell(PRICE)).ok_or(RowRejection::InvalidPrice)?;
    let subcategory_id = cell(SUBCATEGORY)
        .parse::<i32>()
        .map_err(|_| RowRejection::InvalidSubcategory)?;
    let quantity = parse_quantity(cell(QUANTITY));
    let image = Some(cell(IMAGE)).filter(|value| !value.is_empty());

    let part = PartDraft::try_new(
        cell(NAME),
        cell(DESCRIPTION),
        price,
        image,
        subcategory_id,
        quantity,
    )
    .map_err(rejection_for)?;
    Ok(InventoryRow { line, part })
}

fn parse_price(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Unparseable or negative quantities fall back to zero.
fn parse_quantity(raw: &str) -> i32 {
    raw.parse::<i32>().ok().filter(|value| *value >= 0).unwrap_or(0)
}

fn rejection_for(error: CatalogueValidationError) -> RowRejection {
    match error {
        CatalogueValidationError::EmptyField { .. } => RowRejection::MissingName,
        CatalogueValidationError::InvalidReference { .. } => RowRejection::InvalidSubcategory,
        CatalogueValidationError::NonPositivePrice { .. }
        | CatalogueValidationError::PriceOutOfRange { .. } => RowRejection::InvalidPrice,
        other @ CatalogueValidationError::NegativeValue { .. } => RowRejection::Invalid {
            message: other.to_string(),
        },
    }
}
