//! Validation helpers shared by catalogue drafts.

use super::CatalogueValidationError;

pub(super) fn validate_non_empty_field(
    value: &str,
    field: &'static str,
) -> Result<String, CatalogueValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogueValidationError::EmptyField { field });
    }
    Ok(trimmed.to_owned())
}

pub(super) fn ensure_non_negative(
    value: i32,
    field: &'static str,
) -> Result<i32, CatalogueValidationError> {
    if value < 0 {
        return Err(CatalogueValidationError::NegativeValue { field, value });
    }
    Ok(value)
}

pub(super) fn ensure_reference(
    value: i32,
    field: &'static str,
) -> Result<i32, CatalogueValidationError> {
    if value <= 0 {
        return Err(CatalogueValidationError::InvalidReference { field, value });
    }
    Ok(value)
}

/// Blank optional strings collapse to `None`.
pub(super) fn normalise_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}
