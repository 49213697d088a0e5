//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper yields an `invalid_request` error whose details carry the
//! offending field and a stable code, e.g. `{"field": "id", "code": "invalid_id"}`.

use serde_json::json;

use crate::domain::{
    CatalogueValidationError, Error, LoginValidationError, RegistrationValidationError,
};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidId,
    TooShort,
    OutOfRange,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidId => "invalid_id",
            ErrorCode::TooShort => "too_short",
            ErrorCode::OutOfRange => "out_of_range",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: &str, code: ErrorCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

/// Parse a path identifier; only positive integers address records.
pub(crate) fn parse_id(raw: &str, field: FieldName) -> Result<i32, Error> {
    match raw.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(Error::invalid_request(format!(
            "{} must be a positive integer",
            field.as_str()
        ))
        .with_details(json!({
            "field": field.as_str(),
            "value": raw,
            "code": ErrorCode::InvalidId.as_str(),
        }))),
    }
}

pub(crate) fn map_catalogue_validation_error(err: CatalogueValidationError) -> Error {
    let message = err.to_string();
    match err {
        CatalogueValidationError::EmptyField { field } => {
            field_error(field, ErrorCode::MissingField, message)
        }
        CatalogueValidationError::NegativeValue { field, .. } => {
            field_error(field, ErrorCode::OutOfRange, message)
        }
        CatalogueValidationError::InvalidReference { field, .. } => {
            field_error(field, ErrorCode::InvalidId, message)
        }
        CatalogueValidationError::NonPositivePrice { .. }
        | CatalogueValidationError::PriceOutOfRange { .. } => {
            field_error("price", ErrorCode::OutOfRange, message)
        }
    }
}

pub(crate) fn map_login_validation_error(err: LoginValidationError) -> Error {
    let field = match err {
        LoginValidationError::EmptyUsername => "username",
        LoginValidationError::EmptyPassword => "password",
    };
    field_error(field, ErrorCode::MissingField, err.to_string())
}

pub(crate) fn map_registration_validation_error(err: RegistrationValidationError) -> Error {
    let (field, code) = match err {
        RegistrationValidationError::EmptyUsername => ("username", ErrorCode::MissingField),
        RegistrationValidationError::EmptyEmail => ("email", ErrorCode::MissingField),
        RegistrationValidationError::EmptyPassword => ("password", ErrorCode::MissingField),
        RegistrationValidationError::PasswordTooShort { .. } => ("password", ErrorCode::TooShort),
    };
    field_error(field, code, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainCode;
    use rstest::rstest;
    use rust_decimal::Decimal;

    const ID: FieldName = FieldName::new("id");

    #[rstest]
    #[case("1", 1)]
    #[case(" 42 ", 42)]
    fn parse_id_accepts_positive_integers(#[case] raw: &str, #[case] expected: i32) {
        assert_eq!(parse_id(raw, ID).expect("valid id"), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-5")]
    #[case("abc")]
    #[case("1.5")]
    #[case("99999999999")]
    fn parse_id_rejects_everything_else(#[case] raw: &str) {
        let err = parse_id(raw, ID).expect_err("invalid id");
        assert_eq!(err.code(), DomainCode::InvalidRequest);
        let details = err.details().expect("details");
        assert_eq!(details["field"], "id");
        assert_eq!(details["code"], "invalid_id");
        assert_eq!(details["value"], raw);
    }

    #[rstest]
    #[case(CatalogueValidationError::EmptyField { field: "name" }, "name", "missing_field")]
    #[case(
        CatalogueValidationError::NegativeValue { field: "quantity", value: -1 },
        "quantity",
        "out_of_range"
    )]
    #[case(
        CatalogueValidationError::InvalidReference { field: "group_id", value: 0 },
        "group_id",
        "invalid_id"
    )]
    #[case(
        CatalogueValidationError::NonPositivePrice { price: Decimal::ZERO },
        "price",
        "out_of_range"
    )]
    fn catalogue_errors_name_the_field(
        #[case] err: CatalogueValidationError,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let mapped = map_catalogue_validation_error(err);
        let details = mapped.details().expect("details");
        assert_eq!(details["field"], field);
        assert_eq!(details["code"], code);
    }

    #[rstest]
    fn short_password_is_reported_as_too_short() {
        let mapped = map_registration_validation_error(
            RegistrationValidationError::PasswordTooShort { min: 6 },
        );
        assert_eq!(mapped.message(), "password must be at least 6 characters");
        assert_eq!(mapped.details().expect("details")["code"], "too_short");
    }

    #[rstest]
    fn blank_login_username_is_missing_field() {
        let mapped = map_login_validation_error(LoginValidationError::EmptyUsername);
        assert_eq!(mapped.details().expect("details")["field"], "username");
    }
}
