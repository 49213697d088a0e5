//! Shared Diesel error mapping for the repositories in this module.
//!
//! Constraint violations are classified here so services can tell a
//! dangling reference or a duplicate key from a broken query.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{CatalogueRepositoryError, UserPersistenceError};

use super::pool::PoolError;

/// Classified Diesel failure, before conversion into a port error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    Connection(String),
    ForeignKey(String),
    Unique(String),
    Query(String),
}

fn constraint_or_message(info: &dyn diesel::result::DatabaseErrorInformation) -> String {
    info.constraint_name()
        .map_or_else(|| info.message().to_owned(), str::to_owned)
}

/// Classify a Diesel error and emit debug context.
pub(crate) fn classify(error: DieselError) -> DieselFailure {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            DieselFailure::ForeignKey(constraint_or_message(info.as_ref()))
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            DieselFailure::Unique(constraint_or_message(info.as_ref()))
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection("database connection error".to_owned())
        }
        DieselError::QueryBuilderError(_) => DieselFailure::Query("database query error".to_owned()),
        DieselError::DatabaseError(_, info) => DieselFailure::Query(info.message().to_owned()),
        other => DieselFailure::Query(other.to_string()),
    }
}

fn pool_message(error: PoolError) -> String {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    }
}

pub(crate) fn catalogue_pool_error(error: PoolError) -> CatalogueRepositoryError {
    CatalogueRepositoryError::connection(pool_message(error))
}

pub(crate) fn catalogue_diesel_error(error: DieselError) -> CatalogueRepositoryError {
    match classify(error) {
        DieselFailure::Connection(message) => CatalogueRepositoryError::connection(message),
        DieselFailure::ForeignKey(message) => CatalogueRepositoryError::missing_reference(message),
        DieselFailure::Unique(message) => CatalogueRepositoryError::duplicate(message),
        DieselFailure::Query(message) => CatalogueRepositoryError::query(message),
    }
}

pub(crate) fn user_pool_error(error: PoolError) -> UserPersistenceError {
    UserPersistenceError::connection(pool_message(error))
}

/// `username` names the account being written, for duplicate reports.
pub(crate) fn user_diesel_error(error: DieselError, username: Option<&str>) -> UserPersistenceError {
    match (classify(error), username) {
        (DieselFailure::Unique(_), Some(username)) => {
            UserPersistenceError::duplicate_username(username)
        }
        (DieselFailure::Connection(message), _) => UserPersistenceError::connection(message),
        (
            DieselFailure::Unique(message)
            | DieselFailure::ForeignKey(message)
            | DieselFailure::Query(message),
            _,
        ) => UserPersistenceError::query(message),
    }
}
