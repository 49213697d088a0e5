//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Service`, `*Query`, `*Command`, [`InventoryImport`]) are
//! what inbound adapters call. Driven ports (`*Repository`,
//! [`PasswordHasher`], [`WorkbookReader`]) are implemented by outbound
//! adapters and consumed by domain services.

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_command;
mod catalogue_query;
mod catalogue_repository;
mod inventory_import;
mod login_service;
mod password_hasher;
mod registration_service;
mod user_repository;
mod users_query;
mod workbook_reader;

pub use catalogue_command::CatalogueCommand;
pub use catalogue_query::CatalogueQuery;
pub use catalogue_repository::{CatalogueRepository, CatalogueRepositoryError};
#[cfg(test)]
pub use inventory_import::MockInventoryImport;
pub use inventory_import::InventoryImport;
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::LoginService;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use registration_service::RegistrationService;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
#[cfg(test)]
pub use workbook_reader::MockWorkbookReader;
pub use workbook_reader::{SheetRows, WorkbookError, WorkbookReader};
