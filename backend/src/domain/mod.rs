//! Domain primitives, services and ports.
//!
//! Purpose: define strongly typed entities used by the HTTP and persistence
//! adapters, plus the two core use-cases: account authentication and
//! spreadsheet inventory import. Nothing here knows about actix, Diesel or
//! calamine; adapters meet the domain through [`ports`].
//!
//! Public surface:
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.
//! - [`User`], [`Role`], [`SessionUser`], [`require_admin`]: identity and the
//!   admin gate.
//! - [`LoginCredentials`], [`RegistrationDetails`]: validated auth inputs.
//! - Catalogue entities and drafts: [`Group`], [`Category`],
//!   [`Subcategory`], [`Part`].
//! - Services: [`AccountService`], [`CatalogueService`],
//!   [`InventoryImportService`].

pub mod accounts;
pub mod auth;
pub mod catalogue;
pub mod catalogue_service;
pub mod error;
pub mod inventory_import;
pub mod ports;
pub mod session;
pub mod trace_id;
pub mod user;

pub use self::accounts::AccountService;
pub use self::auth::{
    LoginCredentials, LoginValidationError, MIN_PASSWORD_CHARS, RegistrationDetails,
    RegistrationValidationError,
};
pub use self::catalogue::{
    Category, CategoryDraft, CatalogueRecord, CatalogueValidationError, Group, GroupDraft,
    MAX_PRICE, Part, PartDraft, Subcategory, SubcategoryDraft,
};
pub use self::catalogue_service::CatalogueService;
pub use self::error::{
    Error, ErrorCode, ErrorValidationError, SERVICE_UNAVAILABLE_MESSAGE, TRACE_ID_HEADER,
};
pub use self::inventory_import::{ImportOutcome, InventoryImportService, RowRejection};
pub use self::session::{AdminAccess, SessionUser, require_admin};
pub use self::trace_id::TraceId;
pub use self::user::{Credential, NewUser, PasswordHash, Role, User, UserId, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use autoparts::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
