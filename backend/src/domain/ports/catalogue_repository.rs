//! Driven port for catalogue persistence.
//!
//! One generic trait covers every catalogue level; each adapter implements
//! it once per entity. Keys are plain integers because the store assigns
//! them.

use async_trait::async_trait;

use crate::domain::CatalogueRecord;

use super::define_port_error;

define_port_error! {
    /// Errors raised by catalogue repository adapters.
    pub enum CatalogueRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "catalogue connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "catalogue query failed: {message}",
        /// A foreign key pointed at a row that does not exist.
        MissingReference { message: String } =>
            "referenced record does not exist: {message}",
        /// A uniqueness constraint rejected the write.
        Duplicate { message: String } =>
            "record already exists: {message}",
    }
}

/// CRUD persistence for one catalogue entity type.
#[async_trait]
pub trait CatalogueRepository<T: CatalogueRecord>: Send + Sync {
    /// All records ordered by key.
    async fn list(&self) -> Result<Vec<T>, CatalogueRepositoryError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<T>, CatalogueRepositoryError>;

    /// Insert a single row. Each call is its own unit of work.
    async fn insert(&self, draft: &T::Draft) -> Result<T, CatalogueRepositoryError>;

    /// Replace the mutable fields of `id`; `None` when the row is absent.
    async fn update(&self, id: i32, draft: &T::Draft)
    -> Result<Option<T>, CatalogueRepositoryError>;

    /// Delete `id`; `false` when nothing was removed.
    async fn delete(&self, id: i32) -> Result<bool, CatalogueRepositoryError>;
}
