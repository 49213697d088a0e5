//! Driving port for catalogue writes.
//!
//! Drafts arrive already validated; implementations only translate storage
//! outcomes into domain errors.

use async_trait::async_trait;

use crate::domain::{CatalogueRecord, Error};

#[async_trait]
pub trait CatalogueCommand<T: CatalogueRecord>: Send + Sync {
    async fn create(&self, draft: T::Draft) -> Result<T, Error>;

    /// Replace `id`, or fail with [`crate::domain::ErrorCode::NotFound`].
    async fn update(&self, id: i32, draft: T::Draft) -> Result<T, Error>;

    /// Remove `id`, or fail with [`crate::domain::ErrorCode::NotFound`].
    async fn delete(&self, id: i32) -> Result<(), Error>;
}
