//! Driving port for catalogue reads.

use async_trait::async_trait;

use crate::domain::{CatalogueRecord, Error};

#[async_trait]
pub trait CatalogueQuery<T: CatalogueRecord>: Send + Sync {
    /// Every record of this type.
    async fn list(&self) -> Result<Vec<T>, Error>;

    /// One record, or [`crate::domain::ErrorCode::NotFound`].
    async fn get(&self, id: i32) -> Result<T, Error>;
}
