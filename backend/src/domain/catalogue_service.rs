//! Catalogue CRUD service.
//!
//! A single generic service backs all four catalogue levels; it forwards to
//! the matching [`CatalogueRepository`] and folds storage outcomes into
//! domain errors.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::{
    CatalogueCommand, CatalogueQuery, CatalogueRepository, CatalogueRepositoryError,
};
use crate::domain::{CatalogueRecord, Error, SERVICE_UNAVAILABLE_MESSAGE};

/// Catalogue service implementing [`CatalogueQuery`] and [`CatalogueCommand`].
pub struct CatalogueService<T, R> {
    repo: Arc<R>,
    _record: PhantomData<fn() -> T>,
}

impl<T, R> CatalogueService<T, R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            _record: PhantomData,
        }
    }
}

impl<T, R> Clone for CatalogueService<T, R> {
    fn clone(&self) -> Self {
        Self::new(Arc::clone(&self.repo))
    }
}

/// Translate a catalogue port failure into a domain error.
pub(crate) fn map_catalogue_error(error: CatalogueRepositoryError) -> Error {
    match error {
        CatalogueRepositoryError::Connection { message } => {
            warn!(%message, "catalogue repository unavailable");
            Error::service_unavailable(SERVICE_UNAVAILABLE_MESSAGE)
        }
        CatalogueRepositoryError::Query { message } => {
            Error::internal(format!("catalogue repository error: {message}"))
        }
        CatalogueRepositoryError::MissingReference { .. } => {
            Error::invalid_request("referenced record does not exist")
        }
        CatalogueRepositoryError::Duplicate { .. } => Error::conflict("record already exists"),
    }
}

fn not_found<T: CatalogueRecord>(id: i32) -> Error {
    Error::not_found(format!("{} {id} not found", T::NOUN))
}

#[async_trait]
impl<T, R> CatalogueQuery<T> for CatalogueService<T, R>
where
    T: CatalogueRecord,
    R: CatalogueRepository<T>,
{
    async fn list(&self) -> Result<Vec<T>, Error> {
        self.repo.list().await.map_err(map_catalogue_error)
    }

    async fn get(&self, id: i32) -> Result<T, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_catalogue_error)?
            .ok_or_else(|| not_found::<T>(id))
    }
}

#[async_trait]
impl<T, R> CatalogueCommand<T> for CatalogueService<T, R>
where
    T: CatalogueRecord,
    R: CatalogueRepository<T>,
{
    async fn create(&self, draft: T::Draft) -> Result<T, Error> {
        let record = self
            .repo
            .insert(&draft)
            .await
            .map_err(map_catalogue_error)?;
        info!(kind = T::NOUN, id = record.key(), "catalogue record created");
        Ok(record)
    }

    async fn update(&self, id: i32, draft: T::Draft) -> Result<T, Error> {
        let record = self
            .repo
            .update(id, &draft)
            .await
            .map_err(map_catalogue_error)?
            .ok_or_else(|| not_found::<T>(id))?;
        info!(kind = T::NOUN, id, "catalogue record updated");
        Ok(record)
    }

    async fn delete(&self, id: i32) -> Result<(), Error> {
        let removed = self.repo.delete(id).await.map_err(|error| match error {
            CatalogueRepositoryError::MissingReference { .. } => {
                Error::conflict(format!("{} {id} is still referenced", T::NOUN))
            }
            other => map_catalogue_error(other),
        })?;
        if !removed {
            return Err(not_found::<T>(id));
        }
        info!(kind = T::NOUN, id, "catalogue record deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
