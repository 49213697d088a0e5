//! PostgreSQL-backed catalogue repositories.
//!
//! One generic adapter type serves every catalogue level. Each level only
//! differs in its table, key column, row struct and write struct, so the
//! port is implemented per level by `catalogue_level!`. Every call runs as
//! a single autocommit statement.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CatalogueRepository, CatalogueRepositoryError};
use crate::domain::{CatalogueRecord, Category, Group, Part, Subcategory};

use super::diesel_error_mapping::{catalogue_diesel_error, catalogue_pool_error};
use super::models::{
    CategoryRow, CategoryWrite, GroupRow, GroupWrite, PartRow, PartWrite, SubcategoryRow,
    SubcategoryWrite,
};
use super::pool::DbPool;
use super::schema::{categories, groups_main, parts, subcategories};

/// Diesel-backed repository for catalogue level `T`.
pub struct DieselCatalogueRepository<T> {
    pool: DbPool,
    level: PhantomData<fn() -> T>,
}

impl<T: CatalogueRecord> DieselCatalogueRepository<T> {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            level: PhantomData,
        }
    }
}

impl<T> Clone for DieselCatalogueRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            level: PhantomData,
        }
    }
}

/// Implement [`CatalogueRepository`] for one level.
///
/// `$stamp` is the column refreshed on every update.
macro_rules! catalogue_level {
    ($record:ty, $table:ident, $key:ident, $stamp:ident, $row:ty, $write:ident) => {
        #[async_trait]
        impl CatalogueRepository<$record> for DieselCatalogueRepository<$record> {
            async fn list(&self) -> Result<Vec<$record>, CatalogueRepositoryError> {
                let mut conn = self.pool.get().await.map_err(catalogue_pool_error)?;
                let rows: Vec<$row> = $table::table
                    .order($table::$key.asc())
                    .select(<$row>::as_select())
                    .load(&mut conn)
                    .await
                    .map_err(catalogue_diesel_error)?;
                Ok(rows.into_iter().map(<$record>::from).collect())
            }

            async fn find_by_id(
                &self,
                id: i32,
            ) -> Result<Option<$record>, CatalogueRepositoryError> {
                let mut conn = self.pool.get().await.map_err(catalogue_pool_error)?;
                let row: Option<$row> = $table::table
                    .find(id)
                    .select(<$row>::as_select())
                    .first(&mut conn)
                    .await
                    .optional()
                    .map_err(catalogue_diesel_error)?;
                Ok(row.map(<$record>::from))
            }

            async fn insert(
                &self,
                draft: &<$record as CatalogueRecord>::Draft,
            ) -> Result<$record, CatalogueRepositoryError> {
                let mut conn = self.pool.get().await.map_err(catalogue_pool_error)?;
                let row: $row = diesel::insert_into($table::table)
                    .values($write::from(draft))
                    .returning(<$row>::as_returning())
                    .get_result(&mut conn)
                    .await
                    .map_err(catalogue_diesel_error)?;
                Ok(row.into())
            }

            async fn update(
                &self,
                id: i32,
                draft: &<$record as CatalogueRecord>::Draft,
            ) -> Result<Option<$record>, CatalogueRepositoryError> {
                let mut conn = self.pool.get().await.map_err(catalogue_pool_error)?;
                let row: Option<$row> = diesel::update($table::table.find(id))
                    .set(($write::from(draft), $table::$stamp.eq(Utc::now())))
                    .returning(<$row>::as_returning())
                    .get_result(&mut conn)
                    .await
                    .optional()
                    .map_err(catalogue_diesel_error)?;
                Ok(row.map(<$record>::from))
            }

            async fn delete(&self, id: i32) -> Result<bool, CatalogueRepositoryError> {
                let mut conn = self.pool.get().await.map_err(catalogue_pool_error)?;
                let removed = diesel::delete($table::table.find(id))
                    .execute(&mut conn)
                    .await
                    .map_err(catalogue_diesel_error)?;
                Ok(removed > 0)
            }
        }
    };
}

catalogue_level!(Group, groups_main, id, update_at, GroupRow, GroupWrite);
catalogue_level!(Category, categories, id, update_at, CategoryRow, CategoryWrite);
catalogue_level!(
    Subcategory,
    subcategories,
    subcategory_id,
    update_at,
    SubcategoryRow,
    SubcategoryWrite
);
catalogue_level!(Part, parts, id, updated_at, PartRow, PartWrite);
