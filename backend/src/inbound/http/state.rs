//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CatalogueCommand, CatalogueQuery, CatalogueRepository, InventoryImport, LoginService,
    RegistrationService, UsersQuery,
};
use crate::domain::{CatalogueRecord, CatalogueService, Category, Group, Part, Subcategory};

/// Default cap on uploaded workbooks: 10 MiB.
pub const DEFAULT_IMPORT_MAX_BYTES: usize = 10 * 1024 * 1024;

/// Read and write ports for one catalogue level.
pub struct CataloguePorts<T: CatalogueRecord> {
    pub query: Arc<dyn CatalogueQuery<T>>,
    pub command: Arc<dyn CatalogueCommand<T>>,
}

impl<T: CatalogueRecord> CataloguePorts<T> {
    /// Use one service for both halves.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: CatalogueQuery<T> + CatalogueCommand<T> + 'static,
    {
        Self {
            query: service.clone(),
            command: service,
        }
    }

    /// Serve the level through a [`CatalogueService`] over `repo`.
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: CatalogueRepository<T> + 'static,
    {
        Self::from_service(Arc::new(CatalogueService::new(repo)))
    }
}

impl<T: CatalogueRecord> Clone for CataloguePorts<T> {
    fn clone(&self) -> Self {
        Self {
            query: Arc::clone(&self.query),
            command: Arc::clone(&self.command),
        }
    }
}

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn RegistrationService>,
    pub users: Arc<dyn UsersQuery>,
    pub groups: CataloguePorts<Group>,
    pub categories: CataloguePorts<Category>,
    pub subcategories: CataloguePorts<Subcategory>,
    pub parts: CataloguePorts<Part>,
    pub import: Arc<dyn InventoryImport>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn RegistrationService>,
    pub users: Arc<dyn UsersQuery>,
    pub groups: CataloguePorts<Group>,
    pub categories: CataloguePorts<Category>,
    pub subcategories: CataloguePorts<Subcategory>,
    pub parts: CataloguePorts<Part>,
    pub import: Arc<dyn InventoryImport>,
    /// Largest workbook accepted by the import endpoint, in bytes.
    pub import_max_bytes: usize,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state with the default import size cap.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            login,
            registration,
            users,
            groups,
            categories,
            subcategories,
            parts,
            import,
        } = ports;
        Self {
            login,
            registration,
            users,
            groups,
            categories,
            subcategories,
            parts,
            import,
            import_max_bytes: DEFAULT_IMPORT_MAX_BYTES,
        }
    }

    /// Override the import size cap.
    #[must_use]
    pub fn with_import_max_bytes(mut self, bytes: usize) -> Self {
        self.import_max_bytes = bytes;
        self
    }
}

/// Catalogue level reachable through [`HttpState`].
pub trait CatalogueResource: CatalogueRecord {
    /// Ports serving this level.
    fn ports(state: &HttpState) -> &CataloguePorts<Self>
    where
        Self: Sized;
}

impl CatalogueResource for Group {
    fn ports(state: &HttpState) -> &CataloguePorts<Self> {
        &state.groups
    }
}

impl CatalogueResource for Category {
    fn ports(state: &HttpState) -> &CataloguePorts<Self> {
        &state.categories
    }
}

impl CatalogueResource for Subcategory {
    fn ports(state: &HttpState) -> &CataloguePorts<Self> {
        &state.subcategories
    }
}

impl CatalogueResource for Part {
    fn ports(state: &HttpState) -> &CataloguePorts<Self> {
        &state.parts
    }
}
