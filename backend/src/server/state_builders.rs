//! Wires PostgreSQL, bcrypt and calamine adapters into the HTTP state.

use std::sync::Arc;

use autoparts::domain::{AccountService, InventoryImportService, Part};
use autoparts::inbound::http::state::{CataloguePorts, HttpState, HttpStatePorts};
use autoparts::outbound::persistence::{DbPool, DieselCatalogueRepository, DieselUserRepository};
use autoparts::outbound::security::BcryptPasswordHasher;
use autoparts::outbound::spreadsheet::CalamineWorkbookReader;

use super::ServerConfig;

/// Build handler state from the database pool.
///
/// One account service backs login, registration and the user directory.
/// The import pipeline shares the parts repository with the parts CRUD
/// routes.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    let pool: &DbPool = &config.db_pool;
    let accounts = Arc::new(AccountService::new(
        Arc::new(DieselUserRepository::new(pool.clone())),
        Arc::new(BcryptPasswordHasher::default()),
    ));
    let parts = Arc::new(DieselCatalogueRepository::<Part>::new(pool.clone()));
    let import = InventoryImportService::new(
        Arc::new(CalamineWorkbookReader::new()),
        Arc::clone(&parts),
    );

    HttpState::new(HttpStatePorts {
        login: accounts.clone(),
        registration: accounts.clone(),
        users: accounts,
        groups: CataloguePorts::from_repository(Arc::new(DieselCatalogueRepository::new(
            pool.clone(),
        ))),
        categories: CataloguePorts::from_repository(Arc::new(DieselCatalogueRepository::new(
            pool.clone(),
        ))),
        subcategories: CataloguePorts::from_repository(Arc::new(
            DieselCatalogueRepository::new(pool.clone()),
        )),
        parts: CataloguePorts::from_repository(parts),
        import: Arc::new(import),
    })
    .with_import_max_bytes(config.import_max_bytes)
}
