//! Shared wiring for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! the harness lives here and each suite pulls it in with `mod support;`.
//! Domain services and the bcrypt and calamine adapters are real; only the
//! Diesel repositories are swapped for in-memory tables.

pub mod doubles;

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use autoparts::domain::ports::PasswordHasher;
use autoparts::domain::{
    AccountService, Category, Group, InventoryImportService, Part, Role, Subcategory, User,
};
use autoparts::inbound::http::session_config::SESSION_COOKIE_NAME;
use autoparts::inbound::http::state::{CataloguePorts, HttpState, HttpStatePorts};
use autoparts::outbound::security::{BcryptPasswordHasher, MIN_COST};
use autoparts::outbound::spreadsheet::CalamineWorkbookReader;

use doubles::{MemoryCatalogue, MemoryUsers};

/// Password given to every seeded account.
pub const SEED_PASSWORD: &str = "password";

/// Real services over in-memory tables.
pub struct Harness {
    pub users: Arc<MemoryUsers>,
    pub hasher: Arc<BcryptPasswordHasher>,
    pub groups: Arc<MemoryCatalogue<Group>>,
    pub categories: Arc<MemoryCatalogue<Category>>,
    pub subcategories: Arc<MemoryCatalogue<Subcategory>>,
    pub parts: Arc<MemoryCatalogue<Part>>,
}

impl Harness {
    /// Parts referencing subcategory 999 fail as if the key were missing.
    pub fn new() -> Self {
        Self {
            users: Arc::new(MemoryUsers::default()),
            hasher: Arc::new(BcryptPasswordHasher::with_cost(MIN_COST)),
            groups: Arc::new(MemoryCatalogue::new(doubles::group)),
            categories: Arc::new(MemoryCatalogue::new(doubles::category)),
            subcategories: Arc::new(MemoryCatalogue::new(doubles::subcategory)),
            parts: Arc::new(
                MemoryCatalogue::new(doubles::part)
                    .rejecting(|draft| draft.subcategory_id() == 999),
            ),
        }
    }

    /// Store an account whose password is [`SEED_PASSWORD`].
    pub async fn seed_user(&self, username: &str, role: Role) -> User {
        let hash = self
            .hasher
            .hash(SEED_PASSWORD)
            .await
            .expect("hash seed password");
        self.users.seed(username, role, hash)
    }

    pub fn state(&self) -> HttpState {
        let accounts = Arc::new(AccountService::new(
            Arc::clone(&self.users),
            Arc::clone(&self.hasher),
        ));
        let import = Arc::new(InventoryImportService::new(
            Arc::new(CalamineWorkbookReader::new()),
            Arc::clone(&self.parts),
        ));
        HttpState::new(HttpStatePorts {
            login: accounts.clone(),
            registration: accounts.clone(),
            users: accounts,
            groups: CataloguePorts::from_repository(Arc::clone(&self.groups)),
            categories: CataloguePorts::from_repository(Arc::clone(&self.categories)),
            subcategories: CataloguePorts::from_repository(Arc::clone(&self.subcategories)),
            parts: CataloguePorts::from_repository(Arc::clone(&self.parts)),
            import,
        })
    }
}

/// Build the production route table over `$state`.
macro_rules! full_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .app_data(actix_web::web::Data::new(
                    autoparts::inbound::http::health::HealthState::new(),
                ))
                .wrap(autoparts::inbound::http::session_config::session_middleware(
                    actix_web::cookie::Key::generate(),
                    false,
                ))
                .wrap(autoparts::Trace)
                .configure(autoparts::inbound::http::configure),
        )
        .await
    };
}

/// The session cookie set on `res`, if any.
pub fn session_cookie(res: &ServiceResponse) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
}

pub fn location(res: &ServiceResponse) -> String {
    res.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header")
        .to_owned()
}
