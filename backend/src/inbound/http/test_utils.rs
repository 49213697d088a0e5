//! Test helpers for inbound HTTP components.

use std::sync::{Arc, Mutex};

use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{
    CatalogueCommand, CatalogueQuery, MockInventoryImport, MockLoginService,
    MockRegistrationService, MockUsersQuery,
};
use crate::domain::{
    CatalogueRecord, Category, CategoryDraft, Error, Group, GroupDraft, Part, PartDraft,
    Role, SessionUser, Subcategory, SubcategoryDraft, UserId,
};
use crate::inbound::http::session_config::{SESSION_COOKIE_NAME, session_middleware};
use crate::inbound::http::state::{CataloguePorts, HttpState, HttpStatePorts};

/// Production session middleware with a fresh key and `Secure` disabled for
/// plain-HTTP test requests.
pub fn test_session_middleware()
-> actix_session::SessionMiddleware<actix_session::storage::CookieSessionStore> {
    session_middleware(Key::generate(), false)
}

/// The session cookie set on `res`, if any.
pub fn session_cookie(res: &ServiceResponse) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .map(Cookie::into_owned)
}

pub fn session_user(id: i32, username: &str, role: Role) -> SessionUser {
    SessionUser {
        user_id: UserId::new(id).expect("fixture id"),
        username: username.to_owned(),
        role,
    }
}

/// In-memory catalogue level that hands out sequential ids.
pub struct MemoryCatalogue<T: CatalogueRecord> {
    records: Mutex<Vec<T>>,
    build: fn(i32, &T::Draft) -> T,
}

impl<T: CatalogueRecord + Clone> MemoryCatalogue<T> {
    pub fn new(build: fn(i32, &T::Draft) -> T) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            build,
        }
    }

    pub fn records(&self) -> Vec<T> {
        self.records.lock().expect("records lock").clone()
    }
}

#[async_trait]
impl<T: CatalogueRecord + Clone> CatalogueQuery<T> for MemoryCatalogue<T> {
    async fn list(&self) -> Result<Vec<T>, Error> {
        Ok(self.records())
    }

    async fn get(&self, id: i32) -> Result<T, Error> {
        self.records()
            .into_iter()
            .find(|record| record.key() == id)
            .ok_or_else(|| Error::not_found(format!("{} {id} not found", T::NOUN)))
    }
}

#[async_trait]
impl<T: CatalogueRecord + Clone> CatalogueCommand<T> for MemoryCatalogue<T> {
    async fn create(&self, draft: T::Draft) -> Result<T, Error> {
        let mut records = self.records.lock().expect("records lock");
        let id = i32::try_from(records.len()).expect("small table") + 1;
        let record = (self.build)(id, &draft);
        records.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: i32, draft: T::Draft) -> Result<T, Error> {
        let mut records = self.records.lock().expect("records lock");
        let slot = records
            .iter_mut()
            .find(|record| record.key() == id)
            .ok_or_else(|| Error::not_found(format!("{} {id} not found", T::NOUN)))?;
        *slot = (self.build)(id, &draft);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), Error> {
        let mut records = self.records.lock().expect("records lock");
        let before = records.len();
        records.retain(|record| record.key() != id);
        if records.len() == before {
            return Err(Error::not_found(format!("{} {id} not found", T::NOUN)));
        }
        Ok(())
    }
}

pub fn build_group(id: i32, draft: &GroupDraft) -> Group {
    let now = Utc::now();
    Group {
        id,
        name: draft.name().to_owned(),
        create_at: now,
        update_at: now,
    }
}

pub fn build_category(id: i32, draft: &CategoryDraft) -> Category {
    let now = Utc::now();
    Category {
        id,
        group_id: draft.group_id(),
        name: draft.name().to_owned(),
        description: draft.description().to_owned(),
        create_at: now,
        update_at: now,
    }
}

pub fn build_subcategory(id: i32, draft: &SubcategoryDraft) -> Subcategory {
    let now = Utc::now();
    Subcategory {
        subcategory_id: id,
        category_id: draft.category_id(),
        name: draft.name().to_owned(),
        create_at: now,
        update_at: now,
    }
}

pub fn build_part(id: i32, draft: &PartDraft) -> Part {
    let now = Utc::now();
    Part {
        id,
        name: draft.name().to_owned(),
        description: draft.description().to_owned(),
        price: draft.price(),
        image_url: draft.image_url().map(str::to_owned),
        subcategory_id: draft.subcategory_id(),
        quantity: draft.quantity(),
        created_at: now,
        updated_at: now,
    }
}

/// Ports for handler tests. Mocks without expectations panic when called.
pub struct TestPorts {
    pub login: MockLoginService,
    pub registration: MockRegistrationService,
    pub users: MockUsersQuery,
    pub groups: Arc<MemoryCatalogue<Group>>,
    pub categories: Arc<MemoryCatalogue<Category>>,
    pub subcategories: Arc<MemoryCatalogue<Subcategory>>,
    pub parts: Arc<MemoryCatalogue<Part>>,
    pub import: MockInventoryImport,
}

impl Default for TestPorts {
    fn default() -> Self {
        Self {
            login: MockLoginService::new(),
            registration: MockRegistrationService::new(),
            users: MockUsersQuery::new(),
            groups: Arc::new(MemoryCatalogue::new(build_group)),
            categories: Arc::new(MemoryCatalogue::new(build_category)),
            subcategories: Arc::new(MemoryCatalogue::new(build_subcategory)),
            parts: Arc::new(MemoryCatalogue::new(build_part)),
            import: MockInventoryImport::new(),
        }
    }
}

impl TestPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(HttpStatePorts {
            login: Arc::new(self.login),
            registration: Arc::new(self.registration),
            users: Arc::new(self.users),
            groups: CataloguePorts::from_service(self.groups),
            categories: CataloguePorts::from_service(self.categories),
            subcategories: CataloguePorts::from_service(self.subcategories),
            parts: CataloguePorts::from_service(self.parts),
            import: Arc::new(self.import),
        })
    }
}

/// Login port that accepts any password; `admin` gets the admin role.
pub fn permissive_login() -> MockLoginService {
    let mut login = MockLoginService::new();
    login.expect_authenticate().returning(|credentials| {
        let role = if credentials.username() == "admin" {
            Role::Admin
        } else {
            Role::Standard
        };
        Ok(session_user(1, credentials.username(), role))
    });
    login
}
