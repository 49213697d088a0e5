//! In-memory driven ports so the real domain services can run without a
//! database.

use std::sync::Mutex;

use async_trait::async_trait;
use autoparts::domain::ports::{
    CatalogueRepository, CatalogueRepositoryError, UserPersistenceError, UserRepository,
};
use autoparts::domain::{
    CatalogueRecord, Category, CategoryDraft, Credential, Group, GroupDraft, NewUser, Part,
    PartDraft, PasswordHash, Role, Subcategory, SubcategoryDraft, User, UserId,
};
use chrono::Utc;

/// Account store keyed by insertion order, enforcing unique usernames.
#[derive(Default)]
pub struct MemoryUsers {
    rows: Mutex<Vec<Credential>>,
}

impl MemoryUsers {
    /// Store an account directly, bypassing registration.
    pub fn seed(&self, username: &str, role: Role, password_hash: PasswordHash) -> User {
        let mut rows = self.rows.lock().expect("users lock");
        let user = User {
            id: next_user_id(rows.len()),
            username: username.to_owned(),
            email: format!("{username}@example.test"),
            role,
            created_at: Utc::now(),
        };
        rows.push(Credential {
            user: user.clone(),
            password_hash,
        });
        user
    }

    pub fn usernames(&self) -> Vec<String> {
        self.rows
            .lock()
            .expect("users lock")
            .iter()
            .map(|row| row.user.username.clone())
            .collect()
    }
}

fn next_user_id(len: usize) -> UserId {
    let raw = i32::try_from(len).expect("small user table") + 1;
    UserId::new(raw).expect("positive id")
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn insert(&self, new_user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut rows = self.rows.lock().expect("users lock");
        if rows.iter().any(|row| row.user.username == new_user.username) {
            return Err(UserPersistenceError::duplicate_username(
                new_user.username.clone(),
            ));
        }
        let user = User {
            id: next_user_id(rows.len()),
            username: new_user.username.clone(),
            email: new_user.email.clone(),
            role: Role::Standard,
            created_at: Utc::now(),
        };
        rows.push(Credential {
            user: user.clone(),
            password_hash: new_user.password_hash.clone(),
        });
        Ok(user)
    }

    async fn find_credential_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Credential>, UserPersistenceError> {
        let rows = self.rows.lock().expect("users lock");
        Ok(rows.iter().find(|row| row.user.username == username).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let rows = self.rows.lock().expect("users lock");
        Ok(rows
            .iter()
            .find(|row| row.user.id == id)
            .map(|row| row.user.clone()))
    }

    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        let rows = self.rows.lock().expect("users lock");
        Ok(rows.iter().map(|row| row.user.clone()).collect())
    }
}

/// One catalogue table held in memory.
///
/// `rejects` stands in for a foreign key: drafts it matches fail with
/// [`CatalogueRepositoryError::MissingReference`].
pub struct MemoryCatalogue<T: CatalogueRecord> {
    rows: Mutex<Vec<T>>,
    next_id: Mutex<i32>,
    build: fn(i32, &T::Draft) -> T,
    rejects: fn(&T::Draft) -> bool,
}

impl<T: CatalogueRecord + Clone> MemoryCatalogue<T> {
    pub fn new(build: fn(i32, &T::Draft) -> T) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            build,
            rejects: |_| false,
        }
    }

    #[must_use]
    pub fn rejecting(mut self, rejects: fn(&T::Draft) -> bool) -> Self {
        self.rejects = rejects;
        self
    }

    pub fn rows(&self) -> Vec<T> {
        self.rows.lock().expect("catalogue lock").clone()
    }
}

#[async_trait]
impl<T: CatalogueRecord + Clone> CatalogueRepository<T> for MemoryCatalogue<T> {
    async fn list(&self) -> Result<Vec<T>, CatalogueRepositoryError> {
        Ok(self.rows())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<T>, CatalogueRepositoryError> {
        let rows = self.rows.lock().expect("catalogue lock");
        Ok(rows.iter().find(|row| row.key() == id).cloned())
    }

    async fn insert(&self, draft: &T::Draft) -> Result<T, CatalogueRepositoryError> {
        if (self.rejects)(draft) {
            return Err(CatalogueRepositoryError::missing_reference("fk_violation"));
        }
        let mut next_id = self.next_id.lock().expect("id lock");
        let row = (self.build)(*next_id, draft);
        *next_id += 1;
        self.rows.lock().expect("catalogue lock").push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: i32,
        draft: &T::Draft,
    ) -> Result<Option<T>, CatalogueRepositoryError> {
        if (self.rejects)(draft) {
            return Err(CatalogueRepositoryError::missing_reference("fk_violation"));
        }
        let mut rows = self.rows.lock().expect("catalogue lock");
        let Some(slot) = rows.iter_mut().find(|row| row.key() == id) else {
            return Ok(None);
        };
        *slot = (self.build)(id, draft);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool, CatalogueRepositoryError> {
        let mut rows = self.rows.lock().expect("catalogue lock");
        let before = rows.len();
        rows.retain(|row| row.key() != id);
        Ok(rows.len() != before)
    }
}

pub fn group(id: i32, draft: &GroupDraft) -> Group {
    let now = Utc::now();
    Group {
        id,
        name: draft.name().to_owned(),
        create_at: now,
        update_at: now,
    }
}

pub fn category(id: i32, draft: &CategoryDraft) -> Category {
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

pub fn subcategory(id: i32, draft: &SubcategoryDraft) -> Subcategory {
    let now = Utc::now();
    Subcategory {
        subcategory_id: id,
        category_id: draft.category_id(),
        name: draft.name().to_owned(),
        create_at: now,
        update_at: now,
    }
}

pub fn part(id: i32, draft: &PartDraft) -> Part {
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
