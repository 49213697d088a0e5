//! Internal Diesel row structs.
//!
//! Rows never leave the persistence layer; repositories convert them into
//! domain read-models. Write structs borrow from validated drafts and serve
//! both inserts and updates.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::domain::{
    Category, CategoryDraft, Credential, Group, GroupDraft, NewUser, Part, PartDraft,
    PasswordHash, Role, Subcategory, SubcategoryDraft, User, UserId, UserValidationError,
};

use super::schema::{categories, groups_main, parts, subcategories, users};

// ---------------------------------------------------------------------------
// Catalogue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = groups_main)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GroupRow {
    pub id: i32,
    pub name: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
}

impl From<GroupRow> for Group {
    fn from(row: GroupRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            create_at: row.create_at,
            update_at: row.update_at,
        }
    }
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = groups_main)]
pub(crate) struct GroupWrite<'a> {
    pub name: &'a str,
}

impl<'a> From<&'a GroupDraft> for GroupWrite<'a> {
    fn from(draft: &'a GroupDraft) -> Self {
        Self { name: draft.name() }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CategoryRow {
    pub id: i32,
    pub group_id: i32,
    pub name: String,
    pub description: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            group_id: row.group_id,
            name: row.name,
            description: row.description,
            create_at: row.create_at,
            update_at: row.update_at,
        }
    }
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = categories)]
pub(crate) struct CategoryWrite<'a> {
    pub group_id: i32,
    pub name: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a CategoryDraft> for CategoryWrite<'a> {
    fn from(draft: &'a CategoryDraft) -> Self {
        Self {
            group_id: draft.group_id(),
            name: draft.name(),
            description: draft.description(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = subcategories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct SubcategoryRow {
    pub subcategory_id: i32,
    pub category_id: i32,
    pub name: String,
    pub create_at: DateTime<Utc>,
    pub update_at: DateTime<Utc>,
}

impl From<SubcategoryRow> for Subcategory {
    fn from(row: SubcategoryRow) -> Self {
        Self {
            subcategory_id: row.subcategory_id,
            category_id: row.category_id,
            name: row.name,
            create_at: row.create_at,
            update_at: row.update_at,
        }
    }
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = subcategories)]
pub(crate) struct SubcategoryWrite<'a> {
    pub category_id: i32,
    pub name: &'a str,
}

impl<'a> From<&'a SubcategoryDraft> for SubcategoryWrite<'a> {
    fn from(draft: &'a SubcategoryDraft) -> Self {
        Self {
            category_id: draft.category_id(),
            name: draft.name(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = parts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PartRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub subcategory_id: i32,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PartRow> for Part {
    fn from(row: PartRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            image_url: row.image_url,
            subcategory_id: row.subcategory_id,
            quantity: row.quantity,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// `image_url: None` clears the column on update.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = parts)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct PartWrite<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: Decimal,
    pub image_url: Option<&'a str>,
    pub subcategory_id: i32,
    pub quantity: i32,
}

impl<'a> From<&'a PartDraft> for PartWrite<'a> {
    fn from(draft: &'a PartDraft) -> Self {
        Self {
            name: draft.name(),
            description: draft.description(),
            price: draft.price(),
            image_url: draft.image_url(),
            subcategory_id: draft.subcategory_id(),
            quantity: draft.quantity(),
        }
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Public columns of `users`; the hash is selected only for logins.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserValidationError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(row.id)?,
            username: row.username,
            email: row.email,
            role: Role::from_admin_flag(row.is_admin),
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CredentialRow {
    #[diesel(embed)]
    pub user: UserRow,
    pub password_hash: String,
}

impl TryFrom<CredentialRow> for Credential {
    type Error = UserValidationError;

    fn try_from(row: CredentialRow) -> Result<Self, Self::Error> {
        Ok(Self {
            user: User::try_from(row.user)?,
            password_hash: PasswordHash::new(row.password_hash),
        })
    }
}

/// New accounts always start without the admin flag.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub is_admin: bool,
}

impl<'a> From<&'a NewUser> for NewUserRow<'a> {
    fn from(user: &'a NewUser) -> Self {
        Self {
            username: &user.username,
            email: &user.email,
            password_hash: user.password_hash.as_str(),
            is_admin: false,
        }
    }
}
