//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Top level of the catalogue.
    groups_main (id) {
        id -> Int4,
        name -> Varchar,
        create_at -> Timestamptz,
        update_at -> Timestamptz,
    }
}

diesel::table! {
    categories (id) {
        id -> Int4,
        group_id -> Int4,
        name -> Varchar,
        description -> Text,
        create_at -> Timestamptz,
        update_at -> Timestamptz,
    }
}

diesel::table! {
    subcategories (subcategory_id) {
        subcategory_id -> Int4,
        category_id -> Int4,
        name -> Varchar,
        create_at -> Timestamptz,
        update_at -> Timestamptz,
    }
}

diesel::table! {
    /// Sellable parts; `price` is `NUMERIC(12, 2)`.
    parts (id) {
        id -> Int4,
        name -> Varchar,
        description -> Text,
        price -> Numeric,
        image_url -> Nullable<Text>,
        subcategory_id -> Int4,
        quantity -> Int4,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Accounts. `username` carries a unique index.
    users (id) {
        id -> Int4,
        username -> Varchar,
        email -> Varchar,
        password_hash -> Varchar,
        is_admin -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(categories -> groups_main (group_id));
diesel::joinable!(subcategories -> categories (category_id));
diesel::joinable!(parts -> subcategories (subcategory_id));

diesel::allow_tables_to_appear_in_same_query!(groups_main, categories, subcategories, parts, users);
