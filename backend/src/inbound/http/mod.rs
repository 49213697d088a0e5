//! HTTP inbound adapter exposing the storefront API and admin surface.
//!
//! ```text
//! /api/v1/{register,login,users,groups,categories,subcategories,parts}
//! /logout  /cabinet  /admin  /admin/import
//! /health/{ready,live}
//! ```

use actix_web::web;

pub mod admin;
pub mod catalogue;
pub mod error;
pub mod health;
pub mod negotiation;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

use catalogue::{categories, groups, parts, subcategories};

/// Register every route, the JSON body error handler and the 404 fallback.
///
/// Callers provide [`state::HttpState`] and [`health::HealthState`] as app
/// data and wrap the app in [`session_config::session_middleware`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    let api = web::scope("/api/v1")
        .service(users::register)
        .service(users::login)
        .service(users::list_users)
        .service(users::get_user)
        .service(groups::list_groups)
        .service(groups::get_group)
        .service(groups::create_group)
        .service(groups::update_group)
        .service(groups::delete_group)
        .service(categories::list_categories)
        .service(categories::get_category)
        .service(categories::create_category)
        .service(categories::update_category)
        .service(categories::delete_category)
        .service(subcategories::list_subcategories)
        .service(subcategories::get_subcategory)
        .service(subcategories::create_subcategory)
        .service(subcategories::update_subcategory)
        .service(subcategories::delete_subcategory)
        .service(parts::list_parts)
        .service(parts::get_part)
        .service(parts::create_part)
        .service(parts::update_part)
        .service(parts::delete_part);

    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(api)
        .service(users::logout)
        .service(users::cabinet)
        .service(admin::dashboard)
        .service(admin::import_inventory)
        .service(health::ready)
        .service(health::live)
        .default_service(web::to(negotiation::not_found));
}
