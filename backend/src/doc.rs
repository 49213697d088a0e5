//! OpenAPI document for the HTTP surface.
//!
//! Served by Swagger UI at `/docs` in debug builds. Mutating routes inherit
//! the `SessionCookie` requirement; public reads opt out per path.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Category, Error, ErrorCode, Group, Part, Role, Subcategory};
use crate::inbound::http::admin::AdminDashboard;
use crate::inbound::http::catalogue::categories::CategoryRequest;
use crate::inbound::http::catalogue::groups::GroupRequest;
use crate::inbound::http::catalogue::parts::PartRequest;
use crate::inbound::http::catalogue::subcategories::SubcategoryRequest;
use crate::inbound::http::negotiation::MessageResponse;
use crate::inbound::http::session_config::SESSION_COOKIE_NAME;
use crate::inbound::http::users::{
    LoginData, LoginRequest, LoginResponse, RegisterRequest, UserResponse,
};

/// Adds the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                SESSION_COOKIE_NAME,
                "Encrypted session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Autoparts API",
        description = "Auto-parts catalogue, accounts and inventory import."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::cabinet,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::catalogue::groups::list_groups,
        crate::inbound::http::catalogue::groups::get_group,
        crate::inbound::http::catalogue::groups::create_group,
        crate::inbound::http::catalogue::groups::update_group,
        crate::inbound::http::catalogue::groups::delete_group,
        crate::inbound::http::catalogue::categories::list_categories,
        crate::inbound::http::catalogue::categories::get_category,
        crate::inbound::http::catalogue::categories::create_category,
        crate::inbound::http::catalogue::categories::update_category,
        crate::inbound::http::catalogue::categories::delete_category,
        crate::inbound::http::catalogue::subcategories::list_subcategories,
        crate::inbound::http::catalogue::subcategories::get_subcategory,
        crate::inbound::http::catalogue::subcategories::create_subcategory,
        crate::inbound::http::catalogue::subcategories::update_subcategory,
        crate::inbound::http::catalogue::subcategories::delete_subcategory,
        crate::inbound::http::catalogue::parts::list_parts,
        crate::inbound::http::catalogue::parts::get_part,
        crate::inbound::http::catalogue::parts::create_part,
        crate::inbound::http::catalogue::parts::update_part,
        crate::inbound::http::catalogue::parts::delete_part,
        crate::inbound::http::admin::dashboard,
        crate::inbound::http::admin::import_inventory,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Role,
        Group,
        Category,
        Subcategory,
        Part,
        GroupRequest,
        CategoryRequest,
        SubcategoryRequest,
        PartRequest,
        LoginRequest,
        RegisterRequest,
        LoginData,
        LoginResponse,
        UserResponse,
        MessageResponse,
        AdminDashboard,
    )),
    tags(
        (name = "users", description = "Registration, login and the user directory"),
        (name = "catalogue", description = "Groups, categories, subcategories and parts"),
        (name = "admin", description = "Administrator dashboard and inventory import"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
