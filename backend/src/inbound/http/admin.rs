//! Administrative surface: the dashboard and spreadsheet inventory import.
//!
//! ```text
//! GET  /admin[?msg=...]
//! POST /admin/import   (multipart/form-data, field `excel_file`)
//! ```
//!
//! Both routes redirect anonymous visitors to `/login` and refuse signed-in
//! customers with 403.

use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::{HttpResponse, get, post, web};
use futures_util::TryStreamExt;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use url::form_urlencoded;
use utoipa::{IntoParams, ToSchema};

use crate::domain::{AdminAccess, Error, Part, SessionUser};
use crate::inbound::http::ApiResult;
use crate::inbound::http::negotiation::see_other;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Multipart field carrying the workbook.
pub const IMPORT_FIELD: &str = "excel_file";

/// Query string of the dashboard.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct AdminQuery {
    /// Flash message left by the import redirect.
    pub msg: Option<String>,
}

/// Dashboard payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminDashboard {
    pub username: String,
    pub parts: Vec<Part>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Admin gate for browser routes.
enum Gate {
    Admin(SessionUser),
    Denied(HttpResponse),
}

fn gate(session: &SessionContext) -> Result<Gate, Error> {
    match session.admin_access() {
        AdminAccess::Granted(user) => Ok(Gate::Admin(user)),
        AdminAccess::LoginRequired => Ok(Gate::Denied(see_other("/login"))),
        AdminAccess::Forbidden => Err(Error::forbidden("administrator role required")),
    }
}

#[utoipa::path(
    get,
    path = "/admin",
    params(AdminQuery),
    responses(
        (status = 200, description = "Dashboard", body = AdminDashboard),
        (status = 303, description = "Not signed in; redirect to the login page"),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["admin"],
    operation_id = "adminDashboard"
)]
#[get("/admin")]
pub async fn dashboard(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<AdminQuery>,
) -> ApiResult<HttpResponse> {
    let admin = match gate(&session)? {
        Gate::Admin(user) => user,
        Gate::Denied(redirect) => return Ok(redirect),
    };
    let parts = state.parts.query.list().await?;
    info!(admin = %admin.username, parts = parts.len(), "admin dashboard served");
    Ok(HttpResponse::Ok().json(AdminDashboard {
        username: admin.username,
        parts,
        message: query.into_inner().msg,
    }))
}

#[utoipa::path(
    post,
    path = "/admin/import",
    request_body(content_type = "multipart/form-data", description = "Workbook in field `excel_file`"),
    responses(
        (status = 303, description = "Imported; redirect to the dashboard with a summary"),
        (status = 400, description = "Missing, oversized or unreadable workbook", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["admin"],
    operation_id = "importInventory"
)]
#[post("/admin/import")]
pub async fn import_inventory(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: Multipart,
) -> ApiResult<HttpResponse> {
    let admin = match gate(&session)? {
        Gate::Admin(user) => user,
        Gate::Denied(redirect) => return Ok(redirect),
    };
    let workbook = read_workbook(payload, state.import_max_bytes).await?;
    info!(admin = %admin.username, bytes = workbook.len(), "inventory workbook uploaded");

    let outcome = state.import.import(workbook).await?;
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("msg", &outcome.summary())
        .finish();
    Ok(see_other(&format!("/admin?{query}")))
}

fn malformed(error: MultipartError) -> Error {
    warn!(%error, "rejecting malformed upload");
    Error::invalid_request("malformed multipart upload")
}

/// Pull the workbook field out of the form, enforcing `max_bytes`.
async fn read_workbook(mut payload: Multipart, max_bytes: usize) -> Result<Vec<u8>, Error> {
    while let Some(field) = payload.try_next().await.map_err(malformed)? {
        if field.name() == Some(IMPORT_FIELD) {
            return read_capped(field, max_bytes).await;
        }
    }
    Err(Error::invalid_request(format!(
        "form field `{IMPORT_FIELD}` is required"
    )))
}

async fn read_capped(mut field: Field, max_bytes: usize) -> Result<Vec<u8>, Error> {
    let mut buffer = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(malformed)? {
        if buffer.len() + chunk.len() > max_bytes {
            return Err(Error::invalid_request(format!(
                "workbook exceeds the {max_bytes} byte limit"
            )));
        }
        buffer.extend_from_slice(&chunk);
    }
    if buffer.is_empty() {
        return Err(Error::invalid_request("uploaded workbook is empty"));
    }
    Ok(buffer)
}
