//! Catalogue CRUD endpoints.
//!
//! ```text
//! GET    /api/v1/{groups|categories|subcategories|parts}
//! GET    /api/v1/{groups|categories|subcategories|parts}/{id}
//! POST   /api/v1/{groups|categories|subcategories|parts}
//! PUT    /api/v1/{groups|categories|subcategories|parts}/{id}
//! DELETE /api/v1/{groups|categories|subcategories|parts}/{id}
//! ```
//!
//! Reads are public. Writes need an administrator session. Every level goes
//! through the same helpers; the per-level modules only declare routes,
//! request bodies and OpenAPI metadata.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::domain::{CatalogueRecord, CatalogueValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::negotiation::MessageResponse;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::{CatalogueResource, HttpState};
use crate::inbound::http::validation::{FieldName, map_catalogue_validation_error, parse_id};

pub mod categories;
pub mod groups;
pub mod parts;
pub mod subcategories;

const ID_FIELD: FieldName = FieldName::new("id");

/// Request body that validates into the draft of one catalogue level.
pub trait DraftRequest {
    type Record: CatalogueResource;

    fn into_draft(self) -> Result<<Self::Record as CatalogueRecord>::Draft, CatalogueValidationError>;
}

pub(crate) async fn list_records<T>(state: &HttpState) -> ApiResult<HttpResponse>
where
    T: CatalogueResource + Serialize,
{
    let records = T::ports(state).query.list().await?;
    Ok(HttpResponse::Ok().json(records))
}

pub(crate) async fn get_record<T>(state: &HttpState, raw_id: &str) -> ApiResult<HttpResponse>
where
    T: CatalogueResource + Serialize,
{
    let id = parse_id(raw_id, ID_FIELD)?;
    let record = T::ports(state).query.get(id).await?;
    Ok(HttpResponse::Ok().json(record))
}

pub(crate) async fn create_record<R>(
    state: &HttpState,
    session: &SessionContext,
    payload: web::Json<R>,
) -> ApiResult<HttpResponse>
where
    R: DraftRequest,
    R::Record: Serialize,
{
    session.require_admin()?;
    let draft = payload
        .into_inner()
        .into_draft()
        .map_err(map_catalogue_validation_error)?;
    let record = R::Record::ports(state).command.create(draft).await?;
    Ok(HttpResponse::Created().json(record))
}

pub(crate) async fn update_record<R>(
    state: &HttpState,
    session: &SessionContext,
    raw_id: &str,
    payload: web::Json<R>,
) -> ApiResult<HttpResponse>
where
    R: DraftRequest,
    R::Record: Serialize,
{
    session.require_admin()?;
    let id = parse_id(raw_id, ID_FIELD)?;
    let draft = payload
        .into_inner()
        .into_draft()
        .map_err(map_catalogue_validation_error)?;
    let record = R::Record::ports(state).command.update(id, draft).await?;
    Ok(HttpResponse::Ok().json(record))
}

pub(crate) async fn delete_record<T>(
    state: &HttpState,
    session: &SessionContext,
    raw_id: &str,
) -> ApiResult<HttpResponse>
where
    T: CatalogueResource,
{
    session.require_admin()?;
    let id = parse_id(raw_id, ID_FIELD)?;
    T::ports(state).command.delete(id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!("{} {id} deleted", T::NOUN))))
}
