//! Subcategory endpoints. Parts are filed under subcategories.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{DraftRequest, create_record, delete_record, get_record, list_records, update_record};
use crate::domain::{CatalogueValidationError, Error, Subcategory, SubcategoryDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::negotiation::MessageResponse;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Body for creating or replacing a subcategory.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct SubcategoryRequest {
    pub category_id: i32,
    #[schema(example = "Oil filters")]
    pub name: String,
}

impl DraftRequest for SubcategoryRequest {
    type Record = Subcategory;

    fn into_draft(self) -> Result<SubcategoryDraft, CatalogueValidationError> {
        SubcategoryDraft::try_new(self.category_id, &self.name)
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/subcategories",
    responses(
        (status = 200, description = "All subcategories", body = [Subcategory]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "listSubcategories",
    security([])
)]
#[get("/subcategories")]
pub async fn list_subcategories(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    list_records::<Subcategory>(&state).await
}

#[utoipa::path(
    get,
    path = "/api/v1/subcategories/{id}",
    params(("id" = i32, Path, description = "Subcategory identifier")),
    responses(
        (status = 200, description = "Subcategory", body = Subcategory),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "getSubcategory",
    security([])
)]
#[get("/subcategories/{id}")]
pub async fn get_subcategory(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    get_record::<Subcategory>(&state, &path).await
}

#[utoipa::path(
    post,
    path = "/api/v1/subcategories",
    request_body = SubcategoryRequest,
    responses(
        (status = 201, description = "Created", body = Subcategory),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 409, description = "Conflict", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "createSubcategory"
)]
#[post("/subcategories")]
pub async fn create_subcategory(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<SubcategoryRequest>,
) -> ApiResult<HttpResponse> {
    create_record(&state, &session, payload).await
}

#[utoipa::path(
    put,
    path = "/api/v1/subcategories/{id}",
    params(("id" = i32, Path, description = "Subcategory identifier")),
    request_body = SubcategoryRequest,
    responses(
        (status = 200, description = "Updated", body = Subcategory),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "updateSubcategory"
)]
#[put("/subcategories/{id}")]
pub async fn update_subcategory(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<SubcategoryRequest>,
) -> ApiResult<HttpResponse> {
    update_record(&state, &session, &path, payload).await
}

/// Delete a subcategory. Refused with 409 while parts still reference it.
#[utoipa::path(
    delete,
    path = "/api/v1/subcategories/{id}",
    params(("id" = i32, Path, description = "Subcategory identifier")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 409, description = "Still referenced", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "deleteSubcategory"
)]
#[delete("/subcategories/{id}")]
pub async fn delete_subcategory(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    delete_record::<Subcategory>(&state, &session, &path).await
}
