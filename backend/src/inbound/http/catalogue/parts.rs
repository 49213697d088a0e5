//! Part endpoints.
//!
//! `price` is accepted as a JSON number or a decimal string and is always
//! returned as a string.

use actix_web::{HttpResponse, delete, get, post, put, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{DraftRequest, create_record, delete_record, get_record, list_records, update_record};
use crate::domain::{CatalogueValidationError, Error, Part, PartDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::negotiation::MessageResponse;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Body for creating or replacing a part.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct PartRequest {
    #[schema(example = "Brake pad set")]
    pub name: String,
    pub description: String,
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
    pub image_url: Option<String>,
    pub subcategory_id: i32,
    pub quantity: i32,
}

impl DraftRequest for PartRequest {
    type Record = Part;

    fn into_draft(self) -> Result<PartDraft, CatalogueValidationError> {
        PartDraft::try_new(
            &self.name,
            &self.description,
            self.price,
            self.image_url.as_deref(),
            self.subcategory_id,
            self.quantity,
        )
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/parts",
    responses(
        (status = 200, description = "All parts", body = [Part]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "listParts",
    security([])
)]
#[get("/parts")]
pub async fn list_parts(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    list_records::<Part>(&state).await
}

#[utoipa::path(
    get,
    path = "/api/v1/parts/{id}",
    params(("id" = i32, Path, description = "Part identifier")),
    responses(
        (status = 200, description = "Part", body = Part),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "getPart",
    security([])
)]
#[get("/parts/{id}")]
pub async fn get_part(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    get_record::<Part>(&state, &path).await
}

#[utoipa::path(
    post,
    path = "/api/v1/parts",
    request_body = PartRequest,
    responses(
        (status = 201, description = "Created", body = Part),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 409, description = "Conflict", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "createPart"
)]
#[post("/parts")]
pub async fn create_part(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<PartRequest>,
) -> ApiResult<HttpResponse> {
    create_record(&state, &session, payload).await
}

#[utoipa::path(
    put,
    path = "/api/v1/parts/{id}",
    params(("id" = i32, Path, description = "Part identifier")),
    request_body = PartRequest,
    responses(
        (status = 200, description = "Updated", body = Part),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "updatePart"
)]
#[put("/parts/{id}")]
pub async fn update_part(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<PartRequest>,
) -> ApiResult<HttpResponse> {
    update_record(&state, &session, &path, payload).await
}

/// Delete a part.
#[utoipa::path(
    delete,
    path = "/api/v1/parts/{id}",
    params(("id" = i32, Path, description = "Part identifier")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "deletePart"
)]
#[delete("/parts/{id}")]
pub async fn delete_part(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    delete_record::<Part>(&state, &session, &path).await
}
