//! Group endpoints, the top of the catalogue hierarchy.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{DraftRequest, create_record, delete_record, get_record, list_records, update_record};
use crate::domain::{CatalogueValidationError, Error, Group, GroupDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::negotiation::MessageResponse;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Body for creating or replacing a group.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct GroupRequest {
    #[schema(example = "Engine")]
    pub name: String,
}

impl DraftRequest for GroupRequest {
    type Record = Group;

    fn into_draft(self) -> Result<GroupDraft, CatalogueValidationError> {
        GroupDraft::try_new(&self.name)
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/groups",
    responses(
        (status = 200, description = "All groups", body = [Group]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "listGroups",
    security([])
)]
#[get("/groups")]
pub async fn list_groups(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    list_records::<Group>(&state).await
}

#[utoipa::path(
    get,
    path = "/api/v1/groups/{id}",
    params(("id" = i32, Path, description = "Group identifier")),
    responses(
        (status = 200, description = "Group", body = Group),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "getGroup",
    security([])
)]
#[get("/groups/{id}")]
pub async fn get_group(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    get_record::<Group>(&state, &path).await
}

#[utoipa::path(
    post,
    path = "/api/v1/groups",
    request_body = GroupRequest,
    responses(
        (status = 201, description = "Created", body = Group),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 409, description = "Conflict", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "createGroup"
)]
#[post("/groups")]
pub async fn create_group(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<GroupRequest>,
) -> ApiResult<HttpResponse> {
    create_record(&state, &session, payload).await
}

#[utoipa::path(
    put,
    path = "/api/v1/groups/{id}",
    params(("id" = i32, Path, description = "Group identifier")),
    request_body = GroupRequest,
    responses(
        (status = 200, description = "Updated", body = Group),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "updateGroup"
)]
#[put("/groups/{id}")]
pub async fn update_group(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<GroupRequest>,
) -> ApiResult<HttpResponse> {
    update_record(&state, &session, &path, payload).await
}

/// Delete a group. Refused with 409 while categories still reference it.
#[utoipa::path(
    delete,
    path = "/api/v1/groups/{id}",
    params(("id" = i32, Path, description = "Group identifier")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 409, description = "Still referenced", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error)
    ),
    tags = ["catalogue"],
    operation_id = "deleteGroup"
)]
#[delete("/groups/{id}")]
pub async fn delete_group(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    delete_record::<Group>(&state, &session, &path).await
}
