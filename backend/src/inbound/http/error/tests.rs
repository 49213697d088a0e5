//! Tests for HTTP error mapping.

use super::*;
use crate::domain::catalogue_service::map_catalogue_error;
use crate::domain::ports::CatalogueRepositoryError;
use actix_web::body::to_bytes;
use actix_web::test::TestRequest;
use rstest::rstest;
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn render(error: Error) -> (StatusCode, Option<String>, Error) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii trace id").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let payload = serde_json::from_slice(&bytes).expect("error payload is JSON");
    (status, header, payload)
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("who"), StatusCode::UNAUTHORIZED)]
#[case(Error::forbidden("no"), StatusCode::FORBIDDEN)]
#[case(Error::not_found("gone"), StatusCode::NOT_FOUND)]
#[case(Error::conflict("taken"), StatusCode::CONFLICT)]
#[case(Error::service_unavailable("db down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[actix_web::test]
async fn internal_errors_are_redacted_but_keep_trace_id() {
    let error = Error::internal("pool exploded at 10.0.0.4")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "sql": "select 1" }));

    let (status, header, payload) = render(error).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(payload.message(), REDACTED_MESSAGE);
    assert_eq!(payload.trace_id(), Some(TRACE_ID));
    assert!(payload.details().is_none());
}

#[actix_web::test]
async fn unavailable_errors_hide_connection_details() {
    let error = map_catalogue_error(CatalogueRepositoryError::connection(
        "connection to server at \"db.internal\" (10.0.0.5), port 5432 failed: \
         password authentication failed for user \"autoparts\"",
    ))
    .with_trace_id(TRACE_ID);

    let (status, header, payload) = render(error).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(header.as_deref(), Some(TRACE_ID));
    assert_eq!(payload.code(), ErrorCode::ServiceUnavailable);
    assert_eq!(payload.message(), SERVICE_UNAVAILABLE_MESSAGE);
    assert_eq!(payload.trace_id(), Some(TRACE_ID));

    let raw = Error::service_unavailable("pool timed out reaching 10.0.0.5")
        .with_details(json!({ "host": "db.internal" }));
    let (_, _, payload) = render(raw).await;
    assert_eq!(payload.message(), SERVICE_UNAVAILABLE_MESSAGE);
    assert!(payload.details().is_none());
}

#[rstest]
#[case(Error::conflict("username already taken"), StatusCode::CONFLICT)]
#[case(Error::not_found("part 7 not found"), StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn client_visible_errors_keep_their_message(
    #[case] error: Error,
    #[case] expected: StatusCode,
) {
    let message = error.message().to_owned();
    let (status, _, payload) = render(error).await;
    assert_eq!(status, expected);
    assert_eq!(payload.message(), message);
}

#[actix_web::test]
async fn error_without_trace_id_omits_header() {
    let error = Error::invalid_request("bad").with_details(json!({ "field": "name" }));

    let (status, header, payload) = render(error).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(header.is_none());
    assert_eq!(payload.details(), Some(&json!({ "field": "name" })));
}

#[rstest]
fn actix_errors_become_internal() {
    let actix = actix_web::error::ErrorBadGateway("upstream");
    let error = Error::from(actix);
    assert_eq!(error.code(), ErrorCode::InternalError);
    assert_eq!(error.message(), REDACTED_MESSAGE);
}

#[actix_web::test]
async fn json_payload_errors_are_bad_requests() {
    let req = TestRequest::default().to_http_request();
    let err = json_error_handler(JsonPayloadError::ContentType, &req);
    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body()).await.expect("body");
    let payload: Error = serde_json::from_slice(&bytes).expect("error payload");
    assert_eq!(payload.code(), ErrorCode::InvalidRequest);
}
