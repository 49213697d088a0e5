//! Response shape selection for routes shared by browsers and API clients.
//!
//! Browsers get redirects and small HTML bodies; clients that ask for JSON
//! through `Accept` get JSON.

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::Error;

/// JSON acknowledgement of a form-style action.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Whether the client explicitly accepts `application/json`.
pub fn wants_json(req: &HttpRequest) -> bool {
    req.headers()
        .get_all(header::ACCEPT)
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.to_ascii_lowercase().contains("application/json"))
}

/// `303 See Other` to `location`.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Fallback for unmatched routes.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    if wants_json(&req) {
        let error = Error::not_found(format!("no route for {}", req.path()));
        return actix_web::ResponseError::error_response(&error);
    }
    HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body("<!doctype html><title>Not found</title><h1>404</h1><p>Page not found.</p>")
}
