//! Account handlers: registration, login, logout, cabinet and the user
//! directory.
//!
//! ```text
//! POST /api/v1/register {"username":"bob","email":"bob@example.com","password":"secret1"}
//! POST /api/v1/login {"username":"admin","password":"password"}
//! GET /logout
//! GET /cabinet
//! GET /api/v1/users
//! GET /api/v1/users/{id}
//! ```
//!
//! Register and login answer JSON when the client asks for it through
//! `Accept`, otherwise they redirect like the HTML forms expect.

use actix_web::{HttpRequest, HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{
    Error, LoginCredentials, LoginValidationError, RegistrationDetails,
    RegistrationValidationError, User, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::negotiation::{MessageResponse, see_other, wants_json};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, map_login_validation_error, map_registration_validation_error, parse_id,
};

/// Login request body for `POST /api/v1/login`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// Registration request body for `POST /api/v1/register`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl TryFrom<RegisterRequest> for RegistrationDetails {
    type Error = RegistrationValidationError;

    fn try_from(value: RegisterRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.email, &value.password)
    }
}

/// Identity echoed after a JSON login.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginData {
    pub username: String,
    pub is_admin: bool,
}

/// JSON login acknowledgement.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub data: LoginData,
}

/// Account as returned by the API; never carries the password hash.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.get(),
            is_admin: user.role.is_admin(),
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// Create a standard account.
#[utoipa::path(
    post,
    path = "/api/v1/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = MessageResponse),
        (status = 303, description = "Account created; redirect to the login page"),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Username taken", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "register",
    security([])
)]
#[post("/register")]
pub async fn register(
    req: HttpRequest,
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let details = RegistrationDetails::try_from(payload.into_inner())
        .map_err(map_registration_validation_error)?;
    let user = state.registration.register(&details).await?;
    info!(user_id = user.id.get(), "account registered");

    if wants_json(&req) {
        Ok(HttpResponse::Created().json(MessageResponse::new("user registered")))
    } else {
        Ok(see_other("/login"))
    }
}

/// Authenticate and establish a session.
///
/// The session cookie is only issued on success.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 303, description = "Login success; redirect to the home page",
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    req: HttpRequest,
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let user = state.login.authenticate(&credentials).await?;
    session.persist_user(&user)?;

    if wants_json(&req) {
        Ok(HttpResponse::Ok().json(LoginResponse {
            message: "login successful".to_owned(),
            data: LoginData {
                is_admin: user.is_admin(),
                username: user.username,
            },
        }))
    } else {
        Ok(see_other("/"))
    }
}

/// End the session and return to the home page.
#[utoipa::path(
    get,
    path = "/logout",
    responses((status = 303, description = "Session cleared")),
    tags = ["users"],
    operation_id = "logout"
)]
#[get("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    if let Some(user) = session.user() {
        info!(user_id = user.user_id.get(), "session ended");
    }
    session.purge();
    see_other("/")
}

/// Profile of the signed-in user; anonymous visitors go to the login page.
#[utoipa::path(
    get,
    path = "/cabinet",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 303, description = "Not signed in; redirect to the login page"),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "cabinet"
)]
#[get("/cabinet")]
pub async fn cabinet(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let Some(current) = session.user() else {
        return Ok(see_other("/login"));
    };
    let user = state.users.find_user(current.user_id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// List registered users. Admin only.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Users", body = [UserResponse]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<UserResponse>>> {
    session.require_admin()?;
    let users = state.users.list_users().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetch one user. Admin only.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 400, description = "Invalid identifier", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    session.require_admin()?;
    let id = parse_id(&path.into_inner(), FieldName::new("id"))?;
    let id = UserId::new(id).map_err(|err| Error::invalid_request(err.to_string()))?;
    let user = state.users.find_user(id).await?;
    Ok(web::Json(UserResponse::from(user)))
}
