//! Users API handlers.
//!
//! ```text
//! GET /users?role=ENGINEER
//! GET /users/3
//! POST /users {"name":"Z","email":"z@x.com","role":"ADMIN"}
//! PATCH /users/3 {"role":"ADMIN"}
//! DELETE /users/3
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Deserializer, Serialize, de};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{NewUser, Role, User, UserPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::ErrorEnvelope;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_user_id;

/// Query string accepted by `GET /users`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Only return users with this role. A blank value means no filter.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub role: Option<Role>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => name.parse::<Role>().map(Some).map_err(de::Error::custom),
    }
}

/// Request body for `POST /users`.
///
/// Example JSON:
/// `{"name":"Z","email":"z@x.com","role":"ADMIN"}`
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// Full name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Assigned role.
    pub role: Role,
}

impl From<CreateUserRequest> for NewUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest { name, email, role } = value;
        Self { name, email, role }
    }
}

/// Request body for `PATCH /users/{id}`.
///
/// Every field is optional. An `id` in the body is ignored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserRequest {
    /// Replacement name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replacement email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Replacement role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(value: UpdateUserRequest) -> Self {
        let UpdateUserRequest { name, email, role } = value;
        Self { name, email, role }
    }
}

/// List users, optionally filtered by role.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_registry::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Users in insertion order", body = [User]),
        (status = 400, description = "Unknown role", body = ErrorEnvelope),
        (status = 404, description = "No user has the requested role", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
    query: web::Query<ListUsersQuery>,
) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users(query.into_inner().role).await?;
    Ok(web::Json(users))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = u32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Malformed id", body = ErrorEnvelope),
        (status = 404, description = "User not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<u32>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(path.into_inner())?;
    let user = state.users.find_user(id).await?;
    Ok(web::Json(user))
}

/// Create a user; the id is assigned by the store.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created user", body = User),
        (status = 400, description = "Malformed body", body = ErrorEnvelope),
        (status = 422, description = "Record rejected by the store", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let user = state
        .users_command
        .create_user(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(user))
}

/// Apply a partial update to a user.
#[utoipa::path(
    patch,
    path = "/users/{id}",
    params(("id" = u32, Path, description = "User identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Malformed id or body", body = ErrorEnvelope),
        (status = 404, description = "User not found", body = ErrorEnvelope),
        (status = 422, description = "Record rejected by the store", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<u32>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(path.into_inner())?;
    let user = state
        .users_command
        .update_user(id, payload.into_inner().into())
        .await?;
    Ok(web::Json(user))
}

/// Remove a user and return it as it was.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = u32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Removed user", body = User),
        (status = 400, description = "Malformed id", body = ErrorEnvelope),
        (status = 404, description = "User not found", body = ErrorEnvelope),
        (status = 500, description = "Internal server error", body = ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<u32>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(path.into_inner())?;
    let user = state.users_command.delete_user(id).await?;
    Ok(web::Json(user))
}

/// Register every users route on a service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user);
}
