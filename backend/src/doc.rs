//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every users endpoint, both health probes and the
//! schemas they reference. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::domain::{Role, User};
use crate::inbound::http::ErrorEnvelope;
use crate::inbound::http::users::{CreateUserRequest, UpdateUserRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User registry API",
        description = "CRUD interface over an in-memory user directory, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, Role, CreateUserRequest, UpdateUserRequest, ErrorEnvelope)),
    tags(
        (name = "users", description = "Operations related to users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
