//! Domain primitives, use-cases and ports.
//!
//! Purpose: Define strongly typed user records and the list/fetch/create/
//! update/delete use-cases over them. Keep types transport agnostic; adapters
//! in `inbound` and `outbound` translate to and from HTTP and storage.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport agnostic failure payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable failure category.
//! - User, UserId, Role, NewUser, UserPatch: the user record model.
//! - UsersService: use-case implementation backed by a `UserRepository`.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod users_service;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, Role, RoleParseError, User, UserId, UserPatch, UserValidationError};
pub use self::users_service::UsersService;

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
