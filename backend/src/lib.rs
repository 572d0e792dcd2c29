//! User registry library modules.
//!
//! The crate follows a hexagonal layout: `domain` holds the user model,
//! use-cases and ports; `outbound` implements the driven ports; `inbound`
//! exposes the use-cases over HTTP; `middleware` carries request-scoped
//! cross-cutting concerns.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request tracing middleware.
pub use middleware::Trace;
/// Catch-all failure translation middleware.
pub use middleware::CatchAll;
/// Request-scoped trace identifier.
pub use domain::TraceId;
