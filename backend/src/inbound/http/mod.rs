//! HTTP inbound adapter exposing REST endpoints.
//!
//! Handlers depend on domain ports only. Every failure they raise travels as
//! an `actix_web::Error` to the [`CatchAll`](crate::middleware::CatchAll)
//! middleware, which classifies it into a [`failure::Failure`] and renders it
//! through the [`error_translator::ErrorTranslator`].

pub mod app;
pub mod error;
pub mod error_translator;
pub mod failure;
pub mod health;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;
pub use error_translator::{ErrorEnvelope, ErrorTranslator, RenderedFailure, ResponsePayload};
pub use failure::Failure;
