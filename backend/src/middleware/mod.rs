//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route. [`Trace`] scopes
//! a correlation id around each request; [`CatchAll`] turns every failure into
//! an error envelope.

pub mod catch_all;
pub mod trace;

pub use catch_all::CatchAll;
pub use trace::Trace;
