//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local user store; contents reset on restart.
//!
//! Adapters translate between domain types and their storage
//! representation. Not-found policy stays in the domain.

pub mod memory;
