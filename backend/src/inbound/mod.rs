//! Inbound adapters exposing the domain use-cases.

pub mod http;
