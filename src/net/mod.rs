//! Networking modules for the auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `error` defines the transport failure
//! type surfaced to the handlers.

pub mod api;
pub mod error;
