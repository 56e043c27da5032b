//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints. Handlers are thin: they
//! extract the optional bearer token and the request record, call the
//! matching domain service, and serialize the result.

pub mod auth;
pub mod health;
pub mod post;
pub mod user;
