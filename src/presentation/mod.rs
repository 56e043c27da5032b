//! Presentation Layer
//!
//! HTTP routes, handlers, and transport middleware.

pub mod http;
pub mod middleware;
