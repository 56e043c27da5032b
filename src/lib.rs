//! # Social Server
//!
//! A social-networking backend implemented in Rust.
//!
//! Users sign up, befriend each other, publish posts and react with likes
//! and comments. Every request beyond signup/login carries a bearer token
//! that is verified inside the services.
//!
//! ## Architecture
//!
//! - `config` - Settings loading from files and environment
//! - `domain` - Entities and repository traits
//! - `application` - Services and DTOs
//! - `infrastructure` - PostgreSQL repositories and the pool
//! - `presentation` - HTTP handlers, routes and middleware
//! - `shared` - Errors, validation helpers and the id generator

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod startup;
pub mod telemetry;
