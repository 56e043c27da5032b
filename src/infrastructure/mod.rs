//! Infrastructure Layer
//!
//! Contains implementations for external services:
//! - Database pool and migrations (PostgreSQL)
//! - Repository implementations of the domain traits

pub mod database;
pub mod repositories;
