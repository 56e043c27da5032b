//! Shared Utilities
//!
//! Error taxonomy, validation helpers, and id generation used across
//! all layers.

pub mod error;
pub mod snowflake;
pub mod validation;
