//! # Domain Layer
//!
//! Core business entities of the social network and the repository traits
//! that define their data-access contracts. This layer has no dependency
//! on infrastructure or presentation code.

pub mod entities;

// Re-export commonly used types
pub use entities::*;
