//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **AuthService**: signup/login and token issuance
//! - **UserService**: friendships, user search and lookup
//! - **PostService**: posts, the feed, likes and comments
//!
//! `TokenManager` and `PasswordManager` are stateless collaborators built
//! once at startup and injected into the services.

pub mod auth_service;
pub mod password;
pub mod post_service;
pub mod token_manager;
pub mod user_service;

// Re-export auth service types
pub use auth_service::{AuthService, AuthServiceImpl, LoginInput, SignupInput};

// Re-export user service types
pub use user_service::{UserService, UserServiceImpl, UserSummaryDto};

// Re-export post service types
pub use post_service::{
    CommentDto, CreatePostInput, PostDto, PostService, PostServiceImpl, DEFAULT_PAGE_SIZE,
};

pub use password::PasswordManager;
pub use token_manager::{Claims, TokenManager};
