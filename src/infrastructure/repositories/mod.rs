//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits. Each
//! repository handles data access for one entity type and maps
//! constraint violations onto the matching domain error, so the store
//! enforces every uniqueness invariant independently of the services'
//! advisory pre-checks.

pub mod comment_repository;
pub mod friendship_repository;
pub mod like_repository;
pub mod post_repository;
pub mod user_repository;

pub use comment_repository::PgCommentRepository;
pub use friendship_repository::PgFriendshipRepository;
pub use like_repository::PgLikeRepository;
pub use post_repository::PgPostRepository;
pub use user_repository::PgUserRepository;
