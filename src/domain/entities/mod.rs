//! Domain Entities
//!
//! One module per entity, each carrying the entity struct and its
//! repository trait.

pub mod comment;
pub mod friendship;
pub mod like;
pub mod post;
pub mod user;

pub use comment::{Comment, CommentRepository};
pub use friendship::{Friendship, FriendshipRepository};
pub use like::{Like, LikeRepository};
pub use post::{Post, PostRepository, PostType};
pub use user::{User, UserRepository};
