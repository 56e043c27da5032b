//! Friendship entity and repository trait.
//!
//! A friendship is an undirected edge between two users, persisted as an
//! ordered `(user_id, friend_id)` row. The repository contract is fully
//! symmetric so services never reason about which side a row was inserted
//! from; a unique index over the normalized pair keeps at most one row per
//! unordered pair.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::user::User;
use crate::shared::error::DomainError;

/// An undirected friend edge, stored as an ordered row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Friendship {
    /// Snowflake ID (primary key)
    pub id: i64,

    /// One endpoint (the user who initiated the edge)
    pub user_id: i64,

    /// The other endpoint
    pub friend_id: i64,
}

impl Friendship {
    /// Whether this edge connects the given unordered pair.
    pub fn connects(&self, a: i64, b: i64) -> bool {
        (self.user_id == a && self.friend_id == b) || (self.user_id == b && self.friend_id == a)
    }

    /// Whether this edge touches the given user.
    pub fn touches(&self, user_id: i64) -> bool {
        self.user_id == user_id || self.friend_id == user_id
    }

    /// The endpoint that is not `user_id`. Caller must ensure the edge
    /// touches `user_id`.
    pub fn other_endpoint(&self, user_id: i64) -> i64 {
        if self.user_id == user_id {
            self.friend_id
        } else {
            self.user_id
        }
    }
}

/// Repository trait for the friend-edge relation.
///
/// Every operation treats `(a, b)` and `(b, a)` as the same edge.
#[async_trait]
pub trait FriendshipRepository: Send + Sync {
    /// Insert a new edge. The symmetric unique index maps onto
    /// `DomainError::AlreadyFriends`.
    async fn create(&self, friendship: &Friendship) -> Result<(), DomainError>;

    /// Delete the edge between `a` and `b` regardless of stored order.
    /// Returns the number of rows removed.
    async fn delete_pair(&self, a: i64, b: i64) -> Result<u64, DomainError>;

    /// Whether an edge exists between `a` and `b` in either stored order.
    async fn pair_exists(&self, a: i64, b: i64) -> Result<bool, DomainError>;

    /// All users connected to `user_id`, projecting the *other* endpoint
    /// of each edge touching them.
    async fn find_friends_of(&self, user_id: i64) -> Result<Vec<User>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connects_is_symmetric() {
        let edge = Friendship {
            id: 1,
            user_id: 10,
            friend_id: 20,
        };
        assert!(edge.connects(10, 20));
        assert!(edge.connects(20, 10));
        assert!(!edge.connects(10, 30));
    }

    #[test]
    fn other_endpoint_resolves_either_side() {
        let edge = Friendship {
            id: 1,
            user_id: 10,
            friend_id: 20,
        };
        assert_eq!(edge.other_endpoint(10), 20);
        assert_eq!(edge.other_endpoint(20), 10);
    }
}
