//! User Service
//!
//! Friend-edge creation, removal and listing, user search and lookup.
//! Every operation verifies the caller's token before anything else; the
//! remaining checks run in a fixed order so the first failure wins.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Friendship, FriendshipRepository, User, UserRepository};
use crate::shared::error::DomainError;
use crate::shared::snowflake::SnowflakeGenerator;
use crate::shared::validation::{parse_id, required};

use super::token_manager::TokenManager;

/// User service trait for dependency injection
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a friend edge between the caller and `friend_id`.
    async fn add_friend(
        &self,
        token: Option<&str>,
        friend_id: Option<&str>,
    ) -> Result<(), DomainError>;

    /// Remove the friend edge between the caller and `friend_id`,
    /// whichever way it was stored.
    async fn remove_friend(
        &self,
        token: Option<&str>,
        friend_id: Option<&str>,
    ) -> Result<(), DomainError>;

    /// List the friends of `user_id` (any authenticated caller may look).
    async fn list_friends(
        &self,
        token: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<Vec<UserSummaryDto>, DomainError>;

    /// Case-insensitive substring search on user names.
    async fn search_users(
        &self,
        token: Option<&str>,
        term: Option<&str>,
    ) -> Result<Vec<UserSummaryDto>, DomainError>;

    /// Look up a single user by id.
    async fn get_user(
        &self,
        token: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<UserSummaryDto, DomainError>;
}

/// User summary data transfer object. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummaryDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserSummaryDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
        }
    }
}

/// UserService implementation
pub struct UserServiceImpl<U, F>
where
    U: UserRepository,
    F: FriendshipRepository,
{
    user_repo: Arc<U>,
    friendship_repo: Arc<F>,
    tokens: Arc<TokenManager>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl<U, F> UserServiceImpl<U, F>
where
    U: UserRepository,
    F: FriendshipRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        friendship_repo: Arc<F>,
        tokens: Arc<TokenManager>,
        id_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            user_repo,
            friendship_repo,
            tokens,
            id_generator,
        }
    }

    /// Shared pre-checks for add/remove: resolve the target and reject
    /// self-relations. Returns (caller_id, friend_id).
    async fn resolve_friend_pair(
        &self,
        token: Option<&str>,
        friend_id: Option<&str>,
    ) -> Result<(i64, i64), DomainError> {
        let caller_id = self.tokens.verify(token)?;

        let friend_id = required(friend_id, DomainError::MissingFriendId)?;
        let friend_id = parse_id(friend_id, DomainError::FriendNotFound)?;

        self.user_repo
            .find_by_id(friend_id)
            .await?
            .ok_or(DomainError::FriendNotFound)?;

        if caller_id == friend_id {
            return Err(DomainError::SelfFriendship);
        }

        Ok((caller_id, friend_id))
    }
}

#[async_trait]
impl<U, F> UserService for UserServiceImpl<U, F>
where
    U: UserRepository + 'static,
    F: FriendshipRepository + 'static,
{
    async fn add_friend(
        &self,
        token: Option<&str>,
        friend_id: Option<&str>,
    ) -> Result<(), DomainError> {
        let (caller_id, friend_id) = self.resolve_friend_pair(token, friend_id).await?;

        // Advisory; the symmetric unique index is authoritative.
        if self.friendship_repo.pair_exists(caller_id, friend_id).await? {
            return Err(DomainError::AlreadyFriends);
        }

        let friendship = Friendship {
            id: self.id_generator.generate(),
            user_id: caller_id,
            friend_id,
        };

        self.friendship_repo.create(&friendship).await?;
        tracing::info!(user_id = caller_id, friend_id, "Friendship created");

        Ok(())
    }

    async fn remove_friend(
        &self,
        token: Option<&str>,
        friend_id: Option<&str>,
    ) -> Result<(), DomainError> {
        let (caller_id, friend_id) = self.resolve_friend_pair(token, friend_id).await?;

        if !self.friendship_repo.pair_exists(caller_id, friend_id).await? {
            return Err(DomainError::NotFriends);
        }

        self.friendship_repo.delete_pair(caller_id, friend_id).await?;
        tracing::info!(user_id = caller_id, friend_id, "Friendship removed");

        Ok(())
    }

    async fn list_friends(
        &self,
        token: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<Vec<UserSummaryDto>, DomainError> {
        self.tokens.verify(token)?;

        let user_id = required(user_id, DomainError::MissingUserId)?;
        let user_id = parse_id(user_id, DomainError::UserNotFound)?;

        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let friends = self.friendship_repo.find_friends_of(user_id).await?;
        if friends.is_empty() {
            return Err(DomainError::NoFriends);
        }

        Ok(friends.into_iter().map(UserSummaryDto::from).collect())
    }

    async fn search_users(
        &self,
        token: Option<&str>,
        term: Option<&str>,
    ) -> Result<Vec<UserSummaryDto>, DomainError> {
        self.tokens.verify(token)?;

        let term = required(term, DomainError::MissingSearchTerm)?;

        let users = self.user_repo.search_by_name(term).await?;
        if users.is_empty() {
            return Err(DomainError::NoUsersFound);
        }

        Ok(users.into_iter().map(UserSummaryDto::from).collect())
    }

    async fn get_user(
        &self,
        token: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<UserSummaryDto, DomainError> {
        self.tokens.verify(token)?;

        let user_id = required(user_id, DomainError::MissingUserId)?;
        let user_id = parse_id(user_id, DomainError::UserNotFound)?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        Ok(UserSummaryDto::from(user))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::testing::{signup_user, stack};
    use super::*;

    #[tokio::test]
    async fn add_friend_is_symmetric_in_listing() {
        let stack = stack();
        let (ana_token, ana_id) = signup_user(&stack, "Ana", "ana@x.com").await;
        let (bia_token, bia_id) = signup_user(&stack, "Bia", "bia@x.com").await;

        stack
            .users
            .add_friend(Some(&ana_token), Some(&bia_id))
            .await
            .unwrap();

        let ana_friends = stack
            .users
            .list_friends(Some(&bia_token), Some(&ana_id))
            .await
            .unwrap();
        let bia_friends = stack
            .users
            .list_friends(Some(&ana_token), Some(&bia_id))
            .await
            .unwrap();

        assert_eq!(ana_friends.len(), 1);
        assert_eq!(ana_friends[0].id, bia_id);
        assert_eq!(bia_friends.len(), 1);
        assert_eq!(bia_friends[0].id, ana_id);
        assert_eq!(bia_friends[0].name, "Ana");
    }

    #[tokio::test]
    async fn duplicate_edge_rejected_in_both_directions() {
        let stack = stack();
        let (ana_token, ana_id) = signup_user(&stack, "Ana", "ana@x.com").await;
        let (bia_token, bia_id) = signup_user(&stack, "Bia", "bia@x.com").await;

        stack
            .users
            .add_friend(Some(&ana_token), Some(&bia_id))
            .await
            .unwrap();

        // Same direction
        assert!(matches!(
            stack.users.add_friend(Some(&ana_token), Some(&bia_id)).await,
            Err(DomainError::AlreadyFriends)
        ));

        // Reverse direction: the edge is the same relationship
        assert!(matches!(
            stack.users.add_friend(Some(&bia_token), Some(&ana_id)).await,
            Err(DomainError::AlreadyFriends)
        ));
    }

    #[tokio::test]
    async fn add_friend_pre_checks() {
        let stack = stack();
        let (ana_token, ana_id) = signup_user(&stack, "Ana", "ana@x.com").await;

        assert!(matches!(
            stack.users.add_friend(None, Some(&ana_id)).await,
            Err(DomainError::Unauthenticated(_))
        ));

        assert!(matches!(
            stack.users.add_friend(Some(&ana_token), None).await,
            Err(DomainError::MissingFriendId)
        ));

        assert!(matches!(
            stack.users.add_friend(Some(&ana_token), Some("999999")).await,
            Err(DomainError::FriendNotFound)
        ));

        assert!(matches!(
            stack.users.add_friend(Some(&ana_token), Some(&ana_id)).await,
            Err(DomainError::SelfFriendship)
        ));
    }

    #[tokio::test]
    async fn remove_friend_deletes_the_edge_regardless_of_order() {
        let stack = stack();
        let (ana_token, ana_id) = signup_user(&stack, "Ana", "ana@x.com").await;
        let (bia_token, bia_id) = signup_user(&stack, "Bia", "bia@x.com").await;

        stack
            .users
            .add_friend(Some(&ana_token), Some(&bia_id))
            .await
            .unwrap();

        // Bia removes the edge Ana inserted
        stack
            .users
            .remove_friend(Some(&bia_token), Some(&ana_id))
            .await
            .unwrap();

        assert!(matches!(
            stack.users.list_friends(Some(&ana_token), Some(&ana_id)).await,
            Err(DomainError::NoFriends)
        ));
        assert!(matches!(
            stack.users.list_friends(Some(&ana_token), Some(&bia_id)).await,
            Err(DomainError::NoFriends)
        ));
    }

    #[tokio::test]
    async fn remove_friend_without_edge_is_rejected() {
        let stack = stack();
        let (ana_token, _) = signup_user(&stack, "Ana", "ana@x.com").await;
        let (_, bia_id) = signup_user(&stack, "Bia", "bia@x.com").await;

        assert!(matches!(
            stack.users.remove_friend(Some(&ana_token), Some(&bia_id)).await,
            Err(DomainError::NotFriends)
        ));
    }

    #[tokio::test]
    async fn list_friends_validations() {
        let stack = stack();
        let (ana_token, _) = signup_user(&stack, "Ana", "ana@x.com").await;

        assert!(matches!(
            stack.users.list_friends(Some(&ana_token), None).await,
            Err(DomainError::MissingUserId)
        ));

        assert!(matches!(
            stack.users.list_friends(Some(&ana_token), Some("424242")).await,
            Err(DomainError::UserNotFound)
        ));
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let stack = stack();
        let (token, _) = signup_user(&stack, "Ana Clara", "ana@x.com").await;
        signup_user(&stack, "Mariana", "mariana@x.com").await;
        signup_user(&stack, "Bruno", "bruno@x.com").await;

        let hits = stack
            .users
            .search_users(Some(&token), Some("ANA"))
            .await
            .unwrap();
        let names: Vec<&str> = hits.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Ana Clara"));
        assert!(names.contains(&"Mariana"));

        assert!(matches!(
            stack.users.search_users(Some(&token), None).await,
            Err(DomainError::MissingSearchTerm)
        ));

        assert!(matches!(
            stack.users.search_users(Some(&token), Some("zzz")).await,
            Err(DomainError::NoUsersFound)
        ));
    }

    #[tokio::test]
    async fn get_user_returns_summary_without_hash() {
        let stack = stack();
        let (token, ana_id) = signup_user(&stack, "Ana", "ana@x.com").await;

        let summary = stack
            .users
            .get_user(Some(&token), Some(&ana_id))
            .await
            .unwrap();
        assert_eq!(summary.name, "Ana");
        assert_eq!(summary.email, "ana@x.com");

        assert!(matches!(
            stack.users.get_user(Some(&token), Some("31337")).await,
            Err(DomainError::UserNotFound)
        ));
        assert!(matches!(
            stack.users.get_user(Some(&token), None).await,
            Err(DomainError::MissingUserId)
        ));
    }
}
