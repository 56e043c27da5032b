//! Post Service
//!
//! Post creation, the paginated feed, the like/deslike toggle and
//! comments. The feed tolerates empty pages; the other listing
//! operations treat emptiness as a not-found condition.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{
    Comment, CommentRepository, Like, LikeRepository, Post, PostRepository, PostType,
};
use crate::shared::error::DomainError;
use crate::shared::snowflake::SnowflakeGenerator;
use crate::shared::validation::{parse_id, required};

use super::token_manager::TokenManager;
use super::user_service::UserSummaryDto;

/// Feed page size when the request does not specify one.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Create-post input record.
#[derive(Debug, Clone, Default)]
pub struct CreatePostInput {
    pub photo: Option<String>,
    pub description: Option<String>,
    pub post_type: Option<String>,
}

/// Post data transfer object
#[derive(Debug, Clone)]
pub struct PostDto {
    pub id: String,
    pub photo: String,
    pub description: String,
    pub post_type: String,
    pub created_at: String,
    pub author_id: String,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            photo: post.photo_url,
            description: post.description,
            post_type: post.post_type.as_str().to_string(),
            created_at: post.created_at.to_rfc3339(),
            author_id: post.author_id.to_string(),
        }
    }
}

/// Comment data transfer object
#[derive(Debug, Clone)]
pub struct CommentDto {
    pub id: String,
    pub comment: String,
    pub user_id: String,
    pub post_id: String,
    pub created_at: String,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            comment: comment.content,
            user_id: comment.user_id.to_string(),
            post_id: comment.post_id.to_string(),
            created_at: comment.created_at.to_rfc3339(),
        }
    }
}

/// Post service trait for dependency injection
#[async_trait]
pub trait PostService: Send + Sync {
    /// Create a post authored by the caller.
    async fn create_post(
        &self,
        token: Option<&str>,
        input: CreatePostInput,
    ) -> Result<(), DomainError>;

    /// Look up a single post.
    async fn get_post(
        &self,
        token: Option<&str>,
        post_id: Option<&str>,
    ) -> Result<PostDto, DomainError>;

    /// The feed: newest-first, paginated. Empty pages are valid.
    async fn list_posts(
        &self,
        token: Option<&str>,
        page: Option<u32>,
        size: Option<u32>,
    ) -> Result<Vec<PostDto>, DomainError>;

    /// Like a post (not-liked -> liked transition only).
    async fn like_post(
        &self,
        token: Option<&str>,
        post_id: Option<&str>,
    ) -> Result<(), DomainError>;

    /// Remove the caller's like (liked -> not-liked transition only).
    async fn deslike_post(
        &self,
        token: Option<&str>,
        post_id: Option<&str>,
    ) -> Result<(), DomainError>;

    /// Who liked a post.
    async fn get_likes(
        &self,
        token: Option<&str>,
        post_id: Option<&str>,
    ) -> Result<Vec<UserSummaryDto>, DomainError>;

    /// Comment on a post.
    async fn comment_on_post(
        &self,
        token: Option<&str>,
        post_id: Option<&str>,
        comment: Option<&str>,
    ) -> Result<(), DomainError>;

    /// All comments on a post.
    async fn get_comments(
        &self,
        token: Option<&str>,
        post_id: Option<&str>,
    ) -> Result<Vec<CommentDto>, DomainError>;
}

/// PostService implementation
pub struct PostServiceImpl<P, L, C>
where
    P: PostRepository,
    L: LikeRepository,
    C: CommentRepository,
{
    post_repo: Arc<P>,
    like_repo: Arc<L>,
    comment_repo: Arc<C>,
    tokens: Arc<TokenManager>,
    id_generator: Arc<SnowflakeGenerator>,
}

impl<P, L, C> PostServiceImpl<P, L, C>
where
    P: PostRepository,
    L: LikeRepository,
    C: CommentRepository,
{
    pub fn new(
        post_repo: Arc<P>,
        like_repo: Arc<L>,
        comment_repo: Arc<C>,
        tokens: Arc<TokenManager>,
        id_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            post_repo,
            like_repo,
            comment_repo,
            tokens,
            id_generator,
        }
    }

    /// Resolve a post id argument to a stored post.
    async fn resolve_post(&self, post_id: Option<&str>) -> Result<Post, DomainError> {
        let post_id = required(post_id, DomainError::MissingPostId)?;
        let post_id = parse_id(post_id, DomainError::PostNotFound)?;

        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound)
    }
}

#[async_trait]
impl<P, L, C> PostService for PostServiceImpl<P, L, C>
where
    P: PostRepository + 'static,
    L: LikeRepository + 'static,
    C: CommentRepository + 'static,
{
    async fn create_post(
        &self,
        token: Option<&str>,
        input: CreatePostInput,
    ) -> Result<(), DomainError> {
        let author_id = self.tokens.verify(token)?;

        let photo = required(input.photo.as_deref(), DomainError::MissingPhoto)?;
        let description = required(input.description.as_deref(), DomainError::MissingDescription)?;
        let post_type = required(input.post_type.as_deref(), DomainError::MissingPostType)?;
        let post_type = PostType::parse(post_type).ok_or(DomainError::InvalidPostType)?;

        let post = Post {
            id: self.id_generator.generate(),
            photo_url: photo.to_string(),
            description: description.to_string(),
            post_type,
            created_at: Utc::now(),
            author_id,
        };

        self.post_repo.create(&post).await?;
        tracing::info!(post_id = post.id, author_id, "Post created");

        Ok(())
    }

    async fn get_post(
        &self,
        token: Option<&str>,
        post_id: Option<&str>,
    ) -> Result<PostDto, DomainError> {
        self.tokens.verify(token)?;

        let post = self.resolve_post(post_id).await?;
        Ok(PostDto::from(post))
    }

    async fn list_posts(
        &self,
        token: Option<&str>,
        page: Option<u32>,
        size: Option<u32>,
    ) -> Result<Vec<PostDto>, DomainError> {
        self.tokens.verify(token)?;

        // Zero counts as absent, matching the transport's falsy convention.
        let page = page.filter(|p| *p > 0).unwrap_or(1);
        let size = size.filter(|s| *s > 0).unwrap_or(DEFAULT_PAGE_SIZE);

        // An offset past any storable row count is just an empty page
        let offset = i64::from(size)
            .checked_mul(i64::from(page - 1))
            .unwrap_or(i64::MAX);

        let posts = self.post_repo.list(i64::from(size), offset).await?;
        Ok(posts.into_iter().map(PostDto::from).collect())
    }

    async fn like_post(
        &self,
        token: Option<&str>,
        post_id: Option<&str>,
    ) -> Result<(), DomainError> {
        let user_id = self.tokens.verify(token)?;
        let post = self.resolve_post(post_id).await?;

        // Direct pair lookup; the unique constraint is authoritative.
        if self.like_repo.exists(user_id, post.id).await? {
            return Err(DomainError::DuplicateLike);
        }

        let like = Like {
            id: self.id_generator.generate(),
            user_id,
            post_id: post.id,
        };

        self.like_repo.create(&like).await
    }

    async fn deslike_post(
        &self,
        token: Option<&str>,
        post_id: Option<&str>,
    ) -> Result<(), DomainError> {
        let user_id = self.tokens.verify(token)?;
        let post = self.resolve_post(post_id).await?;

        if !self.like_repo.exists(user_id, post.id).await? {
            return Err(DomainError::NotLiked);
        }

        self.like_repo.delete(user_id, post.id).await?;
        Ok(())
    }

    async fn get_likes(
        &self,
        token: Option<&str>,
        post_id: Option<&str>,
    ) -> Result<Vec<UserSummaryDto>, DomainError> {
        self.tokens.verify(token)?;
        let post = self.resolve_post(post_id).await?;

        let likers = self.like_repo.find_likers(post.id).await?;
        if likers.is_empty() {
            return Err(DomainError::NoLikes);
        }

        Ok(likers.into_iter().map(UserSummaryDto::from).collect())
    }

    async fn comment_on_post(
        &self,
        token: Option<&str>,
        post_id: Option<&str>,
        comment: Option<&str>,
    ) -> Result<(), DomainError> {
        let user_id = self.tokens.verify(token)?;

        // The comment text check runs before the post id checks.
        let content = required(comment, DomainError::MissingComment)?;
        let post = self.resolve_post(post_id).await?;

        let comment = Comment {
            id: self.id_generator.generate(),
            content: content.to_string(),
            user_id,
            post_id: post.id,
            created_at: Utc::now(),
        };

        self.comment_repo.create(&comment).await?;
        Ok(())
    }

    async fn get_comments(
        &self,
        token: Option<&str>,
        post_id: Option<&str>,
    ) -> Result<Vec<CommentDto>, DomainError> {
        self.tokens.verify(token)?;
        let post = self.resolve_post(post_id).await?;

        let comments = self.comment_repo.find_by_post(post.id).await?;
        if comments.is_empty() {
            return Err(DomainError::NoComments);
        }

        Ok(comments.into_iter().map(CommentDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::testing::{create_post, signup_user, stack};
    use super::*;

    #[tokio::test]
    async fn create_post_persists_with_caller_as_author() {
        let stack = stack();
        let (token, ana_id) = signup_user(&stack, "Ana", "ana@x.com").await;

        stack
            .posts
            .create_post(
                Some(&token),
                CreatePostInput {
                    photo: Some("p.jpg".into()),
                    description: Some("hi".into()),
                    post_type: Some("normal".into()),
                },
            )
            .await
            .unwrap();

        let feed = stack.posts.list_posts(Some(&token), None, None).await.unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].photo, "p.jpg");
        assert_eq!(feed[0].author_id, ana_id);
    }

    #[tokio::test]
    async fn create_post_check_order() {
        let stack = stack();
        let (token, _) = signup_user(&stack, "Ana", "ana@x.com").await;

        assert!(matches!(
            stack
                .posts
                .create_post(Some(&token), CreatePostInput::default())
                .await,
            Err(DomainError::MissingPhoto)
        ));

        assert!(matches!(
            stack
                .posts
                .create_post(
                    Some(&token),
                    CreatePostInput {
                        photo: Some("p.jpg".into()),
                        ..Default::default()
                    },
                )
                .await,
            Err(DomainError::MissingDescription)
        ));

        assert!(matches!(
            stack
                .posts
                .create_post(
                    Some(&token),
                    CreatePostInput {
                        photo: Some("p.jpg".into()),
                        description: Some("hi".into()),
                        post_type: None,
                    },
                )
                .await,
            Err(DomainError::MissingPostType)
        ));

        assert!(matches!(
            stack
                .posts
                .create_post(
                    Some(&token),
                    CreatePostInput {
                        photo: Some("p.jpg".into()),
                        description: Some("hi".into()),
                        post_type: Some("story".into()),
                    },
                )
                .await,
            Err(DomainError::InvalidPostType)
        ));

        assert!(matches!(
            stack
                .posts
                .create_post(None, CreatePostInput::default())
                .await,
            Err(DomainError::Unauthenticated(_))
        ));
    }

    #[tokio::test]
    async fn get_post_by_id() {
        let stack = stack();
        let (token, _) = signup_user(&stack, "Ana", "ana@x.com").await;
        let post_id = create_post(&stack, &token, "hello feed").await;

        let post = stack
            .posts
            .get_post(Some(&token), Some(&post_id))
            .await
            .unwrap();
        assert_eq!(post.description, "hello feed");

        assert!(matches!(
            stack.posts.get_post(Some(&token), Some("987654")).await,
            Err(DomainError::PostNotFound)
        ));
        assert!(matches!(
            stack.posts.get_post(Some(&token), None).await,
            Err(DomainError::MissingPostId)
        ));
    }

    #[tokio::test]
    async fn feed_paginates_newest_first() {
        let stack = stack();
        let (token, _) = signup_user(&stack, "Ana", "ana@x.com").await;

        for i in 1..=7 {
            create_post(&stack, &token, &format!("post {}", i)).await;
        }

        let page1 = stack
            .posts
            .list_posts(Some(&token), Some(1), Some(5))
            .await
            .unwrap();
        let descriptions: Vec<&str> = page1.iter().map(|p| p.description.as_str()).collect();
        assert_eq!(
            descriptions,
            vec!["post 7", "post 6", "post 5", "post 4", "post 3"]
        );

        let page2 = stack
            .posts
            .list_posts(Some(&token), Some(2), Some(5))
            .await
            .unwrap();
        let descriptions: Vec<&str> = page2.iter().map(|p| p.description.as_str()).collect();
        assert_eq!(descriptions, vec!["post 2", "post 1"]);
    }

    #[tokio::test]
    async fn feed_defaults_and_empty_pages() {
        let stack = stack();
        let (token, _) = signup_user(&stack, "Ana", "ana@x.com").await;

        // An empty feed is a valid result, not an error
        let feed = stack.posts.list_posts(Some(&token), None, None).await.unwrap();
        assert!(feed.is_empty());

        for i in 1..=6 {
            create_post(&stack, &token, &format!("post {}", i)).await;
        }

        // Defaults: page 1, size 5; zero counts as absent
        let feed = stack
            .posts
            .list_posts(Some(&token), Some(0), Some(0))
            .await
            .unwrap();
        assert_eq!(feed.len(), 5);
        assert_eq!(feed[0].description, "post 6");

        // A page past the end is empty, still not an error
        let feed = stack
            .posts
            .list_posts(Some(&token), Some(4), Some(5))
            .await
            .unwrap();
        assert!(feed.is_empty());

        // Extreme page/size values saturate rather than overflow the offset
        let feed = stack
            .posts
            .list_posts(Some(&token), Some(u32::MAX), Some(u32::MAX))
            .await
            .unwrap();
        assert!(feed.is_empty());
    }

    #[tokio::test]
    async fn like_toggle_transitions() {
        let stack = stack();
        let (token, _) = signup_user(&stack, "Ana", "ana@x.com").await;
        let post_id = create_post(&stack, &token, "likeable").await;

        // not-liked -> liked
        stack
            .posts
            .like_post(Some(&token), Some(&post_id))
            .await
            .unwrap();

        // liked -> liked is rejected
        assert!(matches!(
            stack.posts.like_post(Some(&token), Some(&post_id)).await,
            Err(DomainError::DuplicateLike)
        ));

        // liked -> not-liked
        stack
            .posts
            .deslike_post(Some(&token), Some(&post_id))
            .await
            .unwrap();

        // not-liked -> not-liked is rejected
        assert!(matches!(
            stack.posts.deslike_post(Some(&token), Some(&post_id)).await,
            Err(DomainError::NotLiked)
        ));

        // The full cycle can restart
        stack
            .posts
            .like_post(Some(&token), Some(&post_id))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn likes_listing() {
        let stack = stack();
        let (ana_token, _) = signup_user(&stack, "Ana", "ana@x.com").await;
        let (bia_token, bia_id) = signup_user(&stack, "Bia", "bia@x.com").await;
        let post_id = create_post(&stack, &ana_token, "popular").await;

        assert!(matches!(
            stack.posts.get_likes(Some(&ana_token), Some(&post_id)).await,
            Err(DomainError::NoLikes)
        ));

        stack
            .posts
            .like_post(Some(&bia_token), Some(&post_id))
            .await
            .unwrap();

        let likers = stack
            .posts
            .get_likes(Some(&ana_token), Some(&post_id))
            .await
            .unwrap();
        assert_eq!(likers.len(), 1);
        assert_eq!(likers[0].id, bia_id);
        assert_eq!(likers[0].name, "Bia");
    }

    #[tokio::test]
    async fn comments() {
        let stack = stack();
        let (token, ana_id) = signup_user(&stack, "Ana", "ana@x.com").await;
        let post_id = create_post(&stack, &token, "discussable").await;

        // The missing-comment check fires before the missing-post-id check
        assert!(matches!(
            stack.posts.comment_on_post(Some(&token), None, None).await,
            Err(DomainError::MissingComment)
        ));

        assert!(matches!(
            stack
                .posts
                .comment_on_post(Some(&token), None, Some("nice"))
                .await,
            Err(DomainError::MissingPostId)
        ));

        assert!(matches!(
            stack.posts.get_comments(Some(&token), Some(&post_id)).await,
            Err(DomainError::NoComments)
        ));

        stack
            .posts
            .comment_on_post(Some(&token), Some(&post_id), Some("first!"))
            .await
            .unwrap();
        stack
            .posts
            .comment_on_post(Some(&token), Some(&post_id), Some("second!"))
            .await
            .unwrap();

        // Multiple comments per (user, post) are allowed
        let comments = stack
            .posts
            .get_comments(Some(&token), Some(&post_id))
            .await
            .unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].comment, "first!");
        assert_eq!(comments[0].user_id, ana_id);
    }
}
