//! Application Startup
//!
//! Application building and server initialization. Wires the database
//! pool, the id generator, the repositories and the services together,
//! then hands the router to axum.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{
    AuthService, AuthServiceImpl, PasswordManager, PostService, PostServiceImpl, TokenManager,
    UserService, UserServiceImpl,
};
use crate::config::Settings;
use crate::infrastructure::database;
use crate::infrastructure::repositories::{
    PgCommentRepository, PgFriendshipRepository, PgLikeRepository, PgPostRepository,
    PgUserRepository,
};
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};
use crate::shared::snowflake::SnowflakeGenerator;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub auth_service: Arc<dyn AuthService>,
    pub user_service: Arc<dyn UserService>,
    pub post_service: Arc<dyn PostService>,
    pub settings: Arc<Settings>,
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        // Create database pool
        let db = database::create_pool(&settings.database).await?;
        tracing::info!("Database connection pool created");

        // Run pending migrations
        database::run_migrations(&db).await?;
        tracing::info!("Database migrations applied");

        // Stateless helpers, built once and shared by the services
        let snowflake = Arc::new(SnowflakeGenerator::new(settings.snowflake.machine_id as u64));
        let tokens = Arc::new(TokenManager::new(settings.jwt.clone()));
        let passwords = Arc::new(PasswordManager::default());

        // Repositories over the shared pool
        let user_repo = Arc::new(PgUserRepository::new(db.clone()));
        let friendship_repo = Arc::new(PgFriendshipRepository::new(db.clone()));
        let post_repo = Arc::new(PgPostRepository::new(db.clone()));
        let like_repo = Arc::new(PgLikeRepository::new(db.clone()));
        let comment_repo = Arc::new(PgCommentRepository::new(db.clone()));

        // Services, constructed once at startup
        let auth_service: Arc<dyn AuthService> = Arc::new(AuthServiceImpl::new(
            user_repo.clone(),
            tokens.clone(),
            passwords,
            snowflake.clone(),
        ));
        let user_service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(
            user_repo.clone(),
            friendship_repo,
            tokens.clone(),
            snowflake.clone(),
        ));
        let post_service: Arc<dyn PostService> = Arc::new(PostServiceImpl::new(
            post_repo,
            like_repo,
            comment_repo,
            tokens,
            snowflake,
        ));

        // Create app state
        let state = AppState {
            db,
            auth_service,
            user_service,
            post_service,
            settings: Arc::new(settings.clone()),
        };

        // Build router with middleware
        let router = routes::create_router(state)
            .layer(logging::create_trace_layer())
            .layer(cors::create_cors_layer(&settings.cors));

        // Bind to address
        let addr = settings.server.socket_addr();
        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}
