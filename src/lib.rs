use std::sync::Arc;

use deadpool_redis::{Config as RedisConfig, Pool as RedisPool, Runtime};
use redis::AsyncCommands;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;
pub mod shared_repos;
pub mod telemetry;

pub use domain::{entities, use_cases, validation, password};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{auth, db, mail, utils};

use auth::jwt::JwtService;
use entities::{owned::OwnedEntity, skill::Skill};
use errors::{AppError, AuthError};
use mail::{http::HttpMailer, log::LogMailer};
use repositories::{
    mailer::Mailer,
    sqlx_repo::{SqlxOwnedRepo, SqlxProfileRepo, SqlxUserRepo},
};
use shared_repos::SharedRepositories;
use use_cases::{
    auth::AuthHandler,
    notify::NotificationHandler,
    owned::OwnedHandler,
    profile::ProfileHandler,
    skills::SkillHandler,
};

const ACCESS_DENY_PREFIX: &str = "access_deny";

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub profile_handler: AppProfileHandler,
    pub skill_handler: AppSkillHandler,
    pub notification_handler: AppNotificationHandler,
    pub repos: SharedRepositories,
    pub redis_pool: Option<RedisPool>,
    pub contact_rate_limit: u32,
}

pub type AppAuthHandler = AuthHandler<SqlxUserRepo, JwtService>;
pub type AppProfileHandler = ProfileHandler<SqlxProfileRepo>;
pub type AppSkillHandler = SkillHandler<SqlxOwnedRepo<Skill>>;
pub type AppNotificationHandler = NotificationHandler<Arc<dyn Mailer>>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Result<Self, AppError> {
        let repos = SharedRepositories::new(pool);

        let jwt_service = JwtService::new(config);
        let auth_handler = AuthHandler::new(repos.user_repo.clone(), jwt_service);
        let profile_handler = ProfileHandler::new(repos.profile_repo.clone(), config.default_user_id);
        let skill_handler = SkillHandler::new(repos.owned::<Skill>());

        let mailer: Arc<dyn Mailer> = match &config.mail_api_url {
            Some(url) => Arc::new(HttpMailer::new(url, config.mail_api_key.clone(), config.mail_timeout())?),
            None => {
                tracing::warn!("MAIL_API_URL not set; contact emails will only be logged");
                Arc::new(LogMailer)
            }
        };
        let notification_handler = NotificationHandler::new(mailer, config.mail_timeout());

        let redis_pool = config.redis_url.as_ref().and_then(|url| {
            RedisConfig::from_url(url)
                .create_pool(Some(Runtime::Tokio1))
                .map_err(|e| tracing::error!("Redis pool creation error: {}", e))
                .ok()
        });

        Ok(AppState {
            auth_handler,
            profile_handler,
            skill_handler,
            notification_handler,
            repos,
            redis_pool,
            contact_rate_limit: config.contact_rate_limit,
        })
    }

    /// CRUD use cases for one profile section.
    pub fn owned<E: OwnedEntity>(&self) -> OwnedHandler<E, SqlxOwnedRepo<E>> {
        OwnedHandler::new(self.repos.owned::<E>())
    }

    /// Increments a counter that expires `ttl_secs` after its first hit.
    /// Returns `None` when Redis is not configured.
    pub async fn redis_incr_with_ttl(&self, key: &str, ttl_secs: u64) -> Result<Option<u64>, AppError> {
        let Some(pool) = &self.redis_pool else {
            return Ok(None);
        };

        let mut conn = pool.get().await?;
        let count: u64 = conn.incr(key, 1u64).await?;
        if count == 1 {
            let _: bool = conn.expire(key, ttl_secs as i64).await?;
        }

        Ok(Some(count))
    }

    pub async fn revoke_access_token(&self, token: &str, ttl_secs: u64) -> Result<(), AuthError> {
        let Some(pool) = &self.redis_pool else {
            tracing::debug!("Redis not configured; access token not deny-listed");
            return Ok(());
        };

        let mut conn = pool.get().await
            .map_err(|e| AuthError::RedisOperation(e.to_string()))?;
        let key = format!("{}:{}", ACCESS_DENY_PREFIX, token);
        let _: () = conn.set_ex(key, 1u8, ttl_secs.max(1)).await
            .map_err(|e| AuthError::RedisOperation(e.to_string()))?;

        Ok(())
    }

    pub async fn is_token_revoked(&self, token: &str) -> Result<bool, AuthError> {
        let Some(pool) = &self.redis_pool else {
            return Ok(false);
        };

        let mut conn = pool.get().await
            .map_err(|e| AuthError::RedisOperation(e.to_string()))?;
        let key = format!("{}:{}", ACCESS_DENY_PREFIX, token);
        conn.exists(key).await
            .map_err(|e| AuthError::RedisOperation(e.to_string()))
    }
}
