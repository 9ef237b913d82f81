mod test_utils;

use async_trait::async_trait;
use chrono::Utc;
use mockall::{mock, predicate::eq};
use portfolio_site::{
    auth::jwt::JwtService,
    entities::{token::{Claims, TokenType}, user::{User, UserInsert}},
    errors::{AppError, AuthError},
    repositories::user::UserRepository,
    use_cases::auth::AuthHandler,
};
use test_utils::test_config;
use uuid::Uuid;

mock! {
    pub Users {}

    #[async_trait]
    impl UserRepository for Users {
        async fn check_connection(&self) -> Result<(), AppError>;
        async fn user_exists(&self, id: &Uuid) -> Result<bool, AppError>;
        async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
        async fn create_user(&self, user: &UserInsert) -> Result<Uuid, AppError>;
        async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError>;
        async fn delete_user(&self, id: &Uuid, deleted_by: &Uuid) -> Result<(), AppError>;
        async fn purge_soft_deleted_users(&self) -> Result<u64, AppError>;
    }
}

fn claims_for(id: Uuid) -> Claims {
    let now = Utc::now().timestamp() as usize;
    Claims {
        sub: id.to_string(),
        email: "jane@example.com".into(),
        username: "jane".into(),
        exp: now + 900,
        iat: now,
        token_type: TokenType::Access,
    }
}

fn handler(users: MockUsers) -> AuthHandler<MockUsers, JwtService> {
    AuthHandler::new(users, JwtService::new(&test_config()))
}

#[tokio::test]
async fn live_account_resolves_to_its_id() {
    let id = Uuid::new_v4();
    let mut users = MockUsers::new();
    users.expect_user_exists().with(eq(id)).times(1).returning(|_| Ok(true));

    let resolved = handler(users).active_account(&claims_for(id)).await.unwrap();

    assert_eq!(resolved, id);
}

#[tokio::test]
async fn deleted_account_is_rejected() {
    let mut users = MockUsers::new();
    users.expect_user_exists().returning(|_| Ok(false));

    let result = handler(users).active_account(&claims_for(Uuid::new_v4())).await;

    assert!(matches!(result, Err(AuthError::AccountDeleted)));
}

#[tokio::test]
async fn lookup_failure_is_reported_as_such() {
    let mut users = MockUsers::new();
    users
        .expect_user_exists()
        .returning(|_| Err(AppError::InternalError("pool timed out".into())));

    let result = handler(users).active_account(&claims_for(Uuid::new_v4())).await;

    assert!(matches!(result, Err(AuthError::AccountLookup(_))));
}

#[tokio::test]
async fn malformed_subject_never_reaches_the_database() {
    let mut users = MockUsers::new();
    users.expect_user_exists().never();

    let mut claims = claims_for(Uuid::new_v4());
    claims.sub = "not-a-uuid".into();

    let result = handler(users).active_account(&claims).await;

    assert!(matches!(result, Err(AuthError::InvalidUserId)));
}
