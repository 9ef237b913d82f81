use uuid::Uuid;
use validator::Validate;

use crate::entities::token::{AuthResponse, Claims};
use crate::entities::user::{LoginUser, NewUser, NewUserResponse, PublicUser, User};
use crate::errors::{AppError, AuthError};
use crate::interfaces::repositories::user::UserRepository;
use crate::auth::password::{hash_password, verify_password};
use crate::repositories::token::TokenServiceRepository;

pub struct AuthHandler<R, T>
where
    R: UserRepository,
    T: TokenServiceRepository,
{
    pub user_repo: R,
    pub token_service: T,
}

impl<R, T> AuthHandler<R, T>
where
    R: UserRepository,
    T: TokenServiceRepository,
{
    pub fn new(user_repo: R, token_service: T) -> Self {
        AuthHandler {
            user_repo,
            token_service
        }
    }

    /// Registers a new user (and their empty profile) after validation and password hashing
    pub async fn register(&self, request: NewUser) -> Result<NewUserResponse, AppError> {
        request.validate()?;

        let hashed_password = hash_password(&request.password)?;
        let user_insert = request.prepare_for_insert(hashed_password);

        let id = self.user_repo.create_user(&user_insert).await?;
        tracing::info!(user_id = %id, "User registered");

        Ok(NewUserResponse {
            id,
            message: "User created successfully".to_string(),
        })
    }

    /// Logs in a user by validating credentials and generating JWTs
    pub async fn login(&self, request: LoginUser) -> Result<AuthResponse, AuthError> {
        request.validate()?;

        let email = request.email.trim().to_lowercase();
        let user = self.user_repo.get_user_by_email(&email)
            .await
            .map_err(|e| {
                tracing::error!("User lookup failed during login: {}", e);
                AuthError::WrongCredentials
            })?
            .ok_or(AuthError::WrongCredentials)?;

        let is_password_valid = verify_password(&request.password, &user.password_hash)
            .map_err(|_| AuthError::WrongCredentials)?;
        if !is_password_valid {
            return Err(AuthError::WrongCredentials);
        }

        let response = self.create_auth_response(&user)?;

        tracing::info!(user_id = %user.id, "User logged in successfully");
        Ok(response)
    }

    pub fn create_auth_response(&self, user: &User) -> Result<AuthResponse, AuthError> {
        let access_token = self.token_service.create_jwt(user)
            .map_err(|e| {
                tracing::warn!("Failed to create JWT: {}", e);
                AuthError::TokenCreation
            })?;

        let refresh_token = self.token_service.create_refresh_jwt(&user.id)
            .map_err(|e| {
                tracing::warn!("Failed to create refresh JWT: {}", e);
                AuthError::TokenCreation
            })?;
        Ok(AuthResponse::new(access_token, refresh_token))
    }

    /// Issues a fresh token pair for a valid refresh token
    pub async fn refresh_token(&self, token: &str) -> Result<AuthResponse, AuthError> {
        let decoded = self.token_service.decode_refresh_jwt(token)?;
        let user_id = Uuid::parse_str(&decoded.claims.sub)
            .map_err(|_| AuthError::InvalidUserId)?;

        let user = self.user_repo.get_user_by_id(&user_id)
            .await
            .map_err(|_| AuthError::WrongCredentials)?
            .ok_or(AuthError::WrongCredentials)?;

        self.create_auth_response(&user)
    }

    pub async fn me(&self, user_id: Uuid) -> Result<PublicUser, AppError> {
        self.user_repo.get_user_by_id(&user_id)
            .await?
            .map(PublicUser::from)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Soft deletes the account; owned rows go with it when the purge runs
    pub async fn delete_account(&self, user_id: Uuid) -> Result<(), AppError> {
        self.user_repo.delete_user(&user_id, &user_id).await?;
        tracing::info!(user_id = %user_id, "Account scheduled for deletion");
        Ok(())
    }

    /// Maps access claims to a live account. Tokens of soft-deleted
    /// accounts stop working immediately.
    pub async fn active_account(&self, claims: &Claims) -> Result<Uuid, AuthError> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidUserId)?;

        let exists = self.user_repo.user_exists(&user_id).await.map_err(|e| {
            tracing::error!("Account lookup failed: {}", e);
            AuthError::AccountLookup(e.to_string())
        })?;

        if exists {
            Ok(user_id)
        } else {
            Err(AuthError::AccountDeleted)
        }
    }
}
