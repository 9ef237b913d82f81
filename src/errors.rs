use std::borrow::Cow;
use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use jsonwebtoken::errors::{ErrorKind, Error as JwtError};
use derive_more::Display;
use serde::Serialize;
use validator::ValidationErrors;

use crate::repositories::mailer::MailError;

#[derive(Debug)]
pub enum AppError {
    ValidationError(Vec<FieldError>),
    InvalidInput(String),
    NotFound(String),
    Conflict(String),
    UnauthorizedAccess,
    ForbiddenAccess,
    RateLimited(String),
    MailDelivery(String),
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}:{}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::UnauthorizedAccess => write!(f, "Unauthorized access"),
            AppError::ForbiddenAccess => write!(f, "Forbidden access"),
            AppError::RateLimited(msg) => write!(f, "Rate limited: {}", msg),
            AppError::MailDelivery(msg) => write!(f, "Mail delivery failed: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg)
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::ValidationError(errors) => {
                serde_json::json!({
                    "error": "Validation failed",
                    "details": errors
                })
            }
            AppError::MailDelivery(_) => {
                serde_json::json!({"error": "The email could not be sent. Please try again later."})
            }
            AppError::InternalError(_) => {
                serde_json::json!({"error": "Internal server error"})
            }
            _ => {
                serde_json::json!({"error": self.to_string()})
            }
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::UnauthorizedAccess => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenAccess => StatusCode::FORBIDDEN,
            AppError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::MailDelivery(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        field_errors.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::ValidationError(field_errors)
    }
}

impl AppError {
    pub fn to_http_response(&self) -> HttpResponse {
        self.error_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(e) if e.code() == Some(Cow::Borrowed("23505")) => {
                AppError::Conflict("Database conflict occurred".into())
            }
            sqlx::Error::Database(e) if e.code() == Some(Cow::Borrowed("23503")) => {
                AppError::Conflict("Foreign key violation".into())
            }
            sqlx::Error::RowNotFound => AppError::NotFound("Database row not found".into()),
            _ => AppError::InternalError(format!("Database error: {}", err))
        }
    }
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::InternalError(format!("Redis error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InternalError(format!("Serialization error: {}", err))
    }
}

impl From<MailError> for AppError {
    fn from(err: MailError) -> Self {
        AppError::MailDelivery(err.to_string())
    }
}

impl From<deadpool_redis::PoolError> for AppError {
    fn from(err: deadpool_redis::PoolError) -> Self {
        AppError::InternalError(format!("Redis pool error: {}", err))
    }
}

#[derive(Debug, Display)]
pub enum AuthError {
    #[display("Invalid token")]
    InvalidToken,

    #[display("Wrong credentials")]
    WrongCredentials,

    #[display("Token creation error")]
    TokenCreation,

    #[display("Token expired")]
    TokenExpired,

    #[display("Missing credentials")]
    MissingCredentials,

    #[display("Missing JWT service")]
    MissingJwtService,

    #[display("Invalid user ID")]
    InvalidUserId,

    #[display("Authentication failed")]
    AuthenticationFailed,

    #[display("Token revoked")]
    TokenRevoked,

    #[display("Redis operation failed: {_0}")]
    RedisOperation(String),

    #[display("Account no longer exists")]
    AccountDeleted,

    #[display("Account lookup failed: {_0}")]
    AccountLookup(String),
}

impl ResponseError for AuthError {
    fn error_response(&self) -> HttpResponse {
        let error_message = match self {
            AuthError::TokenExpired => "Token has expired".to_string(),
            _ => self.to_string(),
        };
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({"error": error_message}))
    }
    fn status_code(&self) -> StatusCode {
        match *self {
            AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::WrongCredentials => StatusCode::UNAUTHORIZED,
            AuthError::TokenCreation => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::TokenExpired => StatusCode::UNAUTHORIZED,
            AuthError::MissingCredentials => StatusCode::UNAUTHORIZED,
            AuthError::MissingJwtService => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::InvalidUserId => StatusCode::BAD_REQUEST,
            AuthError::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            AuthError::TokenRevoked => StatusCode::UNAUTHORIZED,
            AuthError::RedisOperation(_) => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::AccountDeleted => StatusCode::UNAUTHORIZED,
            AuthError::AccountLookup(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<JwtError> for AuthError {
    fn from(e: JwtError) -> Self {
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        }
    }
}

impl From<PasswordError> for AuthError {
    fn from(err: PasswordError) -> Self {
        tracing::warn!("Password check failed: {}", err);
        AuthError::AuthenticationFailed
    }
}

impl From<ValidationErrors> for AuthError {
    fn from(_: ValidationErrors) -> Self {
        AuthError::WrongCredentials
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::TokenCreation
            | AuthError::MissingJwtService
            | AuthError::RedisOperation(_)
            | AuthError::AccountLookup(_) => AppError::InternalError(err.to_string()),
            _ => AppError::UnauthorizedAccess,
        }
    }
}

#[derive(Debug, Display)]
pub enum PasswordError {
    #[display("Invalid password parameters: {_0}")]
    InvalidParameters(String),

    #[display("Password hashing failed: {_0}")]
    HashingError(String),

    #[display("Invalid password hash format: {_0}")]
    InvalidHashFormat(String),

    #[display("Password verification failed: {_0}")]
    VerificationError(String),
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
