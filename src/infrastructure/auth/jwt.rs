use jsonwebtoken::{encode, Header, decode, Validation, TokenData, Algorithm};
use chrono::{Utc, Duration};
use uuid::Uuid;
use crate::entities::token::{Claims, RefreshClaims, TokenType};
use crate::entities::user::User;
use crate::repositories::token::TokenServiceRepository;
use crate::settings::{AppConfig, JwtKeys};
use crate::errors::AuthError;

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    access_expiration: Duration,
    refresh_expiration: Duration,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            access_expiration: Duration::minutes(config.jwt_expiration_minutes),
            refresh_expiration: Duration::days(config.refresh_token_exp_days),
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation
    }
}

impl TokenServiceRepository for JwtService {
    fn create_jwt(&self, user: &User) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            username: user.username.clone(),
            exp: (now + self.access_expiration).timestamp() as usize,
            iat: now.timestamp() as usize,
            token_type: TokenType::Access,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding)
            .map_err(|_| AuthError::TokenCreation)
    }

    fn create_refresh_jwt(&self, user_id: &Uuid) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = RefreshClaims {
            sub: user_id.to_string(),
            exp: (now + self.refresh_expiration).timestamp() as usize,
            iat: now.timestamp() as usize,
            token_type: TokenType::Refresh,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.refresh_encoding)
            .map_err(|_| AuthError::TokenCreation)
    }

    fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let data = decode::<Claims>(token, &self.keys.decoding, &Self::validation())?;
        if data.claims.token_type != TokenType::Access {
            return Err(AuthError::InvalidToken);
        }
        Ok(data)
    }

    fn decode_refresh_jwt(&self, token: &str) -> Result<TokenData<RefreshClaims>, AuthError> {
        let data = decode::<RefreshClaims>(token, &self.keys.refresh_decoding, &Self::validation())?;
        if data.claims.token_type != TokenType::Refresh {
            return Err(AuthError::InvalidToken);
        }
        Ok(data)
    }
}

/// Seconds until `exp`, zero once it has passed.
pub fn seconds_until(exp: usize) -> u64 {
    let now = Utc::now().timestamp().max(0) as usize;
    exp.saturating_sub(now) as u64
}
