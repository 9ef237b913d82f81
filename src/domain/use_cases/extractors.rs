use actix_web::{FromRequest, HttpRequest, HttpMessage};
use futures_util::future::{ready, Ready};
use uuid::Uuid;
use crate::{entities::token::Claims, errors::AuthError};

/// Extractor for authenticated claims, ensuring the user is authenticated.
/// Returns 401 if the user is not authenticated.
/// Wrap it in `Option` on routes that also serve anonymous visitors.
#[derive(Debug, Clone)]
pub struct AuthClaims(pub Claims);

impl AuthClaims {
    /// Id of the signed-in account.
    pub fn actor_id(&self) -> Result<Uuid, AuthError> {
        Uuid::parse_str(&self.0.sub).map_err(|_| AuthError::InvalidUserId)
    }
}

impl FromRequest for AuthClaims {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Claims>() {
            Some(claims) => ready(Ok(AuthClaims(claims.clone()))),
            None => ready(Err(AuthError::MissingCredentials.into())),
        }
    }
}
