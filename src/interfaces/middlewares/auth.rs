use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{header::{HeaderMap, AUTHORIZATION}, StatusCode},
    web, Error, HttpMessage,
};
use futures_util::future::{ok, Ready, LocalBoxFuture};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{
    entities::token::Claims,
    errors::AuthError,
    handlers::json_error::json_error,
    repositories::token::TokenServiceRepository,
    AppState,
};

/// Validates bearer tokens. Public routes pass without one but still get
/// claims attached when a valid token is sent; every other route needs a
/// valid, non-revoked access token belonging to a live account.
pub struct AuthMiddleware;

impl<S> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let public = is_public_route(req.path(), req.method().as_str());

            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                tracing::error!("AppState missing in middleware");
                return Err(AuthError::MissingJwtService.into());
            };

            match authenticate(&req, &state).await {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                }
                Err(_) if public => {}
                Err(e) => {
                    tracing::warn!(path = %req.path(), "Rejected request: {}", e);
                    let response = json_error(status_for(&e), "Unauthorized", &e.to_string());
                    return Ok(req.into_response(response));
                }
            }

            service.call(req).await
        })
    }
}

async fn authenticate(req: &ServiceRequest, state: &AppState) -> Result<Claims, AuthError> {
    let token = bearer_token(req.headers()).ok_or(AuthError::MissingCredentials)?;
    let claims = state.auth_handler.token_service.decode_jwt(&token)?.claims;

    let revoked = state.is_token_revoked(&token).await.unwrap_or_else(|e| {
        tracing::warn!("Token deny-list check failed: {}", e);
        false
    });
    if revoked {
        return Err(AuthError::TokenRevoked);
    }

    state.auth_handler.active_account(&claims).await?;

    Ok(claims)
}

fn status_for(err: &AuthError) -> StatusCode {
    match err {
        AuthError::MissingJwtService | AuthError::TokenCreation => StatusCode::INTERNAL_SERVER_ERROR,
        AuthError::AccountLookup(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::UNAUTHORIZED,
    }
}

fn is_public_route(path: &str, method: &str) -> bool {
    if method == "OPTIONS" {
        return true;
    }

    matches!(
        (path, method),
        ("/", "GET") |
        ("/api/v1/health", "GET") |
        ("/api/v1/contact", "POST") |
        ("/api/v1/auth/refresh-token", "POST") |
        ("/api/v1/auth/login", "POST") |
        ("/api/v1/auth/register", "POST")
    )
}

pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let parts: Vec<&str> = header.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::HeaderValue;

    #[test]
    fn public_routes() {
        assert!(is_public_route("/", "GET"));
        assert!(is_public_route("/api/v1/contact", "POST"));
        assert!(is_public_route("/api/v1/educations", "OPTIONS"));
        assert!(!is_public_route("/api/v1/educations", "POST"));
        assert!(!is_public_route("/api/v1/profile", "GET"));
    }

    #[test]
    fn failed_account_lookup_is_not_an_auth_failure() {
        assert_eq!(status_for(&AuthError::AccountDeleted), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(&AuthError::AccountLookup("down".into())), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn bearer_token_requires_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers).as_deref(), Some("abc.def"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);
    }
}
