use actix_web::{web, HttpRequest, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    auth::jwt::seconds_until,
    entities::{token::RefreshTokenRequest, user::{LoginUser, NewUser}},
    errors::{AppError, AuthError},
    middlewares::auth::bearer_token,
    use_cases::extractors::AuthClaims,
    AppState,
};

#[instrument(skip_all)]
pub async fn register(
    state: web::Data<AppState>,
    user: web::Json<NewUser>,
) -> Result<impl Responder, AppError> {
    let response = state.auth_handler.register(user.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip_all)]
pub async fn login(
    state: web::Data<AppState>,
    user: web::Json<LoginUser>,
) -> Result<impl Responder, AuthError> {
    let response = state.auth_handler.login(user.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[instrument(skip_all)]
pub async fn refresh_token(
    state: web::Data<AppState>,
    request: web::Json<RefreshTokenRequest>,
) -> Result<impl Responder, AuthError> {
    let response = state.auth_handler.refresh_token(&request.refresh_token).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Deny-lists the presented access token until it would have expired.
#[instrument(skip_all)]
pub async fn logout(
    req: HttpRequest,
    claims: AuthClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AuthError> {
    let token = bearer_token(req.headers()).ok_or(AuthError::MissingCredentials)?;
    state.revoke_access_token(&token, seconds_until(claims.0.exp)).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({"message": "Logged out successfully"})))
}
