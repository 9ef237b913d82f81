use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, use_cases::extractors::AuthClaims, AppState};

#[instrument(skip_all)]
pub async fn me(
    claims: AuthClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let user = state.auth_handler.me(claims.actor_id()?).await?;
    Ok(HttpResponse::Ok().json(user))
}

#[instrument(skip_all)]
pub async fn delete_me(
    claims: AuthClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.auth_handler.delete_account(claims.actor_id()?).await?;
    Ok(HttpResponse::NoContent().finish())
}
