use actix_web::{web, Either, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    constants::API_PREFIX,
    entities::{flash::FlashMessage, owned::OwnedEntity},
    errors::AppError,
    handlers::flash::{deletion_redirect, redirect_with_flash},
    use_cases::extractors::AuthClaims,
    utils::valid_uuid::valid_uuid,
    AppState,
};

/// Section payloads arrive either as JSON or as an urlencoded form.
pub type FormOrJson<T> = Either<web::Json<T>, web::Form<T>>;

pub fn into_input<T>(payload: FormOrJson<T>) -> T {
    match payload {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

pub fn section_url<E: OwnedEntity>() -> String {
    format!("{}{}", API_PREFIX, E::PATH)
}

#[instrument(skip_all, fields(section = E::TABLE))]
pub async fn list<E: OwnedEntity>(
    claims: AuthClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let rows = state.owned::<E>().list(claims.actor_id()?).await?;
    Ok(HttpResponse::Ok().json(rows))
}

#[instrument(skip_all, fields(section = E::TABLE, id = %id))]
pub async fn get<E: OwnedEntity>(
    claims: AuthClaims,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&id)?;
    let row = state.owned::<E>().get(id, claims.actor_id()?).await?;
    Ok(HttpResponse::Ok().json(row))
}

#[instrument(skip_all, fields(section = E::TABLE))]
pub async fn create<E: OwnedEntity>(
    claims: AuthClaims,
    state: web::Data<AppState>,
    payload: FormOrJson<E::Input>,
) -> Result<impl Responder, AppError> {
    let row = state
        .owned::<E>()
        .create(claims.actor_id()?, into_input(payload))
        .await?;

    redirect_with_flash(
        &section_url::<E>(),
        FlashMessage::success(format!("{} Added Successfully", E::LABEL)),
        Some(serde_json::to_value(&row)?),
    )
}

#[instrument(skip_all, fields(section = E::TABLE, id = %id))]
pub async fn update<E: OwnedEntity>(
    claims: AuthClaims,
    state: web::Data<AppState>,
    id: web::Path<String>,
    payload: FormOrJson<E::Input>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&id)?;
    let row = state
        .owned::<E>()
        .update(id, claims.actor_id()?, into_input(payload))
        .await?;

    redirect_with_flash(
        &section_url::<E>(),
        FlashMessage::success(format!("{} Updated Successfully", E::LABEL)),
        Some(serde_json::to_value(&row)?),
    )
}

#[instrument(skip_all, fields(section = E::TABLE, id = %id))]
pub async fn delete<E: OwnedEntity>(
    claims: AuthClaims,
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&id)?;
    let outcome = state.owned::<E>().delete(id, claims.actor_id()?).await?;
    deletion_redirect(outcome)
}
