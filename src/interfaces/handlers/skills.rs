use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use tracing::instrument;

use crate::{
    constants::SKILLS_UPDATED_MESSAGE,
    entities::{flash::FlashMessage, skill::Skill},
    errors::AppError,
    handlers::flash::{deletion_redirect, flash_cookie},
    use_cases::extractors::AuthClaims,
    utils::valid_uuid::valid_uuid,
    AppState,
};

#[derive(Debug, Serialize)]
pub struct SkillsUpdated {
    pub response: &'static str,
    pub skills: Vec<Skill>,
    pub flash: FlashMessage,
}

#[instrument(skip(claims, state, names), fields(count = names.len()))]
pub async fn add_skills(
    claims: AuthClaims,
    state: web::Data<AppState>,
    names: web::Json<Vec<String>>,
) -> Result<impl Responder, AppError> {
    let skills = state
        .skill_handler
        .add_skills(claims.actor_id()?, names.into_inner())
        .await?;

    let flash = FlashMessage::success(SKILLS_UPDATED_MESSAGE);
    let cookie = flash_cookie(&flash)?;

    Ok(HttpResponse::Ok().cookie(cookie).json(SkillsUpdated {
        response: "ok",
        skills,
        flash,
    }))
}

#[instrument(skip_all)]
pub async fn list_skills(
    claims: AuthClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let skills = state.skill_handler.list(claims.actor_id()?).await?;
    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(claims, state))]
pub async fn delete_skill(
    claims: AuthClaims,
    state: web::Data<AppState>,
    skill_id: web::Path<String>,
) -> Result<impl Responder, AppError> {
    let id = valid_uuid(&skill_id)?;
    let outcome = state.skill_handler.delete(id, claims.actor_id()?).await?;
    deletion_redirect(outcome)
}
