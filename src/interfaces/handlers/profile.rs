use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    constants::{HOME_URL, UNKNOWN_USERNAME_WARNING},
    entities::{flash::FlashMessage, profile::UpdateProfileRequest},
    errors::AppError,
    handlers::{
        flash::{clear_flash_cookie, redirect_with_flash, take_flash},
        owned::{into_input, FormOrJson},
    },
    use_cases::{extractors::AuthClaims, profile::ProfileLookup},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    pub user_name: Option<String>,
}

/// Public profile page. Pending flash messages are folded into the page
/// and the cookie is cleared.
#[instrument(skip(req, state, claims))]
pub async fn public_profile(
    req: HttpRequest,
    state: web::Data<AppState>,
    query: web::Query<ProfileQuery>,
    claims: Option<AuthClaims>,
) -> Result<impl Responder, AppError> {
    let actor = claims.and_then(|c| c.actor_id().ok());

    let page = match state
        .profile_handler
        .public_page(query.user_name.as_deref(), actor)
        .await?
    {
        ProfileLookup::Found(page) => page,
        ProfileLookup::UnknownUsername => {
            return redirect_with_flash(HOME_URL, FlashMessage::warning(UNKNOWN_USERNAME_WARNING), None);
        }
    };

    let messages = take_flash(&req);
    let mut response = HttpResponse::Ok();
    if !messages.is_empty() {
        response.cookie(clear_flash_cookie());
    }

    Ok(response.json((*page).with_messages(messages)))
}

#[instrument(skip_all)]
pub async fn dashboard(
    claims: AuthClaims,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let dashboard = state.profile_handler.dashboard(claims.actor_id()?).await?;
    Ok(HttpResponse::Ok().json(dashboard))
}

#[instrument(skip_all)]
pub async fn update_profile(
    claims: AuthClaims,
    state: web::Data<AppState>,
    payload: FormOrJson<UpdateProfileRequest>,
) -> Result<impl Responder, AppError> {
    let profile = state
        .profile_handler
        .update_profile(claims.actor_id()?, into_input(payload))
        .await?;
    Ok(HttpResponse::Ok().json(profile))
}
