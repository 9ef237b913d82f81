use actix_web::{
    cookie::{time::Duration as CookieDuration, Cookie, SameSite},
    http::header,
    HttpRequest, HttpResponse,
};
use serde::Serialize;

use crate::{
    constants::{DELETED_MESSAGE, MISSING_OBJECT_WARNING, PROFILE_DASHBOARD_URL},
    entities::flash::{FlashLevel, FlashMessage},
    errors::AppError,
    use_cases::owned::DeleteOutcome,
};

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Serialize)]
struct FlashRedirect<'a> {
    level: FlashLevel,
    message: &'a str,
    redirect_to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
}

pub fn flash_cookie(flash: &FlashMessage) -> Result<Cookie<'static>, AppError> {
    let encoded = urlencoding::encode(&serde_json::to_string(flash)?).into_owned();

    Ok(Cookie::build(FLASH_COOKIE, encoded)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(CookieDuration::minutes(5))
        .finish())
}

/// Reads the pending flash message, if any. Malformed cookies are ignored.
pub fn take_flash(req: &HttpRequest) -> Vec<FlashMessage> {
    let Some(cookie) = req.cookie(FLASH_COOKIE) else {
        return Vec::new();
    };

    // Request cookies arrive percent-decoded; fall back to decoding by hand.
    let value = cookie.value();
    serde_json::from_str::<FlashMessage>(value)
        .ok()
        .or_else(|| {
            urlencoding::decode(value)
                .ok()
                .and_then(|raw| serde_json::from_str::<FlashMessage>(&raw).ok())
        })
        .into_iter()
        .collect()
}

pub fn clear_flash_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

/// `303 See Other` carrying a flash message in both the cookie and the body.
pub fn redirect_with_flash(
    location: &str,
    flash: FlashMessage,
    data: Option<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
    let cookie = flash_cookie(&flash)?;

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .cookie(cookie)
        .json(FlashRedirect {
            level: flash.level,
            message: &flash.message,
            redirect_to: location,
            data,
        }))
}

/// Deletes always land on the owner dashboard, whether or not the row existed.
pub fn deletion_redirect(outcome: DeleteOutcome) -> Result<HttpResponse, AppError> {
    let flash = match outcome {
        DeleteOutcome::Deleted => FlashMessage::success(DELETED_MESSAGE),
        DeleteOutcome::Missing => FlashMessage::warning(MISSING_OBJECT_WARNING),
    };
    redirect_with_flash(PROFILE_DASHBOARD_URL, flash, None)
}
