use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;
use validator::Validate;

use crate::{
    entities::contact::ContactForm,
    errors::AppError,
    handlers::owned::{into_input, FormOrJson},
    AppState,
};

const CONTACT_WINDOW_SECS: u64 = 3600;

#[instrument(skip_all)]
pub async fn contact(
    state: web::Data<AppState>,
    payload: FormOrJson<ContactForm>,
) -> Result<impl Responder, AppError> {
    let form = into_input(payload);
    form.validate()?;

    // Normalize to lower case and URL-encode to keep the Redis key safe
    let sender = form.email.trim().to_lowercase();
    let key = format!("rl:contact:{}", urlencoding::encode(&sender));

    match state.redis_incr_with_ttl(&key, CONTACT_WINDOW_SECS).await {
        Ok(Some(count)) if count > u64::from(state.contact_rate_limit) => {
            return Err(AppError::RateLimited(
                "Too many messages from this email address. Please try again later.".to_string(),
            ));
        }
        Ok(_) => {}
        Err(e) => tracing::warn!("Contact rate limit check skipped: {}", e),
    }

    let sent = state.notification_handler.notify(form).await?;
    Ok(HttpResponse::Ok().json(sent))
}
