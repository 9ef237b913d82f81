use std::time::Duration;

use validator::Validate;

use crate::{
    constants::EMAIL_SENT_MESSAGE,
    entities::contact::{ContactForm, NotificationSent, OutgoingEmail},
    errors::AppError,
    repositories::mailer::{MailError, Mailer},
};

/// Forwards visitor messages to profile owners by email.
pub struct NotificationHandler<M>
where
    M: Mailer,
{
    pub mailer: M,
    timeout: Duration,
}

impl<M> NotificationHandler<M>
where
    M: Mailer,
{
    pub fn new(mailer: M, timeout: Duration) -> Self {
        NotificationHandler { mailer, timeout }
    }

    pub async fn notify(&self, form: ContactForm) -> Result<NotificationSent, AppError> {
        form.validate()?;

        let email = OutgoingEmail::compose(&form);

        tokio::time::timeout(self.timeout, self.mailer.send(&email))
            .await
            .map_err(|_| MailError::Timeout)?
            .map_err(|e| {
                tracing::error!("Contact email failed: {}", e);
                e
            })?;

        tracing::info!(to = ?email.to, "Contact email sent");
        Ok(NotificationSent { message: EMAIL_SENT_MESSAGE.to_string() })
    }
}
