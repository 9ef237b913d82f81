use async_trait::async_trait;

use crate::{
    entities::contact::OutgoingEmail,
    repositories::mailer::{MailError, Mailer},
};

/// Development mailer: writes the message to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        tracing::info!(
            from = %email.from,
            to = ?email.to,
            subject = %email.subject,
            "Outgoing email:\n{}",
            email.body
        );
        Ok(())
    }
}
