use std::sync::Arc;

use async_trait::async_trait;
use derive_more::Display;

use crate::entities::contact::OutgoingEmail;

#[derive(Debug, Display)]
pub enum MailError {
    #[display("Mail dispatch timed out")]
    Timeout,

    #[display("Mail transport error: {_0}")]
    Transport(String),

    #[display("Mail provider rejected the message: {_0}")]
    Rejected(String),
}

/// Outbound mail collaborator.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

#[async_trait]
impl<M: Mailer + ?Sized> Mailer for Arc<M> {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        (**self).send(email).await
    }
}
