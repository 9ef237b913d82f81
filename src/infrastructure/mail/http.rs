use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    entities::contact::OutgoingEmail,
    errors::AppError,
    repositories::mailer::{MailError, Mailer},
};

/// Sends mail by posting it as JSON to a transactional mail API.
#[derive(Clone)]
pub struct HttpMailer {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpMailer {
    pub fn new(endpoint: &str, api_key: Option<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("Mail client setup failed: {}", e)))?;

        Ok(HttpMailer {
            client,
            endpoint: endpoint.to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    #[instrument(skip(self, email), fields(to = ?email.to))]
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let mut request = self.client.post(&self.endpoint).json(email);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                MailError::Timeout
            } else {
                MailError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected(format!("{}: {}", status, body)));
        }

        debug!("Mail API accepted message");
        Ok(())
    }
}
