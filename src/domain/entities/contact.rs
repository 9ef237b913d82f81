use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::validate_not_blank;

pub const CONTACT_SUBJECT: &str = "Portfolio Email";

/// Visitor message addressed to a profile owner.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(email(message = "Invalid sender email"))]
    pub email: String,

    #[validate(email(message = "Invalid recipient email"))]
    pub user_email: String,

    #[validate(
        length(min = 1, max = 5000, message = "Message must be between 1 and 5000 characters"),
        custom(function = "validate_not_blank")
    )]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

impl OutgoingEmail {
    pub fn compose(form: &ContactForm) -> Self {
        let sender = form.email.trim();
        OutgoingEmail {
            from: sender.to_string(),
            to: vec![form.user_email.trim().to_string()],
            subject: CONTACT_SUBJECT.to_string(),
            body: format!("{}\nfrom email {}", form.message, sender),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NotificationSent {
    pub message: String,
}
