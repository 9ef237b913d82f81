use std::time::Duration;

use async_trait::async_trait;
use mockall::mock;
use portfolio_site::{
    constants::EMAIL_SENT_MESSAGE,
    entities::contact::{ContactForm, OutgoingEmail},
    errors::AppError,
    repositories::mailer::{MailError, Mailer},
    use_cases::notify::NotificationHandler,
};

mock! {
    pub Relay {}

    #[async_trait]
    impl Mailer for Relay {
        async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
    }
}

fn form() -> ContactForm {
    ContactForm {
        email: "visitor@example.com".into(),
        user_email: "owner@example.com".into(),
        message: "Loved your portfolio".into(),
    }
}

#[tokio::test]
async fn forwards_message_to_profile_owner() {
    let mut relay = MockRelay::new();
    relay
        .expect_send()
        .withf(|email: &OutgoingEmail| {
            email.subject == "Portfolio Email"
                && email.from == "visitor@example.com"
                && email.to == vec!["owner@example.com".to_string()]
                && email.body == "Loved your portfolio\nfrom email visitor@example.com"
        })
        .times(1)
        .returning(|_| Ok(()));

    let handler = NotificationHandler::new(relay, Duration::from_secs(5));
    let sent = handler.notify(form()).await.unwrap();

    assert_eq!(sent.message, EMAIL_SENT_MESSAGE);
}

#[tokio::test]
async fn mail_failure_is_reported_as_delivery_error() {
    let mut relay = MockRelay::new();
    relay
        .expect_send()
        .times(1)
        .returning(|_| Err(MailError::Rejected("550 mailbox unavailable".into())));

    let handler = NotificationHandler::new(relay, Duration::from_secs(5));
    let result = handler.notify(form()).await;

    assert!(matches!(result, Err(AppError::MailDelivery(_))));
}

#[tokio::test]
async fn invalid_addresses_are_rejected_before_sending() {
    let mut relay = MockRelay::new();
    relay.expect_send().times(0);

    let handler = NotificationHandler::new(relay, Duration::from_secs(5));
    let mut bad = form();
    bad.user_email = "not-an-email".into();

    let result = handler.notify(bad).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn whitespace_only_message_is_rejected() {
    let mut relay = MockRelay::new();
    relay.expect_send().never();

    let handler = NotificationHandler::new(relay, Duration::from_secs(5));
    let mut blank = form();
    blank.message = "   \n\t ".into();

    let result = handler.notify(blank).await;

    match result {
        Err(AppError::ValidationError(errors)) => {
            assert!(errors.iter().any(|e| e.field == "message"));
        }
        other => panic!("expected validation error, got {:?}", other.map(|s| s.message)),
    }
}

struct StalledMailer;

#[async_trait]
impl Mailer for StalledMailer {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), MailError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(())
    }
}

#[tokio::test]
async fn slow_mail_provider_times_out() {
    let handler = NotificationHandler::new(StalledMailer, Duration::from_millis(20));

    let result = handler.notify(form()).await;

    assert!(matches!(result, Err(AppError::MailDelivery(_))));
}
