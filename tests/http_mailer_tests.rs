use std::{net::TcpListener, time::Duration};

use actix_web::{http::header::AUTHORIZATION, web, App, HttpRequest, HttpResponse, HttpServer};
use portfolio_site::{
    entities::contact::OutgoingEmail,
    mail::http::HttpMailer,
    repositories::mailer::{MailError, Mailer},
};
use serde_json::Value;

/// Stand-in mail API: `/accept` checks the key and payload, `/reject`
/// refuses, `/stall` answers too late.
fn spawn_mail_api() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let server = HttpServer::new(|| {
        App::new()
            .route("/accept", web::post().to(|req: HttpRequest, body: web::Json<Value>| async move {
                let authorized = req
                    .headers()
                    .get(AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    == Some("Bearer mail-key");
                if authorized && body["subject"] == "Portfolio Email" {
                    HttpResponse::Accepted().finish()
                } else {
                    HttpResponse::Unauthorized().finish()
                }
            }))
            .route("/reject", web::post().to(|| async {
                HttpResponse::UnprocessableEntity().body("unknown recipient")
            }))
            .route("/stall", web::post().to(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                HttpResponse::Ok().finish()
            }))
    })
    .listen(listener)
    .unwrap()
    .workers(1)
    .run();

    tokio::spawn(server);
    format!("http://127.0.0.1:{}", port)
}

fn email() -> OutgoingEmail {
    OutgoingEmail {
        from: "visitor@example.com".into(),
        to: vec!["owner@example.com".into()],
        subject: "Portfolio Email".into(),
        body: "Hello\nfrom email visitor@example.com".into(),
    }
}

#[actix_rt::test]
async fn accepted_message_is_sent_with_api_key() {
    let base = spawn_mail_api();
    let mailer = HttpMailer::new(
        &format!("{}/accept", base),
        Some("mail-key".into()),
        Duration::from_secs(5),
    )
    .unwrap();

    assert!(mailer.send(&email()).await.is_ok());
}

#[actix_rt::test]
async fn non_success_reply_is_a_rejection() {
    let base = spawn_mail_api();
    let mailer = HttpMailer::new(&format!("{}/reject", base), None, Duration::from_secs(5)).unwrap();

    match mailer.send(&email()).await {
        Err(MailError::Rejected(detail)) => {
            assert!(detail.contains("422"));
            assert!(detail.contains("unknown recipient"));
        }
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[actix_rt::test]
async fn slow_mail_api_times_out() {
    let base = spawn_mail_api();
    let mailer = HttpMailer::new(&format!("{}/stall", base), None, Duration::from_millis(200)).unwrap();

    assert!(matches!(mailer.send(&email()).await, Err(MailError::Timeout)));
}

#[actix_rt::test]
async fn unreachable_mail_api_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let mailer = HttpMailer::new(
        &format!("http://127.0.0.1:{}/send", port),
        None,
        Duration::from_secs(5),
    )
    .unwrap();

    assert!(matches!(mailer.send(&email()).await, Err(MailError::Transport(_))));
}
