mod test_utils;

use actix_web::{http::StatusCode, test, web, App};
use portfolio_site::{routes::configure_routes, AppState};
use serde_json::{json, Value};
use sqlx::PgPool;
use test_utils::test_config;

fn state() -> web::Data<AppState> {
    let config = test_config();
    // Contact never touches Postgres, so the pool is never opened.
    let pool = PgPool::connect_lazy(&config.database_url).unwrap();
    web::Data::new(AppState::new(&config, pool).unwrap())
}

#[actix_rt::test]
async fn contact_is_sent_through_configured_mailer() {
    let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/contact")
        .set_json(json!({
            "email": "visitor@example.com",
            "user_email": "owner@example.com",
            "message": "Loved your portfolio"
        }))
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["message"], "Email has been sent successfully!!");
}

#[actix_rt::test]
async fn blank_contact_message_is_rejected_by_the_handler() {
    let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/contact")
        .set_form([
            ("email", "visitor@example.com"),
            ("user_email", "owner@example.com"),
            ("message", "    "),
        ])
        .to_request();
    let response = test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body["details"][0]["field"], "message");
}
