use actix_web::{
    body::to_bytes,
    http::{header, StatusCode},
    test::TestRequest,
    ResponseError,
};
use portfolio_site::{
    constants::{DELETED_MESSAGE, MISSING_OBJECT_WARNING, PROFILE_DASHBOARD_URL},
    entities::flash::{FlashLevel, FlashMessage},
    errors::AppError,
    handlers::flash::{deletion_redirect, flash_cookie, redirect_with_flash, take_flash, FLASH_COOKIE},
    use_cases::owned::DeleteOutcome,
};
use serde_json::Value;

async fn body_json(response: actix_web::HttpResponse) -> Value {
    let bytes = to_bytes(response.into_body()).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[actix_rt::test]
async fn redirect_carries_flash_in_cookie_and_body() {
    let response = redirect_with_flash(
        "/api/v1/educations",
        FlashMessage::success("Education Added Successfully"),
        Some(serde_json::json!({"institute": "MIT"})),
    )
    .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/api/v1/educations");
    assert!(response.cookies().any(|c| c.name() == FLASH_COOKIE));

    let body = body_json(response).await;
    assert_eq!(body["level"], "success");
    assert_eq!(body["message"], "Education Added Successfully");
    assert_eq!(body["redirect_to"], "/api/v1/educations");
    assert_eq!(body["data"]["institute"], "MIT");
}

#[actix_rt::test]
async fn missing_row_delete_warns_and_returns_to_dashboard() {
    let response = deletion_redirect(DeleteOutcome::Missing).unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), PROFILE_DASHBOARD_URL);

    let body = body_json(response).await;
    assert_eq!(body["level"], "warning");
    assert_eq!(body["message"], MISSING_OBJECT_WARNING);
}

#[actix_rt::test]
async fn successful_delete_confirms() {
    let response = deletion_redirect(DeleteOutcome::Deleted).unwrap();

    let body = body_json(response).await;
    assert_eq!(body["level"], "success");
    assert_eq!(body["message"], DELETED_MESSAGE);
}

#[actix_rt::test]
async fn flash_cookie_is_read_back() {
    let flash = FlashMessage::new(FlashLevel::Warning, "None Found With The Given Username");
    let req = TestRequest::default()
        .cookie(flash_cookie(&flash).unwrap())
        .to_http_request();

    assert_eq!(take_flash(&req), vec![flash]);
}

#[actix_rt::test]
async fn malformed_flash_cookie_is_ignored() {
    let req = TestRequest::default()
        .cookie(actix_web::cookie::Cookie::new(FLASH_COOKIE, "%7Bnot-json"))
        .to_http_request();

    assert!(take_flash(&req).is_empty());
}

#[actix_rt::test]
async fn error_statuses() {
    assert_eq!(AppError::MailDelivery("down".into()).status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(AppError::ForbiddenAccess.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(AppError::RateLimited("slow down".into()).status_code(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(AppError::ValidationError(vec![]).status_code(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn mail_failure_body_hides_provider_details() {
    let response = AppError::MailDelivery("smtp 550 internal relay".into()).error_response();

    let body = body_json(response).await;
    assert!(!body["error"].as_str().unwrap().contains("550"));
}
