use actix_cors::Cors;
use actix_web::http::{header, Method};

use crate::settings::AppConfig;

pub fn cors_from_config(config: &AppConfig) -> Cors {
    let origins = config.cors_origins();

    let cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::LOCATION])
        .max_age(3600);

    if origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }

    origins
        .iter()
        .fold(cors.supports_credentials(), |cors, origin| cors.allowed_origin(origin))
}
