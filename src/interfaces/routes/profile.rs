use actix_web::web;

use crate::handlers::profile;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/profile")
            .route(web::get().to(profile::dashboard))
            .route(web::put().to(profile::update_profile))
    );
}
