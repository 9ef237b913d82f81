use actix_web::web;

use crate::handlers::contact;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/contact", web::post().to(contact::contact));
}
