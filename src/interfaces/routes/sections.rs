use actix_web::web;

use crate::{entities::owned::OwnedEntity, handlers::owned};

/// Mounts list/create and get/update/delete for one profile section.
pub fn config_routes<E: OwnedEntity>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(E::PATH)
            .service(
                web::resource("")
                    .route(web::get().to(owned::list::<E>))
                    .route(web::post().to(owned::create::<E>))
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(owned::get::<E>))
                    .route(web::put().to(owned::update::<E>))
                    .route(web::delete().to(owned::delete::<E>))
            )
    );
}
