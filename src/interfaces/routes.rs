use actix_web::web;

use crate::{
    constants::API_PREFIX,
    entities::{
        certification::Certification, education::Education, experience::Experience,
        profile_link::ProfileLink, project::Project,
    },
    handlers::profile::public_profile,
};

mod auth;
mod contact;
mod json_error;
mod profile;
mod sections;
mod skills;
mod system;
mod users;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(public_profile)));

    cfg.service(
        web::scope(API_PREFIX)
            .configure(auth::config_routes)
            .configure(users::config_routes)
            .configure(profile::config_routes)
            .configure(sections::config_routes::<Education>)
            .configure(sections::config_routes::<Experience>)
            .configure(sections::config_routes::<Project>)
            .configure(sections::config_routes::<ProfileLink>)
            .configure(sections::config_routes::<Certification>)
            .configure(skills::config_routes)
            .configure(contact::config_routes)
            .configure(system::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
