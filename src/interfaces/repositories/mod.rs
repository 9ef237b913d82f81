pub mod mailer;
pub mod owned;
pub mod profile;
pub mod skill;
pub mod sqlx_repo;
pub mod token;
pub mod user;
