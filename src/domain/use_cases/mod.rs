pub mod auth;
pub mod extractors;
pub mod notify;
pub mod owned;
pub mod profile;
pub mod skills;
