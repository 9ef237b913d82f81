pub mod auth;
pub mod contact;
pub mod flash;
pub mod json_error;
pub mod owned;
pub mod profile;
pub mod skills;
pub mod system;
pub mod users;
