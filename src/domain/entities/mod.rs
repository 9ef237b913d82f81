pub mod certification;
pub mod contact;
pub mod education;
pub mod experience;
pub mod flash;
pub mod owned;
pub mod profile;
pub mod profile_link;
pub mod project;
pub mod skill;
pub mod token;
pub mod user;
