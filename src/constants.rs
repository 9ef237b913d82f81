use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const API_PREFIX: &str = "/api/v1";
pub const HOME_URL: &str = "/";
pub const PROFILE_DASHBOARD_URL: &str = "/api/v1/profile";

pub const UNKNOWN_USERNAME_WARNING: &str = "None Found With The Given Username";
pub const MISSING_OBJECT_WARNING: &str = "Opps!! The object does not exist";
pub const DELETED_MESSAGE: &str = "Successfully Deleted";
pub const SKILLS_UPDATED_MESSAGE: &str = "Skills Updated Successfully";
pub const EMAIL_SENT_MESSAGE: &str = "Email has been sent successfully!!";
