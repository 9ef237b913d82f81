use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// Letters, digits and `@.+-_`, as account names have always allowed.
pub static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9@.+_-]{3,150}$").expect("username pattern is valid")
});

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://"))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("blank", "This field cannot be blank"));
    }
    Ok(())
}

pub fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}
