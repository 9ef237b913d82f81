use validator::ValidationError;
use zxcvbn::zxcvbn;

use crate::entities::user::NewUser;

const MIN_LENGTH: usize = 8;
const MIN_STRENGTH_SCORE: u8 = 3;

/// Rejects passwords that are short, lack character variety, or are easy
/// to guess given the account's own username and email.
pub fn validate_new_user_password(user: &NewUser) -> Result<(), ValidationError> {
    validate_password_strength(&user.password, &[&user.username, &user.email])
}

pub fn validate_password_strength(password: &str, user_inputs: &[&str]) -> Result<(), ValidationError> {
    if password.len() < MIN_LENGTH {
        let mut error = ValidationError::new("password_length");
        error.message = Some(format!("Must be at least {} characters", MIN_LENGTH).into());
        return Err(error);
    }

    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_alphanumeric());

    if !(has_upper && has_digit && has_symbol) {
        let mut error = ValidationError::new("password_complexity");
        error.message = Some("Must include uppercase, number, and symbol".into());
        return Err(error);
    }

    let estimate = zxcvbn(password, user_inputs);
    let score = estimate.score() as u8;

    if score < MIN_STRENGTH_SCORE {
        let feedback = estimate.feedback()
            .and_then(|f| f.warning().map(|w| w.to_string()))
            .unwrap_or_else(|| "Password is too weak".to_string());

        let mut error = ValidationError::new("password_strength");
        error.message = Some(feedback.into());
        return Err(error);
    }

    Ok(())
}
