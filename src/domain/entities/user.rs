use serde::{Serialize, Deserialize};
use chrono::{DateTime, Utc};
use validator::Validate;
use uuid::Uuid;

use crate::domain::{password::validate_new_user_password, validation::USERNAME_REGEX};


#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<Uuid>
}

#[derive(Debug)]
pub struct UserInsert {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_new_user_password", skip_on_field_errors = true))]
pub struct NewUser {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(regex(
        path = *USERNAME_REGEX,
        message = "3-150 characters: letters, digits and @/./+/-/_ only"
    ))]
    pub username: String,

    #[validate(length(min = 8, message = "Must be at least 8 characters"))]
    pub password: String,
}

impl NewUser {
    pub fn prepare_for_insert(&self, password_hash: String) -> UserInsert {
        let now = Utc::now();
        UserInsert {
            email: self.email.trim().to_lowercase(),
            username: self.username.trim().to_string(),
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}


#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginUser {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}


#[derive(Debug, Serialize, Deserialize)]
pub struct NewUserResponse {
    pub id: Uuid,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        PublicUser {
            id: user.id,
            email: user.email,
            username: user.username,
            created_at: user.created_at,
        }
    }
}
