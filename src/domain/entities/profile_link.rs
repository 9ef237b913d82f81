use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::owned::{OwnedEntity, PgQueryAs},
    utils::text::blank_to_none,
    validation::validate_url,
};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProfileLink {
    pub id: Uuid,
    pub user_id: Uuid,
    pub link: String,
    pub link_site: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileLinkInput {
    #[validate(custom(function = "validate_url"))]
    pub link: String,

    #[validate(length(max = 60, message = "Site label must be at most 60 characters"))]
    pub link_site: Option<String>,
}

impl OwnedEntity for ProfileLink {
    type Input = ProfileLinkInput;

    const TABLE: &'static str = "profile_links";
    const LABEL: &'static str = "Profile link";
    const PATH: &'static str = "/profile-links";
    const COLUMNS: &'static [&'static str] = &["link", "link_site"];

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.user_id
    }

    fn bind_input<'q>(input: &'q ProfileLinkInput, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(&input.link).bind(&input.link_site)
    }

    fn prepare(input: ProfileLinkInput) -> ProfileLinkInput {
        ProfileLinkInput {
            link: input.link.trim().to_string(),
            link_site: blank_to_none(input.link_site),
        }
    }
}
