use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::owned::{OwnedEntity, PgQueryAs},
    utils::text::blank_to_none,
    validation::{validate_not_blank, validate_url},
};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Certification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub issuer: String,
    pub issued_on: Option<NaiveDate>,
    pub credential_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CertificationInput {
    #[validate(length(max = 120), custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(length(max = 120), custom(function = "validate_not_blank"))]
    pub issuer: String,

    pub issued_on: Option<NaiveDate>,

    #[validate(custom(function = "validate_url"))]
    pub credential_url: Option<String>,
}

impl OwnedEntity for Certification {
    type Input = CertificationInput;

    const TABLE: &'static str = "certifications";
    const LABEL: &'static str = "Certification";
    const PATH: &'static str = "/certifications";
    const COLUMNS: &'static [&'static str] = &["title", "issuer", "issued_on", "credential_url"];
    const ORDER_BY: &'static str = "issued_on DESC NULLS LAST, created_at ASC";

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.user_id
    }

    fn bind_input<'q>(input: &'q CertificationInput, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&input.title)
            .bind(&input.issuer)
            .bind(input.issued_on)
            .bind(&input.credential_url)
    }

    fn prepare(input: CertificationInput) -> CertificationInput {
        CertificationInput {
            title: input.title.trim().to_string(),
            issuer: input.issuer.trim().to_string(),
            issued_on: input.issued_on,
            credential_url: blank_to_none(input.credential_url),
        }
    }
}
