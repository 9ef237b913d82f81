use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    entities::owned::{OwnedEntity, PgQueryAs},
    utils::{rich_text::sanitize_rich_text, text::blank_to_none},
    validation::{new_validation_error, validate_not_blank},
};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Experience {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company_name: String,
    pub role: String,
    pub started_work_from: DateTime<Utc>,
    pub worked_till: DateTime<Utc>,
    /// Sanitised HTML.
    pub work_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_work_period", skip_on_field_errors = true))]
pub struct ExperienceInput {
    #[validate(length(max = 60), custom(function = "validate_not_blank"))]
    pub company_name: String,

    #[validate(length(max = 60), custom(function = "validate_not_blank"))]
    pub role: String,

    pub started_work_from: DateTime<Utc>,

    pub worked_till: DateTime<Utc>,

    #[validate(length(max = 20000, message = "Work description is too long"))]
    pub work_description: Option<String>,
}

fn validate_work_period(input: &ExperienceInput) -> Result<(), ValidationError> {
    if input.started_work_from > input.worked_till {
        return Err(new_validation_error("work_period", "Start date must not be after the end date"));
    }
    Ok(())
}

impl OwnedEntity for Experience {
    type Input = ExperienceInput;

    const TABLE: &'static str = "experiences";
    const LABEL: &'static str = "Experience";
    const PATH: &'static str = "/experiences";
    const COLUMNS: &'static [&'static str] = &[
        "company_name",
        "role",
        "started_work_from",
        "worked_till",
        "work_description",
    ];
    const ORDER_BY: &'static str = "started_work_from DESC";

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.user_id
    }

    fn bind_input<'q>(input: &'q ExperienceInput, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&input.company_name)
            .bind(&input.role)
            .bind(input.started_work_from)
            .bind(input.worked_till)
            .bind(&input.work_description)
    }

    fn prepare(input: ExperienceInput) -> ExperienceInput {
        let work_description = blank_to_none(input.work_description)
            .map(|html| sanitize_rich_text(&html))
            .filter(|html| !html.trim().is_empty());

        ExperienceInput {
            company_name: input.company_name.trim().to_string(),
            role: input.role.trim().to_string(),
            work_description,
            ..input
        }
    }
}
