use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::owned::{OwnedEntity, PgQueryAs},
    utils::text::capitalize,
};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skill: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillInput {
    #[validate(length(min = 1, max = 60, message = "Skill must be between 1 and 60 characters"))]
    pub skill: String,
}

impl OwnedEntity for Skill {
    type Input = SkillInput;

    const TABLE: &'static str = "skills";
    const LABEL: &'static str = "Skill";
    const PATH: &'static str = "/skills";
    const COLUMNS: &'static [&'static str] = &["skill"];
    const ORDER_BY: &'static str = "created_at DESC";

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.user_id
    }

    fn bind_input<'q>(input: &'q SkillInput, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(&input.skill)
    }

    fn prepare(input: SkillInput) -> SkillInput {
        SkillInput { skill: capitalize(&input.skill) }
    }
}
