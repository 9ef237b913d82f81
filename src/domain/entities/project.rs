use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::owned::{OwnedEntity, PgQueryAs},
    utils::text::blank_to_none,
    validation::{validate_not_blank, validate_url},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "project_type")]
pub enum ProjectType {
    /// Professional project.
    #[serde(rename = "P1")]
    #[sqlx(rename = "P1")]
    Professional,
    /// Personal project.
    #[serde(rename = "P2")]
    #[sqlx(rename = "P2")]
    Personal,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub project_type: ProjectType,
    pub used_technologies: Option<String>,
    pub description: Option<String>,
    pub project_link: Option<String>,
    pub code_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProjectInput {
    #[validate(length(max = 100), custom(function = "validate_not_blank"))]
    pub title: String,

    pub project_type: ProjectType,

    #[validate(length(max = 2000))]
    pub used_technologies: Option<String>,

    #[validate(length(max = 10000))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub project_link: Option<String>,

    #[validate(custom(function = "validate_url"))]
    pub code_link: Option<String>,
}

impl OwnedEntity for Project {
    type Input = ProjectInput;

    const TABLE: &'static str = "projects";
    const LABEL: &'static str = "Project";
    const PATH: &'static str = "/projects";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "project_type",
        "used_technologies",
        "description",
        "project_link",
        "code_link",
    ];

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.user_id
    }

    fn bind_input<'q>(input: &'q ProjectInput, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&input.title)
            .bind(input.project_type)
            .bind(&input.used_technologies)
            .bind(&input.description)
            .bind(&input.project_link)
            .bind(&input.code_link)
    }

    fn prepare(input: ProjectInput) -> ProjectInput {
        ProjectInput {
            title: input.title.trim().to_string(),
            project_type: input.project_type,
            used_technologies: blank_to_none(input.used_technologies),
            description: blank_to_none(input.description),
            project_link: blank_to_none(input.project_link),
            code_link: blank_to_none(input.code_link),
        }
    }
}

impl Project {
    pub fn is_professional(&self) -> bool {
        self.project_type == ProjectType::Professional
    }
}
