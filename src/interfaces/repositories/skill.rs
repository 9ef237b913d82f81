use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::skill::Skill,
    errors::AppError,
    repositories::{owned::OwnedRepository, sqlx_repo::SqlxOwnedRepo},
};

#[async_trait]
pub trait SkillRepository: OwnedRepository<Skill> {
    /// Returns the owner's skill with this exact name, creating it if missing.
    async fn get_or_create(&self, owner_id: Uuid, skill: &str) -> Result<Skill, AppError>;
}

#[async_trait]
impl SkillRepository for SqlxOwnedRepo<Skill> {
    async fn get_or_create(&self, owner_id: Uuid, skill: &str) -> Result<Skill, AppError> {
        let inserted = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (user_id, skill)
            VALUES ($1, $2)
            ON CONFLICT (user_id, skill) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(owner_id)
        .bind(skill)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = inserted {
            return Ok(row);
        }

        let existing = sqlx::query_as::<_, Skill>(
            "SELECT * FROM skills WHERE user_id = $1 AND skill = $2",
        )
        .bind(owner_id)
        .bind(skill)
        .fetch_one(&self.pool)
        .await?;

        Ok(existing)
    }
}
