use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::{owned::OwnedEntity, skill::{Skill, SkillInput}},
    errors::AppError,
    repositories::skill::SkillRepository,
    use_cases::owned::{DeleteOutcome, OwnedHandler},
};

pub struct SkillHandler<R>
where
    R: SkillRepository,
{
    owned: OwnedHandler<Skill, R>,
}

impl<R> SkillHandler<R>
where
    R: SkillRepository,
{
    pub fn new(repo: R) -> Self {
        SkillHandler { owned: OwnedHandler::new(repo) }
    }

    /// Capitalises every name, drops blanks and duplicates, then
    /// get-or-creates each one. Nothing is written if any name is invalid.
    pub async fn add_skills(&self, actor: Uuid, names: Vec<String>) -> Result<Vec<Skill>, AppError> {
        let mut inputs: Vec<SkillInput> = Vec::with_capacity(names.len());
        for name in names {
            if name.trim().is_empty() {
                continue;
            }
            let input = Skill::prepare(SkillInput { skill: name });
            input.validate()?;
            if !inputs.iter().any(|seen| seen.skill == input.skill) {
                inputs.push(input);
            }
        }

        let mut skills = Vec::with_capacity(inputs.len());
        for input in &inputs {
            skills.push(self.owned.repo().get_or_create(actor, &input.skill).await?);
        }

        tracing::info!(%actor, count = skills.len(), "Skills updated");
        Ok(skills)
    }

    pub async fn list(&self, actor: Uuid) -> Result<Vec<Skill>, AppError> {
        self.owned.list(actor).await
    }

    pub async fn delete(&self, id: Uuid, actor: Uuid) -> Result<DeleteOutcome, AppError> {
        self.owned.delete(id, actor).await
    }
}
