use std::marker::PhantomData;

use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::owned::OwnedEntity,
    errors::AppError,
    repositories::owned::OwnedRepository,
};

/// Result of a delete request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// No row with that id exists.
    Missing,
}

/// Fetches a row and checks that `actor` owns it.
pub async fn owned_row<E, R>(repo: &R, id: Uuid, actor: Uuid) -> Result<E, AppError>
where
    E: OwnedEntity,
    R: OwnedRepository<E> + ?Sized,
{
    let row = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} not found", E::LABEL)))?;

    if row.owner_id() != actor {
        tracing::warn!(table = E::TABLE, %id, %actor, "Rejected access to another user's row");
        return Err(AppError::ForbiddenAccess);
    }

    Ok(row)
}

/// Create, read, update and delete for one profile section, always
/// scoped to the acting user.
pub struct OwnedHandler<E, R> {
    repo: R,
    _entity: PhantomData<fn() -> E>,
}

impl<E, R> OwnedHandler<E, R>
where
    E: OwnedEntity,
    R: OwnedRepository<E>,
{
    pub fn new(repo: R) -> Self {
        OwnedHandler { repo, _entity: PhantomData }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn list(&self, actor: Uuid) -> Result<Vec<E>, AppError> {
        self.repo.list_by_owner(actor).await
    }

    pub async fn get(&self, id: Uuid, actor: Uuid) -> Result<E, AppError> {
        owned_row(&self.repo, id, actor).await
    }

    pub async fn create(&self, actor: Uuid, input: E::Input) -> Result<E, AppError> {
        let input = E::prepare(input);
        input.validate()?;

        let row = self.repo.create(actor, &input).await?;
        tracing::info!(table = E::TABLE, id = %row.id(), "Row created");
        Ok(row)
    }

    pub async fn update(&self, id: Uuid, actor: Uuid, input: E::Input) -> Result<E, AppError> {
        let input = E::prepare(input);
        input.validate()?;

        owned_row(&self.repo, id, actor).await?;

        self.repo
            .update(id, actor, &input)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} not found", E::LABEL)))
    }

    pub async fn delete(&self, id: Uuid, actor: Uuid) -> Result<DeleteOutcome, AppError> {
        match owned_row(&self.repo, id, actor).await {
            Ok(_) => {}
            Err(AppError::NotFound(_)) => return Ok(DeleteOutcome::Missing),
            Err(e) => return Err(e),
        }

        if self.repo.delete(id, actor).await? {
            tracing::info!(table = E::TABLE, %id, "Row deleted");
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::Missing)
        }
    }
}
