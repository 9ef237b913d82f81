use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::owned::OwnedEntity,
    errors::AppError,
    repositories::sqlx_repo::SqlxOwnedRepo,
};

#[async_trait]
pub trait OwnedRepository<E: OwnedEntity>: Send + Sync {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<E>, AppError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, AppError>;
    /// Inserts a row owned by `owner_id`.
    async fn create(&self, owner_id: Uuid, input: &E::Input) -> Result<E, AppError>;
    /// Rewrites the row's columns. The owner column is never touched;
    /// `None` when no row with that id belongs to `owner_id`.
    async fn update(&self, id: Uuid, owner_id: Uuid, input: &E::Input) -> Result<Option<E>, AppError>;
    /// `false` when no row with that id belongs to `owner_id`.
    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError>;
}

pub(crate) fn list_sql<E: OwnedEntity>() -> String {
    format!("SELECT * FROM {} WHERE user_id = $1 ORDER BY {}", E::TABLE, E::ORDER_BY)
}

pub(crate) fn find_sql<E: OwnedEntity>() -> String {
    format!("SELECT * FROM {} WHERE id = $1", E::TABLE)
}

pub(crate) fn insert_sql<E: OwnedEntity>() -> String {
    let placeholders = (2..=E::COLUMNS.len() + 1)
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {} (user_id, {}) VALUES ($1, {}) RETURNING *",
        E::TABLE,
        E::COLUMNS.join(", "),
        placeholders
    )
}

pub(crate) fn update_sql<E: OwnedEntity>() -> String {
    let n = E::COLUMNS.len();
    let assignments = E::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{} = ${}", column, i + 1))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE {} SET {}, updated_at = NOW() WHERE id = ${} AND user_id = ${} RETURNING *",
        E::TABLE,
        assignments,
        n + 1,
        n + 2
    )
}

pub(crate) fn delete_sql<E: OwnedEntity>() -> String {
    format!("DELETE FROM {} WHERE id = $1 AND user_id = $2", E::TABLE)
}

#[async_trait]
impl<E: OwnedEntity> OwnedRepository<E> for SqlxOwnedRepo<E> {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<E>, AppError> {
        let sql = list_sql::<E>();
        let rows = sqlx::query_as::<_, E>(&sql)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, AppError> {
        let sql = find_sql::<E>();
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn create(&self, owner_id: Uuid, input: &E::Input) -> Result<E, AppError> {
        let sql = insert_sql::<E>();
        let query = sqlx::query_as::<_, E>(&sql).bind(owner_id);
        let row = E::bind_input(input, query)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    async fn update(&self, id: Uuid, owner_id: Uuid, input: &E::Input) -> Result<Option<E>, AppError> {
        let sql = update_sql::<E>();
        let row = E::bind_input(input, sqlx::query_as::<_, E>(&sql))
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError> {
        let sql = delete_sql::<E>();
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{education::Education, skill::Skill};

    #[test]
    fn insert_binds_owner_first() {
        assert_eq!(
            insert_sql::<Skill>(),
            "INSERT INTO skills (user_id, skill) VALUES ($1, $2) RETURNING *"
        );
    }

    #[test]
    fn update_never_sets_owner() {
        let sql = update_sql::<Education>();
        assert_eq!(
            sql,
            "UPDATE educations SET degree = $1, institute = $2, pass_year = $3, cgpa = $4, out_of = $5, \
             updated_at = NOW() WHERE id = $6 AND user_id = $7 RETURNING *"
        );
        assert!(!sql.contains("SET user_id"));
    }

    #[test]
    fn list_uses_entity_ordering() {
        assert_eq!(
            list_sql::<Skill>(),
            "SELECT * FROM skills WHERE user_id = $1 ORDER BY created_at DESC"
        );
    }
}
