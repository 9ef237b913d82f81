use sqlx::PgPool;

use crate::{
    entities::owned::OwnedEntity,
    repositories::sqlx_repo::{SqlxOwnedRepo, SqlxProfileRepo, SqlxUserRepo},
};

#[derive(Clone)]
pub struct SharedRepositories {
    pub pool: PgPool,
    pub user_repo: SqlxUserRepo,
    pub profile_repo: SqlxProfileRepo,
}

impl SharedRepositories {
    pub fn new(pool: PgPool) -> Self {
        let user_repo = SqlxUserRepo::new(pool.clone());
        let profile_repo = SqlxProfileRepo::new(pool.clone());

        SharedRepositories {
            pool,
            user_repo,
            profile_repo,
        }
    }

    pub fn owned<E: OwnedEntity>(&self) -> SqlxOwnedRepo<E> {
        SqlxOwnedRepo::new(self.pool.clone())
    }
}
