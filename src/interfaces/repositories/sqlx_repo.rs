use std::marker::PhantomData;

use sqlx::PgPool;

use crate::entities::{
    certification::Certification, education::Education, experience::Experience,
    owned::OwnedEntity, profile_link::ProfileLink, project::Project, skill::Skill,
};

#[derive(Clone)]
pub struct SqlxUserRepo {
    pub pool: PgPool,
}

/// Table-generic repository for one profile section.
pub struct SqlxOwnedRepo<E> {
    pub pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: OwnedEntity> SqlxOwnedRepo<E> {
    pub fn new(pool: PgPool) -> Self {
        SqlxOwnedRepo { pool, _entity: PhantomData }
    }
}

impl<E> Clone for SqlxOwnedRepo<E> {
    fn clone(&self) -> Self {
        SqlxOwnedRepo { pool: self.pool.clone(), _entity: PhantomData }
    }
}

#[derive(Clone)]
pub struct SqlxProfileRepo {
    pub pool: PgPool,
    pub educations: SqlxOwnedRepo<Education>,
    pub experiences: SqlxOwnedRepo<Experience>,
    pub projects: SqlxOwnedRepo<Project>,
    pub skills: SqlxOwnedRepo<Skill>,
    pub certifications: SqlxOwnedRepo<Certification>,
    pub profile_links: SqlxOwnedRepo<ProfileLink>,
}
