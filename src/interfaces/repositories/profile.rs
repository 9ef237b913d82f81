use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    entities::profile::{ProfileSections, UpdateProfileRequest, UserProfile},
    errors::AppError,
    repositories::{
        owned::OwnedRepository,
        sqlx_repo::{SqlxOwnedRepo, SqlxProfileRepo},
    },
};

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_user_id_by_username(&self, username: &str) -> Result<Option<Uuid>, AppError>;
    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, AppError>;
    async fn load_sections(&self, user_id: Uuid) -> Result<ProfileSections, AppError>;
    async fn update_profile(&self, user_id: Uuid, changes: &UpdateProfileRequest) -> Result<Option<UserProfile>, AppError>;
}

const PROFILE_COLUMNS: &str = "p.id, p.user_id, u.username, p.full_name, p.headline, p.bio, p.location, p.joined, p.updated_at";

impl SqlxProfileRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProfileRepo {
            educations: SqlxOwnedRepo::new(pool.clone()),
            experiences: SqlxOwnedRepo::new(pool.clone()),
            projects: SqlxOwnedRepo::new(pool.clone()),
            skills: SqlxOwnedRepo::new(pool.clone()),
            certifications: SqlxOwnedRepo::new(pool.clone()),
            profile_links: SqlxOwnedRepo::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl ProfileRepository for SqlxProfileRepo {
    async fn find_user_id_by_username(&self, username: &str) -> Result<Option<Uuid>, AppError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM users WHERE username = $1 AND deleted_at IS NULL",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, AppError> {
        let sql = format!(
            "SELECT {} FROM user_profiles p JOIN users u ON u.id = p.user_id \
             WHERE p.user_id = $1 AND u.deleted_at IS NULL",
            PROFILE_COLUMNS
        );
        let profile = sqlx::query_as::<_, UserProfile>(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(profile)
    }

    async fn load_sections(&self, user_id: Uuid) -> Result<ProfileSections, AppError> {
        let (education, experience, project, skill, certification, profile_link) = futures::try_join!(
            self.educations.list_by_owner(user_id),
            self.experiences.list_by_owner(user_id),
            self.projects.list_by_owner(user_id),
            self.skills.list_by_owner(user_id),
            self.certifications.list_by_owner(user_id),
            self.profile_links.list_by_owner(user_id),
        )?;

        Ok(ProfileSections {
            education,
            experience,
            project,
            skill,
            certification,
            profile_link,
        })
    }

    async fn update_profile(&self, user_id: Uuid, changes: &UpdateProfileRequest) -> Result<Option<UserProfile>, AppError> {
        let sql = format!(
            r#"
            WITH p AS (
                UPDATE user_profiles
                SET full_name = $1, headline = $2, bio = $3, location = $4, updated_at = NOW()
                WHERE user_id = $5
                RETURNING *
            )
            SELECT {} FROM p JOIN users u ON u.id = p.user_id
            "#,
            PROFILE_COLUMNS
        );
        let profile = sqlx::query_as::<_, UserProfile>(&sql)
            .bind(&changes.full_name)
            .bind(&changes.headline)
            .bind(&changes.bio)
            .bind(&changes.location)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(profile)
    }
}
