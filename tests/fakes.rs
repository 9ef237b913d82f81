#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use chrono::Utc;
use portfolio_site::{
    entities::{
        education::{Education, EducationInput},
        experience::{Experience, ExperienceInput},
        owned::OwnedEntity,
        profile::{ProfileSections, UpdateProfileRequest, UserProfile},
        profile_link::{ProfileLink, ProfileLinkInput},
        project::{Project, ProjectInput},
        skill::{Skill, SkillInput},
    },
    errors::AppError,
    repositories::{owned::OwnedRepository, profile::ProfileRepository, skill::SkillRepository},
};
use uuid::Uuid;

/// Builds a stored row from its id, owner and input.
pub type RowBuilder<E> = fn(Uuid, Uuid, &<E as OwnedEntity>::Input) -> E;

pub struct InMemoryOwnedRepo<E: OwnedEntity> {
    pub rows: Mutex<Vec<E>>,
    build: RowBuilder<E>,
}

impl<E: OwnedEntity + Clone> InMemoryOwnedRepo<E> {
    pub fn new(build: RowBuilder<E>) -> Self {
        InMemoryOwnedRepo { rows: Mutex::new(Vec::new()), build }
    }

    pub fn seed(&self, owner: Uuid, input: &E::Input) -> E {
        let row = (self.build)(Uuid::new_v4(), owner, input);
        self.rows.lock().unwrap().push(row.clone());
        row
    }

    pub fn snapshot(&self) -> Vec<E> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl<E: OwnedEntity + Clone> OwnedRepository<E> for InMemoryOwnedRepo<E> {
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<E>, AppError> {
        Ok(self.snapshot().into_iter().filter(|r| r.owner_id() == owner_id).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, AppError> {
        Ok(self.snapshot().into_iter().find(|r| r.id() == id))
    }

    async fn create(&self, owner_id: Uuid, input: &E::Input) -> Result<E, AppError> {
        Ok(self.seed(owner_id, input))
    }

    async fn update(&self, id: Uuid, owner_id: Uuid, input: &E::Input) -> Result<Option<E>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(slot) = rows.iter_mut().find(|r| r.id() == id && r.owner_id() == owner_id) else {
            return Ok(None);
        };
        *slot = (self.build)(id, owner_id, input);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.id() == id && r.owner_id() == owner_id));
        Ok(rows.len() < before)
    }
}

#[async_trait]
impl SkillRepository for InMemoryOwnedRepo<Skill> {
    async fn get_or_create(&self, owner_id: Uuid, skill: &str) -> Result<Skill, AppError> {
        if let Some(existing) = self
            .snapshot()
            .into_iter()
            .find(|s| s.user_id == owner_id && s.skill == skill)
        {
            return Ok(existing);
        }
        Ok(self.seed(owner_id, &SkillInput { skill: skill.to_string() }))
    }
}

pub fn education_row(id: Uuid, user_id: Uuid, input: &EducationInput) -> Education {
    let now = Utc::now();
    Education {
        id,
        user_id,
        degree: input.degree.clone(),
        institute: input.institute.clone(),
        pass_year: input.pass_year,
        cgpa: input.cgpa,
        out_of: input.out_of,
        created_at: now,
        updated_at: now,
    }
}

pub fn experience_row(id: Uuid, user_id: Uuid, input: &ExperienceInput) -> Experience {
    let now = Utc::now();
    Experience {
        id,
        user_id,
        company_name: input.company_name.clone(),
        role: input.role.clone(),
        started_work_from: input.started_work_from,
        worked_till: input.worked_till,
        work_description: input.work_description.clone(),
        created_at: now,
        updated_at: now,
    }
}

pub fn project_row(id: Uuid, user_id: Uuid, input: &ProjectInput) -> Project {
    let now = Utc::now();
    Project {
        id,
        user_id,
        title: input.title.clone(),
        project_type: input.project_type,
        used_technologies: input.used_technologies.clone(),
        description: input.description.clone(),
        project_link: input.project_link.clone(),
        code_link: input.code_link.clone(),
        created_at: now,
        updated_at: now,
    }
}

pub fn profile_link_row(id: Uuid, user_id: Uuid, input: &ProfileLinkInput) -> ProfileLink {
    let now = Utc::now();
    ProfileLink {
        id,
        user_id,
        link: input.link.clone(),
        link_site: input.link_site.clone(),
        created_at: now,
        updated_at: now,
    }
}

pub fn skill_row(id: Uuid, user_id: Uuid, input: &SkillInput) -> Skill {
    let now = Utc::now();
    Skill {
        id,
        user_id,
        skill: input.skill.clone(),
        created_at: now,
        updated_at: now,
    }
}

pub fn empty_profile(user_id: Uuid, username: &str) -> UserProfile {
    let now = Utc::now();
    UserProfile {
        id: Uuid::new_v4(),
        user_id,
        username: username.to_string(),
        full_name: None,
        headline: None,
        bio: None,
        location: None,
        joined: now,
        updated_at: now,
    }
}

/// Accounts, profiles and sections keyed by user id.
#[derive(Default)]
pub struct InMemoryProfileRepo {
    pub usernames: HashMap<String, Uuid>,
    pub profiles: Mutex<HashMap<Uuid, UserProfile>>,
    pub sections: HashMap<Uuid, ProfileSections>,
}

impl InMemoryProfileRepo {
    /// Registers an account with an empty profile.
    pub fn with_user(mut self, user_id: Uuid, username: &str) -> Self {
        self.usernames.insert(username.to_string(), user_id);
        self.profiles.lock().unwrap().insert(user_id, empty_profile(user_id, username));
        self
    }

    /// Registers an account that has no profile row.
    pub fn with_bare_user(mut self, user_id: Uuid, username: &str) -> Self {
        self.usernames.insert(username.to_string(), user_id);
        self
    }

    pub fn with_sections(mut self, user_id: Uuid, sections: ProfileSections) -> Self {
        self.sections.insert(user_id, sections);
        self
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepo {
    async fn find_user_id_by_username(&self, username: &str) -> Result<Option<Uuid>, AppError> {
        Ok(self.usernames.get(username).copied())
    }

    async fn find_profile(&self, user_id: Uuid) -> Result<Option<UserProfile>, AppError> {
        Ok(self.profiles.lock().unwrap().get(&user_id).cloned())
    }

    async fn load_sections(&self, user_id: Uuid) -> Result<ProfileSections, AppError> {
        Ok(self.sections.get(&user_id).cloned().unwrap_or_default())
    }

    async fn update_profile(&self, user_id: Uuid, changes: &UpdateProfileRequest) -> Result<Option<UserProfile>, AppError> {
        let mut profiles = self.profiles.lock().unwrap();
        let Some(profile) = profiles.get_mut(&user_id) else {
            return Ok(None);
        };
        profile.full_name = changes.full_name.clone();
        profile.headline = changes.headline.clone();
        profile.bio = changes.bio.clone();
        profile.location = changes.location.clone();
        profile.updated_at = Utc::now();
        Ok(Some(profile.clone()))
    }
}
