use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::profile::{ProfileDashboard, ProfilePage, UpdateProfileRequest, UserProfile},
    errors::AppError,
    repositories::profile::ProfileRepository,
};

#[derive(Debug)]
pub enum ProfileLookup {
    Found(Box<ProfilePage>),
    /// A `user_name` was given but matches no account.
    UnknownUsername,
}

pub struct ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub profile_repo: R,
    default_user_id: Option<Uuid>,
}

impl<R> ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repo: R, default_user_id: Option<Uuid>) -> Self {
        ProfileHandler { profile_repo, default_user_id }
    }

    /// Public page target: explicit `user_name`, then the signed-in
    /// user, then the configured default user.
    pub async fn public_page(&self, user_name: Option<&str>, actor: Option<Uuid>) -> Result<ProfileLookup, AppError> {
        let user_name = user_name.map(str::trim).filter(|name| !name.is_empty());

        let target = match user_name {
            Some(name) => match self.profile_repo.find_user_id_by_username(name).await? {
                Some(id) => id,
                None => return Ok(ProfileLookup::UnknownUsername),
            },
            None => actor
                .or(self.default_user_id)
                .ok_or_else(|| AppError::NotFound("No profile to show".to_string()))?,
        };

        let (profile, sections) = futures::try_join!(
            self.profile_repo.find_profile(target),
            self.profile_repo.load_sections(target),
        )?;
        let profile = profile.ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

        Ok(ProfileLookup::Found(Box::new(ProfilePage::assemble(profile, sections))))
    }

    pub async fn dashboard(&self, actor: Uuid) -> Result<ProfileDashboard, AppError> {
        let (profile, sections) = futures::try_join!(
            self.profile_repo.find_profile(actor),
            self.profile_repo.load_sections(actor),
        )?;
        let profile = profile.ok_or_else(|| AppError::NotFound("Profile not found".to_string()))?;

        Ok(ProfileDashboard { profile, sections })
    }

    pub async fn update_profile(&self, actor: Uuid, request: UpdateProfileRequest) -> Result<UserProfile, AppError> {
        let request = request.normalized();
        request.validate()?;

        self.profile_repo
            .update_profile(actor, &request)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }
}
