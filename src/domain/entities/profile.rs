use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::{
        certification::Certification,
        education::Education,
        experience::Experience,
        flash::FlashMessage,
        profile_link::ProfileLink,
        project::Project,
        skill::Skill,
    },
    utils::text::blank_to_none,
};

/// Profile row joined with the owner's username.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub joined: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 120, message = "Full name must be at most 120 characters"))]
    pub full_name: Option<String>,

    #[validate(length(max = 160, message = "Headline must be at most 160 characters"))]
    pub headline: Option<String>,

    #[validate(length(max = 5000, message = "Bio must be at most 5000 characters"))]
    pub bio: Option<String>,

    #[validate(length(max = 120, message = "Location must be at most 120 characters"))]
    pub location: Option<String>,
}

impl UpdateProfileRequest {
    pub fn normalized(self) -> Self {
        UpdateProfileRequest {
            full_name: blank_to_none(self.full_name),
            headline: blank_to_none(self.headline),
            bio: blank_to_none(self.bio),
            location: blank_to_none(self.location),
        }
    }
}

/// Every section of one user's profile.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileSections {
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub project: Vec<Project>,
    pub skill: Vec<Skill>,
    pub certification: Vec<Certification>,
    pub profile_link: Vec<ProfileLink>,
}

/// Context of the public profile page.
#[derive(Debug, Clone, Serialize)]
pub struct ProfilePage {
    pub profile: UserProfile,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub professional_project: Vec<Project>,
    pub personal_project: Vec<Project>,
    pub skill: Vec<Skill>,
    pub certification: Vec<Certification>,
    pub profile_link: Vec<ProfileLink>,
    pub has_education: bool,
    pub has_experience: bool,
    pub has_professional_project: bool,
    pub has_personal_project: bool,
    pub has_certification: bool,
    pub has_profile_link: bool,
    pub has_skill: bool,
    pub messages: Vec<FlashMessage>,
}

impl ProfilePage {
    pub fn assemble(profile: UserProfile, sections: ProfileSections) -> Self {
        let (professional_project, personal_project): (Vec<_>, Vec<_>) =
            sections.project.into_iter().partition(Project::is_professional);

        ProfilePage {
            has_education: !sections.education.is_empty(),
            has_experience: !sections.experience.is_empty(),
            has_professional_project: !professional_project.is_empty(),
            has_personal_project: !personal_project.is_empty(),
            has_certification: !sections.certification.is_empty(),
            has_profile_link: !sections.profile_link.is_empty(),
            has_skill: !sections.skill.is_empty(),
            profile,
            education: sections.education,
            experience: sections.experience,
            professional_project,
            personal_project,
            skill: sections.skill,
            certification: sections.certification,
            profile_link: sections.profile_link,
            messages: Vec::new(),
        }
    }

    pub fn with_messages(mut self, messages: Vec<FlashMessage>) -> Self {
        self.messages = messages;
        self
    }
}

/// The signed-in owner's view of their own profile.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileDashboard {
    pub profile: UserProfile,
    #[serde(flatten)]
    pub sections: ProfileSections,
}
