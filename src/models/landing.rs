use serde::{Deserialize, Serialize};

use super::CourseTeaser;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub handle: String,
    pub url: String,
    pub description: String,
}

/// Static content of the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Landing {
    pub services: Vec<String>,
    pub technologies: Vec<String>,
    pub teasers: Vec<CourseTeaser>,
    pub email: String,
    pub socials: Vec<SocialLink>,
}
