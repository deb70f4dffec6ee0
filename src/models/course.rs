use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u32,
    pub year: String,
    pub level: String,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub duration: String,
    pub students: String,
    pub instructor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
}

/// Landing page summary of a course. Kept apart from the course index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseTeaser {
    pub year: String,
    pub level: String,
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub duration: String,
    pub students: String,
}
