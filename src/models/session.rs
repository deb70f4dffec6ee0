use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: u32,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub duration: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub topics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Pdf,
    Github,
    Video,
    Link,
    /// Any tag outside the known set. Rendered with the generic icon.
    #[serde(other)]
    Unknown,
}

/// Icon shown next to a resource link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceIcon {
    Pdf,
    Github,
    Link,
}

impl ResourceKind {
    pub fn icon(self) -> ResourceIcon {
        match self {
            ResourceKind::Pdf => ResourceIcon::Pdf,
            ResourceKind::Github => ResourceIcon::Github,
            _ => ResourceIcon::Link,
        }
    }
}
