pub mod data;

use std::collections::HashSet;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Course, Session};
use crate::slug::{resolve, slugify};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("course {id} has an empty title")]
    EmptyTitle { id: u32 },

    #[error("courses {first} and {second} share the slug \"{slug}\"")]
    DuplicateSlug { slug: String, first: u32, second: u32 },

    #[error("course id {0} is used more than once")]
    DuplicateCourseId(u32),

    #[error("session id {0} is used more than once")]
    DuplicateSessionId(u32),

    #[error("course {id} lists \"{tech}\" more than once")]
    DuplicateTech { id: u32, tech: String },

    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The course and session indexes. Immutable once built.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    sessions: Vec<Session>,
}

impl Catalog {
    /// Builds a catalog, rejecting data that would make slug lookup ambiguous.
    pub fn new(courses: Vec<Course>, sessions: Vec<Session>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::new();
        let mut slugs: Vec<(String, u32)> = Vec::with_capacity(courses.len());

        for course in &courses {
            if course.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle { id: course.id });
            }
            if !ids.insert(course.id) {
                return Err(CatalogError::DuplicateCourseId(course.id));
            }

            let slug = slugify(&course.title);
            if let Some((_, first)) = slugs.iter().find(|(s, _)| *s == slug) {
                return Err(CatalogError::DuplicateSlug {
                    slug,
                    first: *first,
                    second: course.id,
                });
            }
            slugs.push((slug, course.id));

            let mut tags = HashSet::new();
            for tech in &course.tech {
                if !tags.insert(tech.as_str()) {
                    return Err(CatalogError::DuplicateTech {
                        id: course.id,
                        tech: tech.clone(),
                    });
                }
            }
        }

        let mut session_ids = HashSet::new();
        for session in &sessions {
            if !session_ids.insert(session.id) {
                return Err(CatalogError::DuplicateSessionId(session.id));
            }
        }

        debug!("catalog validated: {} courses, {} sessions", courses.len(), sessions.len());
        Ok(Self { courses, sessions })
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All sessions. Not partitioned per course.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Course> {
        resolve(slug, &self.courses)
    }

    pub fn has_session(&self, id: u32) -> bool {
        self.sessions.iter().any(|s| s.id == id)
    }
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Catalog, CatalogError>;
}

/// Catalog compiled into the binary.
pub struct BuiltinCatalog;

#[async_trait]
impl CatalogSource for BuiltinCatalog {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        Catalog::new(data::courses(), data::sessions())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    courses: Vec<Course>,
    #[serde(default)]
    sessions: Vec<Session>,
}

/// Catalog read from a JSON file with `courses` and `sessions` arrays.
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> Result<Catalog, CatalogError> {
        info!("Loading catalog from {}", self.path.display());

        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Read {
                path: self.path.clone(),
                source,
            })?;

        let file: CatalogFile =
            serde_json::from_str(&body).map_err(|source| CatalogError::Parse {
                path: self.path.clone(),
                source,
            })?;

        Catalog::new(file.courses, file.sessions)
    }
}
