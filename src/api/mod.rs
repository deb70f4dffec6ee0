use axum::Json;
use axum::extract::Path;
use axum::{Router, extract::State, routing::get};
use serde::Serialize;

use crate::error::AppError;
use crate::models::{Course, Session};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CourseDetail {
    pub course: Course,
    pub sessions: Vec<Session>,
}

/// Read-only JSON view of the catalog, mounted under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(list_courses))
        .route("/courses/{slug}", get(get_course))
}

async fn list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.catalog.courses().to_vec())
}

async fn get_course(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CourseDetail>, AppError> {
    let course = state
        .catalog
        .find_by_slug(&slug)
        .ok_or(AppError::NotFound)?;

    Ok(Json(CourseDetail {
        course: course.clone(),
        sessions: state.catalog.sessions().to_vec(),
    }))
}
