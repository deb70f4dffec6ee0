use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::api;
use crate::error::AppError;
use crate::state::AppState;
use crate::ui::SessionExpansion;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing))
        .route("/courses", get(list_courses))
        .route("/courses/{slug}", get(course_detail))
        .route("/courses/{slug}/sessions/{session_id}", get(course_session))
        .route("/health", get(health))
        .nest("/api", api::router())
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn landing(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.templates.landing(&state.landing)?))
}

async fn list_courses(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.templates.courses(&state.catalog)?))
}

async fn course_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    render_course(&state, &slug, SessionExpansion::Collapsed)
}

async fn course_session(
    State(state): State<AppState>,
    Path((slug, session_id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let expansion = match session_id.parse::<u32>() {
        Ok(id) if state.catalog.has_session(id) => SessionExpansion::Expanded(id),
        _ => {
            debug!("unknown session {:?} for {}, rendering collapsed", session_id, slug);
            SessionExpansion::Collapsed
        }
    };
    render_course(&state, &slug, expansion)
}

fn render_course(
    state: &AppState,
    slug: &str,
    expansion: SessionExpansion,
) -> Result<Response, AppError> {
    match state.catalog.find_by_slug(slug) {
        Some(course) => {
            let page =
                state
                    .templates
                    .course_detail(course, state.catalog.sessions(), expansion)?;
            Ok(Html(page).into_response())
        }
        None => {
            warn!("course not found: {}", slug);
            let page = state.templates.course_not_found()?;
            Ok((StatusCode::NOT_FOUND, Html(page)).into_response())
        }
    }
}
