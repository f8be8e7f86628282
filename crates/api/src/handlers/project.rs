//! Handlers for the `/proyectos` resource.

use axum::extract::State;
use axum::Json;
use cartera_core::error::CoreError;
use cartera_db::models::project::Project;
use cartera_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::doc_id::DocIdPath;
use crate::state::AppState;

/// GET /proyectos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.projects()).await?;
    Ok(Json(projects))
}

/// GET /proyectos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    DocIdPath(id): DocIdPath,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.projects(), id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                id: id.to_hex(),
            })
        })?;
    Ok(Json(project))
}

/// GET /proyectos/ -- the id segment is present but empty.
pub async fn missing_id() -> AppError {
    AppError::BadRequest("Project id not provided in the URL".into())
}
