//! Handlers for the `/razas` resource.

use axum::extract::State;
use axum::Json;
use cartera_core::error::CoreError;
use cartera_db::models::race::Race;
use cartera_db::repositories::RaceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::doc_id::DocIdPath;
use crate::state::AppState;

/// GET /razas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Race>>> {
    let races = RaceRepo::list(&state.races()).await?;
    Ok(Json(races))
}

/// GET /razas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    DocIdPath(id): DocIdPath,
) -> AppResult<Json<Race>> {
    let race = RaceRepo::find_by_id(&state.races(), id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Race",
                id: id.to_hex(),
            })
        })?;
    Ok(Json(race))
}

/// GET /razas/
pub async fn missing_id() -> AppError {
    AppError::BadRequest("Race id not provided in the URL".into())
}
