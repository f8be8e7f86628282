pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::middleware::cors::preflight;
use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /proyectos                 list (GET), preflight (OPTIONS)
/// /proyectos/                missing id -> 400
/// /proyectos/{id}            get by id (GET), preflight (OPTIONS)
///
/// /razas                     list (GET), preflight (OPTIONS)
/// /razas/                    missing id -> 400
/// /razas/{id}                get by id (GET), preflight (OPTIONS)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/proyectos",
            get(handlers::project::list).options(preflight),
        )
        .route(
            "/proyectos/",
            get(handlers::project::missing_id).options(preflight),
        )
        .route(
            "/proyectos/{id}",
            get(handlers::project::get_by_id).options(preflight),
        )
        .route("/razas", get(handlers::race::list).options(preflight))
        .route(
            "/razas/",
            get(handlers::race::missing_id).options(preflight),
        )
        .route(
            "/razas/{id}",
            get(handlers::race::get_by_id).options(preflight),
        )
}
