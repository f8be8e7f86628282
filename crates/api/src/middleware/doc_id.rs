//! Document identifier extractor for `/{resource}/{id}` routes.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use cartera_core::id::parse_doc_id;
use cartera_core::types::DocId;

use crate::error::AppError;

/// A validated document id taken from the `{id}` path parameter.
///
/// Rejects with 400 before the handler runs, so malformed ids never reach
/// the database:
///
/// ```ignore
/// async fn get_by_id(DocIdPath(id): DocIdPath) -> AppResult<Json<Project>> { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DocIdPath(pub DocId);

impl<S> FromRequestParts<S> for DocIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        let id = parse_doc_id(&raw)?;
        Ok(Self(id))
    }
}
