//! Repository for the projects collection.

use cartera_core::types::DocId;
use mongodb::Collection;

use crate::models::project::Project;
use crate::DbError;

/// Read operations over project documents.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List every project in the collection's natural order.
    pub async fn list(collection: &Collection<Project>) -> Result<Vec<Project>, DbError> {
        super::find_all(collection).await
    }

    /// Find a project by its document id.
    pub async fn find_by_id(
        collection: &Collection<Project>,
        id: DocId,
    ) -> Result<Option<Project>, DbError> {
        super::find_by_id(collection, id).await
    }
}
