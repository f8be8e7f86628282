//! Repository for the races collection.

use cartera_core::types::DocId;
use mongodb::Collection;

use crate::models::race::Race;
use crate::DbError;

/// Read operations over race documents.
pub struct RaceRepo;

impl RaceRepo {
    pub async fn list(collection: &Collection<Race>) -> Result<Vec<Race>, DbError> {
        super::find_all(collection).await
    }

    pub async fn find_by_id(
        collection: &Collection<Race>,
        id: DocId,
    ) -> Result<Option<Race>, DbError> {
        super::find_by_id(collection, id).await
    }
}
