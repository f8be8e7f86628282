//! Read-only repositories over the MongoDB collections.
//!
//! Every operation is bounded by a deadline; an expired deadline abandons the
//! driver call and surfaces as [`DbError::Timeout`].

use std::time::Duration;

use cartera_core::types::DocId;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::Collection;
use serde::de::DeserializeOwned;

use crate::DbError;

mod project_repo;
mod race_repo;

pub use project_repo::ProjectRepo;
pub use race_repo::RaceRepo;

/// Deadline for an unfiltered scan, cursor drain included.
pub const LIST_TIMEOUT: Duration = Duration::from_secs(30);

/// Deadline for a single-document lookup.
pub const FIND_ONE_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch every document in `collection`, in natural order.
async fn find_all<T>(collection: &Collection<T>) -> Result<Vec<T>, DbError>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    let scan = async {
        let cursor = collection.find(doc! {}).await?;
        cursor.try_collect::<Vec<T>>().await
    };

    let documents = tokio::time::timeout(LIST_TIMEOUT, scan)
        .await
        .map_err(|_| DbError::Timeout {
            operation: "find",
            timeout: LIST_TIMEOUT,
        })??;

    tracing::debug!(
        collection = collection.name(),
        count = documents.len(),
        "Listed documents"
    );
    Ok(documents)
}

/// Fetch the document whose `_id` equals `id`, if any.
async fn find_by_id<T>(collection: &Collection<T>, id: DocId) -> Result<Option<T>, DbError>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    let lookup = collection.find_one(doc! { "_id": id });

    let document = tokio::time::timeout(FIND_ONE_TIMEOUT, lookup)
        .await
        .map_err(|_| DbError::Timeout {
            operation: "find_one",
            timeout: FIND_ONE_TIMEOUT,
        })??;

    tracing::debug!(
        collection = collection.name(),
        %id,
        found = document.is_some(),
        "Looked up document"
    );
    Ok(document)
}
