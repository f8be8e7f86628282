/// Document identifiers are MongoDB ObjectIds (12 bytes, 24 hex characters).
pub type DocId = bson::oid::ObjectId;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
