//! MongoDB access layer: connection lifecycle, document models and
//! read-only repositories.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

pub mod error;
pub mod models;
pub mod repositories;

pub use error::DbError;

/// Upper bound for establishing a connection and for the liveness ping.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound for releasing the client's resources at shutdown.
pub const DISCONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Process-wide handle on a pooled MongoDB client and the database it serves.
///
/// Cloning is cheap: the driver client is reference counted and every clone
/// shares the same connection pool.
#[derive(Debug, Clone)]
pub struct DbPool {
    client: Client,
    database: Database,
}

impl DbPool {
    /// Typed accessor for a named collection in the configured database.
    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.database.collection(name)
    }

    /// Name of the database this pool reads from.
    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Build a pooled client for `uri`, scoped to `db_name`.
///
/// No network traffic happens here; servers are discovered lazily by the
/// driver. Use [`connect`] to also verify liveness.
pub async fn create_pool(uri: &str, db_name: &str) -> Result<DbPool, DbError> {
    let mut options = ClientOptions::parse(uri).await?;
    options.app_name = Some("cartera".into());
    // Timeouts given in the URI win over the defaults.
    options.connect_timeout.get_or_insert(CONNECT_TIMEOUT);
    options.server_selection_timeout.get_or_insert(CONNECT_TIMEOUT);

    let client = Client::with_options(options)?;
    let database = client.database(db_name);
    Ok(DbPool { client, database })
}

/// Ping the deployment, failing if it does not answer within [`CONNECT_TIMEOUT`].
pub async fn health_check(pool: &DbPool) -> Result<(), DbError> {
    let admin = pool.client.database("admin");

    tokio::time::timeout(CONNECT_TIMEOUT, admin.run_command(doc! { "ping": 1 }))
        .await
        .map_err(|_| DbError::Timeout {
            operation: "ping",
            timeout: CONNECT_TIMEOUT,
        })??;
    Ok(())
}

/// Build the pool and verify the deployment answers before handing it out.
///
/// On a failed ping the client is shut down before the error is returned.
pub async fn connect(uri: &str, db_name: &str) -> Result<DbPool, DbError> {
    let pool = create_pool(uri, db_name).await?;

    if let Err(e) = health_check(&pool).await {
        disconnect(pool).await;
        return Err(e);
    }

    tracing::info!(database = db_name, "Connected to MongoDB");
    Ok(pool)
}

/// Release the client's connections, waiting at most [`DISCONNECT_TIMEOUT`].
///
/// Consumes the pool; other clones still alive keep working until dropped.
pub async fn disconnect(pool: DbPool) {
    let DbPool { client, .. } = pool;
    match tokio::time::timeout(DISCONNECT_TIMEOUT, client.shutdown()).await {
        Ok(()) => tracing::info!("Disconnected from MongoDB"),
        Err(_) => tracing::warn!(
            timeout_secs = DISCONNECT_TIMEOUT.as_secs(),
            "MongoDB shutdown did not finish in time"
        ),
    }
}
