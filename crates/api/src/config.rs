/// Errors raised while reading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}': expected {expected}")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// MongoDB connection settings.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// Connection string (`MONGO_URI`, legacy alias `LINK`).
    pub uri: String,
    /// Database holding both collections (default: `CARTERA`).
    pub database: String,
    /// Projects collection name (default: `PROYECTOS`).
    pub projects_collection: String,
    /// Races collection name (default: `razas`).
    pub races_collection: String,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Whole-request timeout in seconds (default: `60`).
    pub request_timeout_secs: u64,
    pub mongo: MongoConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `MONGO_URI` / `LINK`   | (required)  |
    /// | `DB_NAME`              | `CARTERA`   |
    /// | `PROYECTOS_COLLECTION` | `PROYECTOS` |
    /// | `RAZAS_COLLECTION` / `COLLECTION_NAME` | `razas` |
    /// | `HOST`                 | `0.0.0.0`   |
    /// | `PORT`                 | `8080`      |
    /// | `REQUEST_TIMEOUT_SECS` | `60`        |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let uri = get("MONGO_URI")
            .or_else(|| get("LINK"))
            .ok_or(ConfigError::Missing("MONGO_URI"))?;

        let mongo = MongoConfig {
            uri,
            database: get("DB_NAME").unwrap_or_else(|| "CARTERA".into()),
            projects_collection: get("PROYECTOS_COLLECTION").unwrap_or_else(|| "PROYECTOS".into()),
            races_collection: get("RAZAS_COLLECTION")
                .or_else(|| get("COLLECTION_NAME"))
                .unwrap_or_else(|| "razas".into()),
        };

        let host = get("HOST").unwrap_or_else(|| "0.0.0.0".into());

        // Accept the `:8080` listen-address form as well as a bare number.
        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .trim_start_matches(':')
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid {
                    name: "PORT",
                    value: raw.clone(),
                    expected: "a port number",
                })?,
            None => 8080,
        };

        let request_timeout_secs = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: "REQUEST_TIMEOUT_SECS",
                value: raw.clone(),
                expected: "a number of seconds",
            })?,
            None => 60,
        };

        Ok(Self {
            host,
            port,
            request_timeout_secs,
            mongo,
        })
    }
}
