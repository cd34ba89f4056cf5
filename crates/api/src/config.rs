use crate::auth::basic::AdminCredentials;
use crate::auth::firebase::FirebaseConfig;

/// Server configuration loaded from environment variables.
///
/// Loaded once in `main` and shared through `AppState`; handlers never read
/// the process environment themselves.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Postgres connection string.
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGIN`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Firebase ID-token verification settings.
    pub firebase: FirebaseConfig,
    /// Admin dashboard credentials. `None` disables the dashboard.
    pub admin: Option<AdminCredentials>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3001`                     |
    /// | `DATABASE_URL`         | **required**               |
    /// | `CORS_ORIGIN`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// Firebase and admin settings are documented on their own types.
    /// `LOG_FORMAT` is read by [`crate::logging`] before configuration loads.
    ///
    /// # Panics
    ///
    /// Panics on missing required variables or unparseable values so that
    /// misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let firebase = FirebaseConfig::from_env();
        let admin = AdminCredentials::from_env();

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            firebase,
            admin,
        }
    }
}
