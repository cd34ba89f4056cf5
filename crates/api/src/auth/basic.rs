//! HTTP basic auth for the admin dashboard.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Realm advertised in `WWW-Authenticate` challenges.
pub const ADMIN_REALM: &str = "mcc-admin";

#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AdminCredentials {
    /// Load admin credentials from the environment.
    ///
    /// | Env Var              | Default  |
    /// |----------------------|----------|
    /// | `MCC_ADMIN_USER`     | `admin`  |
    /// | `MCC_ADMIN_PASSWORD` | unset    |
    ///
    /// Returns `None` when no password is configured, which disables the
    /// dashboard entirely.
    pub fn from_env() -> Option<Self> {
        let password = std::env::var("MCC_ADMIN_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty())?;
        let username = std::env::var("MCC_ADMIN_USER").unwrap_or_else(|_| "admin".into());
        Some(Self { username, password })
    }

    /// Check an `Authorization` header value against these credentials.
    pub fn check(&self, header: &str) -> bool {
        let Some(encoded) = header.strip_prefix("Basic ") else {
            return false;
        };
        let Ok(decoded) = STANDARD.decode(encoded.trim()) else {
            return false;
        };
        let Ok(pair) = String::from_utf8(decoded) else {
            return false;
        };
        match pair.split_once(':') {
            Some((user, pass)) => user == self.username && pass == self.password,
            None => false,
        }
    }
}
