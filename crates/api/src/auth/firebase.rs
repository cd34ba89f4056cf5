//! Firebase ID-token verification.
//!
//! Firebase signs ID tokens with rotating RSA keys published as a JWK set.
//! [`FirebaseVerifier`] caches that set, refetches it when it goes stale or
//! when a token names a key id it has not seen, and validates the standard
//! Firebase claims (`aud` = project id, `iss` =
//! `https://securetoken.google.com/<project id>`, non-empty `sub`).

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tokio::sync::RwLock;

/// Google's JWK endpoint for Firebase Auth signing keys.
pub const GOOGLE_JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

/// Issuer prefix; the project id is appended.
const ISSUER_PREFIX: &str = "https://securetoken.google.com/";

/// Default lifetime of the cached key set in seconds.
const DEFAULT_KEY_CACHE_SECS: u64 = 3600;

/// Minimum time between fetch attempts once the cache has been populated
/// or a fetch has failed.
const MIN_FORCED_REFRESH: Duration = Duration::from_secs(60);

const KEY_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    /// Firebase project id; the expected `aud` claim.
    pub project_id: String,
    /// JWK set URL (overridable for testing against a local issuer).
    pub jwks_url: String,
    /// How long a fetched key set is trusted before refetching.
    pub key_cache_secs: u64,
}

impl FirebaseConfig {
    /// Load Firebase settings from environment variables.
    ///
    /// | Env Var                    | Required | Default            |
    /// |----------------------------|----------|--------------------|
    /// | `FIREBASE_PROJECT_ID`      | **yes**  | --                 |
    /// | `FIREBASE_JWKS_URL`        | no       | Google JWK set     |
    /// | `FIREBASE_KEY_CACHE_SECS`  | no       | `3600`             |
    ///
    /// # Panics
    ///
    /// Panics if `FIREBASE_PROJECT_ID` is not set or is empty.
    pub fn from_env() -> Self {
        let project_id = std::env::var("FIREBASE_PROJECT_ID")
            .expect("FIREBASE_PROJECT_ID must be set in the environment");
        assert!(!project_id.is_empty(), "FIREBASE_PROJECT_ID must not be empty");

        let jwks_url =
            std::env::var("FIREBASE_JWKS_URL").unwrap_or_else(|_| GOOGLE_JWKS_URL.to_string());

        let key_cache_secs: u64 = std::env::var("FIREBASE_KEY_CACHE_SECS")
            .unwrap_or_else(|_| DEFAULT_KEY_CACHE_SECS.to_string())
            .parse()
            .expect("FIREBASE_KEY_CACHE_SECS must be a valid u64");

        Self {
            project_id,
            jwks_url,
            key_cache_secs,
        }
    }

    pub fn issuer(&self) -> String {
        format!("{ISSUER_PREFIX}{}", self.project_id)
    }
}

// ---------------------------------------------------------------------------
// Verifier seam
// ---------------------------------------------------------------------------

/// Identity extracted from a verified ID token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    pub uid: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,
    #[error("Invalid token: {0}")]
    Invalid(String),
    #[error("Signing key not found for kid: {0}")]
    UnknownKey(String),
    #[error("Signing key fetch failed: {0}")]
    KeySetUnavailable(String),
}

/// Verifies bearer ID tokens and returns the caller's identity.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify_id_token(&self, token: &str) -> Result<VerifiedToken, TokenError>;
}

// ---------------------------------------------------------------------------
// Firebase implementation
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

#[derive(Debug, Deserialize)]
struct Jwk {
    kid: String,
    kty: String,
    n: Option<String>,
    e: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    sub: String,
}

#[derive(Default)]
struct KeyCache {
    keys: HashMap<String, DecodingKey>,
    /// Last successful fetch.
    fetched_at: Option<Instant>,
    /// Last fetch attempt, successful or not.
    attempted_at: Option<Instant>,
    /// Error from the last attempt, cleared on success.
    last_failure: Option<String>,
}

/// What the cache can say about a key id without touching the network.
enum CachedKey {
    Hit(DecodingKey),
    /// A key past its cache lifetime, served because a refetch was just
    /// attempted and did not replace it.
    Stale(DecodingKey),
    Unknown,
    Unavailable(String),
    Refresh,
}

impl KeyCache {
    fn lookup(&self, kid: &str, max_age: Duration, now: Instant) -> CachedKey {
        let key = self.keys.get(kid);
        let fresh = self
            .fetched_at
            .is_some_and(|t| now.saturating_duration_since(t) < max_age);

        if let (true, Some(key)) = (fresh, key) {
            return CachedKey::Hit(key.clone());
        }

        let attempted_recently = self
            .attempted_at
            .is_some_and(|t| now.saturating_duration_since(t) < MIN_FORCED_REFRESH);
        if !attempted_recently {
            return CachedKey::Refresh;
        }

        match (key, &self.last_failure) {
            (Some(key), _) => CachedKey::Stale(key.clone()),
            (None, Some(err)) => CachedKey::Unavailable(err.clone()),
            (None, None) => CachedKey::Unknown,
        }
    }

    fn record(&mut self, fetched: Result<HashMap<String, DecodingKey>, TokenError>, now: Instant) {
        self.attempted_at = Some(now);
        match fetched {
            Ok(keys) => {
                self.keys = keys;
                self.fetched_at = Some(now);
                self.last_failure = None;
            }
            Err(err) => self.last_failure = Some(err.to_string()),
        }
    }
}

/// Turn a cache answer into a verification result. `Refresh` yields `None`.
fn settle(kid: &str, cached: CachedKey) -> Option<Result<DecodingKey, TokenError>> {
    match cached {
        CachedKey::Hit(key) => Some(Ok(key)),
        CachedKey::Stale(key) => {
            tracing::warn!(kid, "Serving signing key past its cache lifetime");
            Some(Ok(key))
        }
        CachedKey::Unknown => Some(Err(TokenError::UnknownKey(kid.to_string()))),
        CachedKey::Unavailable(err) => Some(Err(TokenError::KeySetUnavailable(err))),
        CachedKey::Refresh => None,
    }
}

pub struct FirebaseVerifier {
    http: reqwest::Client,
    config: FirebaseConfig,
    cache: RwLock<KeyCache>,
}

impl FirebaseVerifier {
    /// Create a verifier. Keys are fetched lazily on the first verification.
    pub fn new(config: FirebaseConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(KEY_FETCH_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            config,
            cache: RwLock::new(KeyCache::default()),
        }
    }

    /// Look up the decoding key for `kid`, refreshing the cached set when it
    /// is stale or does not contain the key.
    ///
    /// Only one refresh runs at a time; concurrent callers wait on the write
    /// lock and then reuse its result. If a refresh fails, a key that is
    /// still cached keeps being served.
    async fn key_for(&self, kid: &str) -> Result<DecodingKey, TokenError> {
        let max_age = Duration::from_secs(self.config.key_cache_secs);

        {
            let cache = self.cache.read().await;
            if let Some(result) = settle(kid, cache.lookup(kid, max_age, Instant::now())) {
                return result;
            }
        }

        let mut cache = self.cache.write().await;
        // Another request may have refreshed while we waited for the lock.
        if let Some(result) = settle(kid, cache.lookup(kid, max_age, Instant::now())) {
            return result;
        }

        let fetched = self.fetch_keys().await;
        if let Err(err) = &fetched {
            tracing::error!(error = %err, "Failed to fetch Firebase signing keys");
        }
        let now = Instant::now();
        cache.record(fetched, now);

        settle(kid, cache.lookup(kid, max_age, now))
            .unwrap_or_else(|| Err(TokenError::UnknownKey(kid.to_string())))
    }

    async fn fetch_keys(&self) -> Result<HashMap<String, DecodingKey>, TokenError> {
        tracing::info!(url = %self.config.jwks_url, "Fetching Firebase signing keys");

        let set: JwkSet = self
            .http
            .get(&self.config.jwks_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| TokenError::KeySetUnavailable(e.to_string()))?
            .json()
            .await
            .map_err(|e| TokenError::KeySetUnavailable(e.to_string()))?;

        let keys = parse_key_set(set);
        tracing::info!(count = keys.len(), "Loaded Firebase signing keys");
        Ok(keys)
    }
}

#[async_trait]
impl TokenVerifier for FirebaseVerifier {
    async fn verify_id_token(&self, token: &str) -> Result<VerifiedToken, TokenError> {
        let header = decode_header(token).map_err(classify)?;
        if header.alg != Algorithm::RS256 {
            return Err(TokenError::Invalid(format!(
                "unexpected algorithm {:?}",
                header.alg
            )));
        }
        let kid = header
            .kid
            .ok_or_else(|| TokenError::Invalid("missing kid in token header".into()))?;

        let key = self.key_for(&kid).await?;
        let validation = id_token_validation(&self.config, Algorithm::RS256);
        decode_id_token(token, &key, &validation)
    }
}

/// Keep the RSA keys of a JWK set, indexed by key id.
fn parse_key_set(set: JwkSet) -> HashMap<String, DecodingKey> {
    let mut keys = HashMap::new();
    for jwk in set.keys {
        if jwk.kty != "RSA" {
            continue;
        }
        let (Some(n), Some(e)) = (&jwk.n, &jwk.e) else {
            continue;
        };
        match DecodingKey::from_rsa_components(n, e) {
            Ok(key) => {
                keys.insert(jwk.kid, key);
            }
            Err(err) => tracing::warn!(kid = %jwk.kid, error = %err, "Skipping unparseable signing key"),
        }
    }
    keys
}

/// Validation rules for a Firebase ID token.
fn id_token_validation(config: &FirebaseConfig, algorithm: Algorithm) -> Validation {
    let mut validation = Validation::new(algorithm);
    validation.set_audience(&[&config.project_id]);
    validation.set_issuer(&[config.issuer()]);
    validation.set_required_spec_claims(&["exp", "iat", "aud", "iss", "sub"]);
    validation
}

fn decode_id_token(
    token: &str,
    key: &DecodingKey,
    validation: &Validation,
) -> Result<VerifiedToken, TokenError> {
    let data = decode::<IdTokenClaims>(token, key, validation).map_err(classify)?;
    if data.claims.sub.is_empty() {
        return Err(TokenError::Invalid("empty subject".into()));
    }
    Ok(VerifiedToken {
        uid: data.claims.sub,
    })
}

fn classify(err: jsonwebtoken::errors::Error) -> TokenError {
    match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid(err.to_string()),
    }
}
