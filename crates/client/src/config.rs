use std::path::PathBuf;

use showcase_core::access_gate::AccessGate;

/// Errors from [`ClientConfig::from_env`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SHOWCASE_API_URL is not a valid http(s) URL: {0}")]
    InvalidApiUrl(String),

    #[error("ACCESS_CODE_HASH must be a 64-character hex SHA-256 digest")]
    InvalidAccessHash,
}

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the store, without the `/api` suffix.
    pub api_url: String,
    /// Hex SHA-256 digest accepted by the access gate. `None` keeps the
    /// add-project form locked.
    pub access_code_hash: Option<String>,
    /// Where [`crate::ClientState`] is persisted. `None` keeps it in memory,
    /// so the cooldown resets on restart.
    pub state_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Load configuration from the environment.
    ///
    /// | Env Var               | Default                 |
    /// |-----------------------|-------------------------|
    /// | `SHOWCASE_API_URL`    | `http://localhost:3000` |
    /// | `ACCESS_CODE_HASH`    | unset                   |
    /// | `SHOWCASE_STATE_FILE` | unset                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::new(
            std::env::var("SHOWCASE_API_URL").unwrap_or_else(|_| "http://localhost:3000".into()),
            std::env::var("ACCESS_CODE_HASH").ok(),
        )?;
        let state_file = std::env::var("SHOWCASE_STATE_FILE")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self { state_file, ..config })
    }

    /// Validate and build a configuration from explicit values.
    pub fn new(api_url: String, access_code_hash: Option<String>) -> Result<Self, ConfigError> {
        match reqwest::Url::parse(&api_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ConfigError::InvalidApiUrl(api_url)),
        }

        let access_code_hash = access_code_hash
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty());
        if let Some(hash) = &access_code_hash {
            if hash.len() != 64 || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ConfigError::InvalidAccessHash);
            }
        }

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            access_code_hash,
            state_file: None,
        })
    }

    pub fn access_gate(&self) -> Option<AccessGate> {
        self.access_code_hash.as_deref().map(AccessGate::new)
    }
}
