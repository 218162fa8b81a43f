//! Token storage implementation
//!
//! Persists the bearer token between runs in a single file, the CLI's
//! stand-in for browser local storage. A missing file means logged out.

use std::path::{Path, PathBuf};

use chrono::Utc;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::utils::errors::Result;

/// File-backed token store
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a new token store rooted at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved token, if any
    pub async fn load(&self) -> Result<Option<String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let token = contents.trim().to_string();
                if token.is_empty() {
                    debug!(path = %self.path.display(), "Token file is empty");
                    Ok(None)
                } else {
                    debug!(path = %self.path.display(), "Loaded saved token");
                    Ok(Some(token))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Save the token, creating parent directories as needed
    pub async fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, token).await?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            if let Err(e) = tokio::fs::set_permissions(&self.path, permissions).await {
                warn!(path = %self.path.display(), error = %e, "Could not restrict token file permissions");
            }
        }

        debug!(path = %self.path.display(), "Saved token");
        Ok(())
    }

    /// Forget the saved token
    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ExpiryClaims {
    #[serde(default)]
    exp: Option<i64>,
}

/// True when `token` is a JWT whose `exp` is in the past.
///
/// The signature is not checked; the server stays authoritative. Tokens that
/// are not JWTs, or carry no `exp`, are never considered expired here.
pub fn token_expired(token: &str) -> bool {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    match decode::<ExpiryClaims>(token, &DecodingKey::from_secret(&[]), &validation) {
        Ok(data) => data
            .claims
            .exp
            .map(|exp| exp <= Utc::now().timestamp())
            .unwrap_or(false),
        Err(_) => false,
    }
}
