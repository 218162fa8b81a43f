//! Session state
//!
//! The shared client-side cells: the bearer token, the profile derived from
//! it (user, role, permissions) and the cached syllabus. Derived cells are
//! tagged with the token generation they were computed for and are ignored
//! once the token changes, so login and logout are the only writer paths.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::models::{LoginRequest, Permissions, Profile, Role, Syllabus};
use crate::services::auth::AuthService;
use crate::utils::errors::{PcbPointError, Result};
use crate::utils::helpers::{require_email, require_field};
use crate::utils::logging;
use super::storage::{token_expired, TokenStore};

#[derive(Debug, Default)]
struct TokenSlot {
    token: Option<String>,
    generation: u64,
}

/// Current bearer token plus a counter bumped on every change
#[derive(Debug, Clone, Default)]
pub struct TokenCell {
    inner: Arc<RwLock<TokenSlot>>,
}

impl TokenCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<String> {
        self.inner.read().await.token.clone()
    }

    pub async fn generation(&self) -> u64 {
        self.inner.read().await.generation
    }

    /// Replace the token and return the new generation
    pub async fn set(&self, token: Option<String>) -> u64 {
        let mut slot = self.inner.write().await;
        slot.token = token;
        slot.generation += 1;
        slot.generation
    }
}

/// A value computed for one token generation
#[derive(Debug, Clone)]
struct Derived<T> {
    generation: u64,
    value: T,
}

/// Login state and the values derived from it
#[derive(Debug)]
pub struct SessionState {
    auth: AuthService,
    store: TokenStore,
    token: TokenCell,
    profile: RwLock<Option<Derived<Profile>>>,
    syllabus: RwLock<Option<Derived<Syllabus>>>,
}

impl SessionState {
    pub fn new(auth: AuthService, store: TokenStore, token: TokenCell) -> Self {
        Self {
            auth,
            store,
            token,
            profile: RwLock::new(None),
            syllabus: RwLock::new(None),
        }
    }

    /// Pick up a token saved by an earlier run. Expired tokens are discarded.
    pub async fn restore(&self) -> Result<bool> {
        match self.store.load().await? {
            Some(token) if token_expired(&token) => {
                info!("Saved token has expired, logging out");
                self.store.clear().await?;
                self.token.set(None).await;
                Ok(false)
            }
            Some(token) => {
                self.token.set(Some(token)).await;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn is_logged_in(&self) -> bool {
        self.token.get().await.is_some()
    }

    /// Log in as `role` and resolve the profile for the new token
    pub async fn login(&self, role: Role, email: &str, password: &str) -> Result<Profile> {
        require_email(email)?;
        require_field("Password", password)?;

        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };

        let response = match self.auth.login(role, &request).await {
            Ok(response) => response,
            Err(e) => {
                logging::log_auth_event(role.as_str(), "login", false);
                return Err(e);
            }
        };

        if let Some(echoed) = response.role {
            if echoed != role {
                warn!(requested = %role, echoed = %echoed, "Login endpoint echoed a different role");
            }
        }

        self.store.save(&response.token).await?;
        self.token.set(Some(response.token)).await;
        logging::log_auth_event(role.as_str(), "login", true);

        self.profile().await
    }

    /// Forget the token and everything derived from it
    pub async fn logout(&self) -> Result<()> {
        self.store.clear().await?;
        self.token.set(None).await;
        *self.profile.write().await = None;
        *self.syllabus.write().await = None;
        logging::log_auth_event("-", "logout", true);
        Ok(())
    }

    /// The logged-in user's profile, fetched once per token
    pub async fn profile(&self) -> Result<Profile> {
        if self.token.get().await.is_none() {
            return Err(PcbPointError::NotLoggedIn);
        }
        let generation = self.token.generation().await;

        if let Some(cached) = self.profile.read().await.as_ref() {
            if cached.generation == generation {
                return Ok(cached.value.clone());
            }
        }

        debug!(generation = generation, "Resolving profile");
        let user = self.auth.me().await?;
        let permissions = if user.role == Role::Supervisor {
            self.auth.permissions().await?
        } else {
            Permissions::default()
        };
        let profile = Profile { user, permissions };

        // The token may have changed while we were fetching
        if self.token.generation().await == generation {
            *self.profile.write().await = Some(Derived { generation, value: profile.clone() });
        }

        Ok(profile)
    }

    /// Cached syllabus for the current token, if any
    pub async fn cached_syllabus(&self) -> Option<Syllabus> {
        let generation = self.token.generation().await;
        self.syllabus
            .read()
            .await
            .as_ref()
            .filter(|cached| cached.generation == generation)
            .map(|cached| cached.value.clone())
    }

    pub async fn store_syllabus(&self, syllabus: Syllabus) {
        let generation = self.token.generation().await;
        *self.syllabus.write().await = Some(Derived { generation, value: syllabus });
    }

    pub async fn invalidate_syllabus(&self) {
        *self.syllabus.write().await = None;
    }
}
