//! Authentication middleware
//!
//! Route guard in front of every page: resolves the session profile and
//! checks the page against the role-filtered navigation.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::{Permissions, Profile, Role};
use crate::navigation;
use crate::state::SessionState;
use crate::utils::errors::{PcbPointError, Result};

/// Authentication middleware
#[derive(Clone, Debug)]
pub struct AuthMiddleware {
    session: Arc<SessionState>,
    permission_links: bool,
}

impl AuthMiddleware {
    /// Create a new AuthMiddleware instance.
    ///
    /// With `permission_links` off, supervisor feature permissions never
    /// unlock extra pages.
    pub fn new(session: Arc<SessionState>, permission_links: bool) -> Self {
        Self { session, permission_links }
    }

    /// Permissions that count for navigation
    pub fn effective_permissions<'a>(&self, profile: &'a Profile) -> Option<&'a Permissions> {
        if self.permission_links {
            Some(&profile.permissions)
        } else {
            None
        }
    }

    /// Check that the logged-in user may open `path`
    pub async fn require_page(&self, path: &str) -> Result<Profile> {
        let profile = self.session.profile().await?;
        check_page(&profile, self.effective_permissions(&profile), path)?;
        Ok(profile)
    }

    /// Check that the logged-in user holds one of `roles`
    pub async fn require_role(&self, roles: &[Role]) -> Result<Profile> {
        let profile = self.session.profile().await?;
        if roles.contains(&profile.role()) {
            debug!(role = %profile.role(), "Role check passed");
            Ok(profile)
        } else {
            warn!(role = %profile.role(), required = ?roles, "Role check failed");
            Err(PcbPointError::PermissionDenied(format!(
                "{} accounts cannot do this",
                profile.role()
            )))
        }
    }

    /// Navigation for the logged-in user
    pub async fn navigation(&self) -> Result<(Profile, Vec<navigation::NavLink>)> {
        let profile = self.session.profile().await?;
        let links = navigation::visible_links(profile.role(), self.effective_permissions(&profile));
        Ok((profile, links))
    }
}

/// Guard decision for an already resolved profile
pub fn check_page(profile: &Profile, permissions: Option<&Permissions>, path: &str) -> Result<()> {
    if navigation::can_access(profile.role(), permissions, path) {
        debug!(user_id = %profile.user.id, path = path, "Page access granted");
        Ok(())
    } else {
        warn!(user_id = %profile.user.id, role = %profile.role(), path = path, "Unauthorized page access attempt");
        Err(PcbPointError::PermissionDenied(format!(
            "{} accounts cannot open {}",
            profile.role(),
            path
        )))
    }
}
