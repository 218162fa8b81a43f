//! Role-based navigation
//!
//! Decides which pages a user sees. Base links are filtered by role; links
//! gated on a supervisor feature permission are appended after them when the
//! user is a supervisor holding that permission. The same result backs the
//! route guard, so a page is reachable exactly when it is listed.

pub mod links;

pub use links::{NavLink, GatedLink, Feature, NAV_LINKS, GATED_LINKS};

use crate::models::{Permissions, Role};

impl Permissions {
    pub fn has(&self, feature: Feature) -> bool {
        match feature {
            Feature::FeeManagement => self.fee_management,
            Feature::KitDispatch => self.kit_dispatch,
        }
    }
}

/// Filter an arbitrary link table for a role.
///
/// `permissions` is only consulted for supervisors; `None` means no feature
/// permission is granted.
pub fn filter_links(
    role: Role,
    base: &[NavLink],
    gated: &[GatedLink],
    permissions: Option<&Permissions>,
) -> Vec<NavLink> {
    let mut visible: Vec<NavLink> = base.iter().filter(|l| l.allows(role)).copied().collect();

    if role == Role::Supervisor {
        if let Some(permissions) = permissions {
            for entry in gated {
                if permissions.has(entry.feature) && entry.link.allows(role) {
                    visible.push(entry.link);
                }
            }
        }
    }

    visible
}

/// Navigation for a role using the built-in link table
pub fn visible_links(role: Role, permissions: Option<&Permissions>) -> Vec<NavLink> {
    filter_links(role, NAV_LINKS, GATED_LINKS, permissions)
}

/// Whether a role may open the page at `path`
pub fn can_access(role: Role, permissions: Option<&Permissions>, path: &str) -> bool {
    visible_links(role, permissions).iter().any(|l| l.path == path)
}
