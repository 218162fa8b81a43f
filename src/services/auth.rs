//! Authentication service implementation
//!
//! Login per role, identity lookup and supervisor feature permissions.

use tracing::{debug, info};

use crate::models::{LoginRequest, LoginResponse, Permissions, Role, User};
use crate::services::api::{segment, Ack, ApiClient};
use crate::utils::errors::Result;

/// Authentication service for the PCB Point API
#[derive(Clone, Debug)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Exchange credentials for a bearer token
    pub async fn login(&self, role: Role, request: &LoginRequest) -> Result<LoginResponse> {
        debug!(role = %role, "Logging in");
        self.api.post(&format!("/api/login/{}", role.as_str()), request).await
    }

    /// The user the current token belongs to
    pub async fn me(&self) -> Result<User> {
        self.api.get("/api/me").await
    }

    /// Feature permissions of the current supervisor
    pub async fn permissions(&self) -> Result<Permissions> {
        self.api.get("/api/role/get").await
    }

    /// Feature permissions of a given supervisor (admin only)
    pub async fn permissions_for(&self, supervisor_id: &str) -> Result<Permissions> {
        self.api.get(&format!("/api/role/get/{}", segment(supervisor_id))).await
    }

    /// Grant or revoke supervisor feature permissions (admin only)
    pub async fn set_permissions(&self, supervisor_id: &str, permissions: Permissions) -> Result<Ack> {
        info!(
            supervisor_id = supervisor_id,
            fee_management = permissions.fee_management,
            kit_dispatch = permissions.kit_dispatch,
            "Updating supervisor permissions"
        );
        self.api
            .patch(&format!("/api/role/set/{}", segment(supervisor_id)), &permissions)
            .await
    }
}
