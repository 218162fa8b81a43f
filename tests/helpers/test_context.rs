//! Test context for unified test setup
//!
//! Starts a mock API, points a fresh [`ServiceFactory`] at it and keeps the
//! token file in a temporary directory.

use std::path::PathBuf;

use tempfile::TempDir;
use PcbPoint::{
    config::Settings,
    models::{Profile, Role},
    services::ServiceFactory,
};

use super::{api_mock::ApiMockServer, init_test_logging, test_data::user_json};

/// Configuration for test context setup
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub permission_links: bool,
    pub syllabus_cache: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            permission_links: true,
            syllabus_cache: true,
        }
    }
}

/// Unified test context that manages all test components
pub struct TestContext {
    pub mock: ApiMockServer,
    pub settings: Settings,
    pub services: ServiceFactory,
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with default configuration
    pub async fn new() -> Self {
        Self::new_with_config(TestConfig::default()).await
    }

    /// Create a new test context with custom configuration
    pub async fn new_with_config(config: TestConfig) -> Self {
        init_test_logging();

        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mock = ApiMockServer::new().await;

        let mut settings = Settings::default();
        settings.api.base_url = mock.uri();
        settings.api.timeout_seconds = 5;
        settings.session.token_path = temp_dir.path().join("session").join("token");
        settings.features.permission_links = config.permission_links;
        settings.features.syllabus_cache = config.syllabus_cache;

        let services = ServiceFactory::new(settings.clone()).expect("Failed to build services");

        Self { mock, settings, services, temp_dir }
    }

    /// A second factory sharing this context's settings, as a fresh process would build
    pub fn fresh_services(&self) -> ServiceFactory {
        ServiceFactory::new(self.settings.clone()).expect("Failed to build services")
    }

    pub fn token_path(&self) -> PathBuf {
        self.settings.session.token_path.clone()
    }

    /// Log in as `role`, mounting the login, profile and permission endpoints
    pub async fn login_as(&self, role: Role, fee_management: bool, kit_dispatch: bool) -> Profile {
        let token = format!("token-{}", role.as_str());
        let user_id = format!("{}-1", role.as_str());

        self.mock.mock_login(role.as_str(), &token).await;
        self.mock.mock_me(&token, user_json(&user_id, role.as_str())).await;
        let permission_calls = if role == Role::Supervisor { 1 } else { 0 };
        self.mock
            .mock_permissions(fee_management, kit_dispatch, permission_calls)
            .await;

        self.services
            .session
            .login(role, &format!("{}@pcbpoint.in", user_id), "secret123")
            .await
            .expect("Login should succeed")
    }
}
