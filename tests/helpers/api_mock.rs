//! Mock PCB Point API server for testing
//!
//! Wraps a wiremock server with helpers for the endpoints most tests need.

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock API server for testing
pub struct ApiMockServer {
    pub server: MockServer,
}

impl ApiMockServer {
    /// Start a new mock API server
    pub async fn new() -> Self {
        Self { server: MockServer::start().await }
    }

    /// Base URL to point the client at
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Successful login for `role` handing out `token`
    pub async fn mock_login(&self, role: &str, token: &str) {
        Mock::given(method("POST"))
            .and(path(format!("/api/login/{}", role)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": token })))
            .mount(&self.server)
            .await;
    }

    /// `/api/me`, only answered when the bearer token matches
    pub async fn mock_me(&self, token: &str, user: Value) {
        Mock::given(method("GET"))
            .and(path("/api/me"))
            .and(header("authorization", format!("Bearer {}", token).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": user })))
            .mount(&self.server)
            .await;
    }

    /// `/api/me` expected to be called exactly `times` times
    pub async fn mock_me_expect(&self, token: &str, user: Value, times: u64) {
        Mock::given(method("GET"))
            .and(path("/api/me"))
            .and(header("authorization", format!("Bearer {}", token).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": user })))
            .expect(times)
            .named("me")
            .mount(&self.server)
            .await;
    }

    /// Supervisor feature permissions for the logged-in user
    pub async fn mock_permissions(&self, fee_management: bool, kit_dispatch: bool, times: u64) {
        Mock::given(method("GET"))
            .and(path("/api/role/get"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "FeeManagement": fee_management,
                "KitDispatch": kit_dispatch
            })))
            .expect(times)
            .named("permissions")
            .mount(&self.server)
            .await;
    }

    /// JSON response for any method and path
    pub async fn mock_json(&self, http_method: &str, api_path: &str, status: u16, body: Value) {
        Mock::given(method(http_method))
            .and(path(api_path))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// JSON response that must be hit exactly `times` times
    pub async fn mock_json_expect(&self, http_method: &str, api_path: &str, body: Value, times: u64) {
        Mock::given(method(http_method))
            .and(path(api_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(times)
            .named(format!("{} {}", http_method, api_path))
            .mount(&self.server)
            .await;
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }
}
