//! Syllabus page and its session cache

use serde_json::json;
use serial_test::serial;
use PcbPoint::handlers::commands::syllabus;
use PcbPoint::models::Role;

use crate::helpers::*;

#[tokio::test]
#[serial]
async fn test_syllabus_fetched_once_and_updated_in_place() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::GroupMentor, false, false).await;
    ctx.mock
        .mock_json_expect("GET", "/api/syllabus/get", syllabus_json(), 1)
        .await;
    ctx.mock
        .mock_json_expect("PATCH", "/api/syllabus/topic/t2", json!({ "message": "Topic updated" }), 1)
        .await;

    let first = syllabus::handle_syllabus(&ctx.services).await.unwrap();
    assert!(first.starts_with("Progress: 1/3 topics"));
    assert!(first.contains("[ ] Mirrors (t2)"));

    let ack = syllabus::handle_topic(&ctx.services, "t2", true).await.unwrap();
    assert_eq!(ack, "Topic updated\n");

    let second = syllabus::handle_syllabus(&ctx.services).await.unwrap();
    assert!(second.starts_with("Progress: 2/3 topics"));
    assert!(second.contains("[x] Mirrors (t2)"));
}

#[tokio::test]
#[serial]
async fn test_syllabus_refetched_after_relogin() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::GroupMentor, false, false).await;
    ctx.mock
        .mock_json_expect("GET", "/api/syllabus/get", syllabus_json(), 2)
        .await;

    ctx.services.syllabus_service.syllabus().await.unwrap();
    ctx.services.session.logout().await.unwrap();
    ctx.services
        .session
        .login(Role::GroupMentor, "groupMentor-1@pcbpoint.in", "secret123")
        .await
        .unwrap();
    ctx.services.syllabus_service.syllabus().await.unwrap();
}

#[tokio::test]
#[serial]
async fn test_syllabus_cache_disabled() {
    let ctx = TestContext::new_with_config(TestConfig {
        syllabus_cache: false,
        ..TestConfig::default()
    })
    .await;
    ctx.login_as(Role::Admin, false, false).await;
    ctx.mock
        .mock_json_expect("GET", "/api/syllabus/get", syllabus_json(), 2)
        .await;

    syllabus::handle_syllabus(&ctx.services).await.unwrap();
    syllabus::handle_syllabus(&ctx.services).await.unwrap();
}
