//! Route guard and role-filtered navigation

use assert_matches::assert_matches;
use serde_json::json;
use serial_test::serial;
use PcbPoint::handlers::commands::{fees, kits, people, salary};
use PcbPoint::handlers::{handle_command, Command};
use PcbPoint::models::Role;
use PcbPoint::PcbPointError;

use crate::helpers::*;

#[tokio::test]
#[serial]
async fn test_group_mentor_cannot_open_fees() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::GroupMentor, false, false).await;
    ctx.mock.mock_json_expect("GET", "/api/detail/fees", json!([]), 0).await;

    let err = fees::handle_fee_list(&ctx.services).await.unwrap_err();
    assert_matches!(err, PcbPointError::PermissionDenied(_));
}

#[tokio::test]
#[serial]
async fn test_supervisor_pages_follow_permissions() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::Supervisor, true, false).await;
    ctx.mock.mock_json_expect("GET", "/api/detail/fees", json!([]), 1).await;
    ctx.mock.mock_json_expect("GET", "/api/detail/kits", json!([]), 0).await;

    let output = fees::handle_fee_list(&ctx.services).await.unwrap();
    assert_eq!(output, "No fee records\n");

    let err = kits::handle_kits(&ctx.services).await.unwrap_err();
    assert_matches!(err, PcbPointError::PermissionDenied(_));

    let nav = handle_command(&ctx.services, Command::Nav).await.unwrap();
    assert!(nav.contains("Fee Management"));
    assert!(!nav.contains("Kit Dispatch"));
    assert!(!nav.contains("Roles & Permissions"));
}

#[tokio::test]
#[serial]
async fn test_permission_links_flag_off_hides_gated_pages() {
    let ctx = TestContext::new_with_config(TestConfig {
        permission_links: false,
        ..TestConfig::default()
    })
    .await;
    ctx.login_as(Role::Supervisor, true, true).await;

    let err = fees::handle_fee_list(&ctx.services).await.unwrap_err();
    assert_matches!(err, PcbPointError::PermissionDenied(_));

    let nav = handle_command(&ctx.services, Command::Nav).await.unwrap();
    assert!(!nav.contains("Fee Management"));
}

#[tokio::test]
#[serial]
async fn test_admin_sees_everything() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::Admin, false, false).await;

    let nav = handle_command(&ctx.services, Command::Nav).await.unwrap();
    for label in ["Supervisors", "Fee Management", "Kit Dispatch", "Tickets", "Roles & Permissions"] {
        assert!(nav.contains(label), "missing {}", label);
    }
    assert!(!nav.contains("Raise Ticket"));
}

#[tokio::test]
#[serial]
async fn test_only_admin_marks_salary_paid() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::GroupMentor, false, false).await;
    ctx.mock
        .mock_json_expect("PATCH", "/api/salary/paid/sal-1", json!({}), 0)
        .await;

    let err = salary::handle_mark_paid(&ctx.services, "sal-1").await.unwrap_err();
    assert_matches!(err, PcbPointError::PermissionDenied(_));
}

#[tokio::test]
#[serial]
async fn test_senior_mentor_cannot_list_supervisors() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::SeniorMentor, false, false).await;

    let err = people::handle_staff_list(&ctx.services, Role::Supervisor).await.unwrap_err();
    assert_matches!(err, PcbPointError::PermissionDenied(_));
}
