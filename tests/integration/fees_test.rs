//! Fee management page

use assert_matches::assert_matches;
use serde_json::json;
use serial_test::serial;
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, ResponseTemplate,
};
use PcbPoint::handlers::commands::fees;
use PcbPoint::models::{FeeTier, Role};
use PcbPoint::PcbPointError;

use crate::helpers::*;

async fn mount_fee(ctx: &TestContext) {
    ctx.mock
        .mock_json(
            "GET",
            "/api/detail/fee/s1",
            200,
            json!({
                "studentId": "s1",
                "plan": { "tier": "Pro", "total": 30000, "installments": 3 },
                "payments": [
                    { "amount": 10000, "date": "2024-05-01", "mode": "UPI" },
                    { "amount": 15000, "date": "2024-06-01" }
                ]
            }),
        )
        .await;
}

#[tokio::test]
#[serial]
async fn test_fee_detail() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::Admin, false, false).await;
    mount_fee(&ctx).await;

    let output = fees::handle_fee_detail(&ctx.services, "s1").await.unwrap();
    assert!(output.starts_with("Pro plan, ₹30,000 in 3 installment(s)"));
    assert!(output.contains("#1: ₹10,000"));
    assert!(output.contains("UPI"));
    assert!(output.contains("Paid ₹25,000, outstanding ₹5,000 (next #3 ₹5,000)"));
}

#[tokio::test]
#[serial]
async fn test_overpayment_never_reaches_api() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::Admin, false, false).await;
    mount_fee(&ctx).await;
    ctx.mock.mock_json_expect("POST", "/api/add/payment", json!({}), 0).await;

    let err = fees::handle_payment(&ctx.services, "s1", 6000, Some("2024-06-10"), None, None)
        .await
        .unwrap_err();
    assert_matches!(err, PcbPointError::InvalidInput(msg) if msg.contains("exceeds"));
}

#[tokio::test]
#[serial]
async fn test_payment_is_recorded() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::Admin, false, false).await;
    mount_fee(&ctx).await;

    Mock::given(method("POST"))
        .and(path("/api/add/payment"))
        .and(body_partial_json(json!({
            "studentId": "s1",
            "payment": { "amount": 5000, "date": "2024-06-10", "mode": "Cash" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&ctx.mock.server)
        .await;

    let output = fees::handle_payment(
        &ctx.services,
        "s1",
        5000,
        Some("2024-06-10"),
        Some("Cash".to_string()),
        None,
    )
    .await
    .unwrap();
    assert_eq!(output, "Recorded ₹5,000 for s1\n");
}

#[tokio::test]
#[serial]
async fn test_plan_with_too_many_installments() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::Admin, false, false).await;
    ctx.mock
        .mock_json_expect("PATCH", "/api/detail/fee/s1/plan", json!({}), 0)
        .await;

    let err = fees::handle_set_plan(&ctx.services, "s1", FeeTier::Elite, 45000, 4)
        .await
        .unwrap_err();
    assert_matches!(err, PcbPointError::InvalidInput(_));
}

#[tokio::test]
#[serial]
async fn test_fee_list_shows_outstanding() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::Supervisor, true, false).await;
    ctx.mock
        .mock_json(
            "GET",
            "/api/detail/fees",
            200,
            json!({ "data": [
                { "studentId": "s1", "plan": { "tier": "Max", "total": 20000, "installments": 2 },
                  "payments": [{ "amount": 20000, "date": "2024-05-01" }] },
                { "studentId": "s2", "plan": { "tier": "Elite", "total": 12000, "installments": 1 } }
            ] }),
        )
        .await;

    let output = fees::handle_fee_list(&ctx.services).await.unwrap();
    let s1 = output.lines().find(|l| l.starts_with("s1")).unwrap();
    assert!(s1.ends_with("cleared"));
    let s2 = output.lines().find(|l| l.starts_with("s2")).unwrap();
    assert!(s2.contains("next #1 ₹12,000"));
}

#[tokio::test]
#[serial]
async fn test_fee_list_keeps_going_past_unset_plan() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::Admin, false, false).await;
    ctx.mock
        .mock_json(
            "GET",
            "/api/detail/fees",
            200,
            json!({ "data": [
                { "studentId": "s1", "plan": { "tier": "Pro", "total": 0, "installments": 0 } },
                { "studentId": "s2", "plan": { "tier": "Pro", "total": 12000, "installments": 3 },
                  "payments": [{ "amount": 4000, "date": "2024-06-01T10:00:00.000Z" }] }
            ] }),
        )
        .await;

    let output = fees::handle_fee_list(&ctx.services).await.unwrap();
    let s1 = output.lines().find(|l| l.starts_with("s1")).unwrap();
    assert!(s1.ends_with("invalid plan"));
    let s2 = output.lines().find(|l| l.starts_with("s2")).unwrap();
    assert!(s2.contains("₹4,000"));
    assert!(s2.contains("next #2 ₹4,000"));
}
