//! Call records page

use chrono::NaiveDate;
use serde_json::json;
use serial_test::serial;
use wiremock::{
    matchers::{body_partial_json, method, path, query_param},
    Mock, ResponseTemplate,
};
use PcbPoint::handlers::commands::calls;
use PcbPoint::models::{CallStatus, Role};

use crate::helpers::*;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

async fn mount_week(ctx: &TestContext) {
    Mock::given(method("GET"))
        .and(path("/api/call/records"))
        .and(query_param("from", "2024-06-03"))
        .and(query_param("to", "2024-06-09"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "studentId": "s1", "date": "2024-06-03", "status": "Scheduled" },
            { "studentId": "s1", "date": "2024-06-03T11:15:00.000Z", "status": "Done" },
            { "studentId": "s1", "date": "2024-06-04", "status": "DNP", "kind": "parent" },
            { "studentId": "s2", "date": "2024-06-07", "status": "Scheduled" }
        ])))
        .expect(1)
        .mount(&ctx.mock.server)
        .await;
}

#[tokio::test]
#[serial]
async fn test_week_grid_from_records() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::GroupMentor, false, false).await;
    mount_week(&ctx).await;

    let grid = ctx.services.call_service.week_grid(day(5)).await.unwrap();

    assert_eq!(grid.week_start(), day(3));
    assert_eq!(grid.status("s1", day(3)), CallStatus::Done);
    assert_eq!(grid.status("s1", day(4)), CallStatus::DidNotPick);
    assert_eq!(grid.status("s2", day(7)), CallStatus::Scheduled);
    assert_eq!(grid.status("s2", day(3)), CallStatus::Nothing);
    assert_eq!(grid.status("s9", day(3)), CallStatus::Nothing);

    let summary = grid.summary();
    assert_eq!(summary.done, 1);
    assert_eq!(summary.did_not_pick, 1);
    assert_eq!(summary.scheduled, 1);
    assert_eq!(summary.nothing, 11);
}

#[tokio::test]
#[serial]
async fn test_week_page_lists_students() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::GroupMentor, false, false).await;
    mount_week(&ctx).await;
    ctx.mock
        .mock_json(
            "GET",
            "/api/detail/students",
            200,
            json!({ "data": [student_json("s1", "Arjun Mehta"), student_json("s3", "Kavya Rao")] }),
        )
        .await;

    let output = calls::handle_week(&ctx.services, Some("2024-06-05")).await.unwrap();

    assert!(output.starts_with("Week of 2024-06-03 (prev 2024-05-27, next 2024-06-10)"));
    assert!(output.contains("Mon 03"));
    assert!(output.contains("Sun 09"));
    assert!(output.contains("Arjun Mehta"));
    assert!(output.contains("Kavya Rao"));
    // s2 has events but is not in the listing
    assert!(output.lines().any(|l| l.starts_with("s2")));
    // s1, s2 and s3 each get a full week of cells
    let rows = output.lines().filter(|l| l.starts_with("Arjun") || l.starts_with("Kavya") || l.starts_with("s2"));
    assert_eq!(rows.count(), 3);
    assert!(output.ends_with("1 done, 1 not picked, 1 scheduled, 18 empty\n"));
}

#[tokio::test]
#[serial]
async fn test_set_call_status() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::GroupMentor, false, false).await;

    Mock::given(method("PATCH"))
        .and(path("/api/call/update"))
        .and(body_partial_json(json!({
            "studentId": "s1",
            "date": "2024-06-04",
            "status": "DNP",
            "kind": "parent",
            "remark": "Busy"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Call updated" })))
        .expect(1)
        .mount(&ctx.mock.server)
        .await;

    let output = calls::handle_set(
        &ctx.services,
        "s1",
        "2024-06-04",
        CallStatus::DidNotPick,
        true,
        Some("Busy".to_string()),
    )
    .await
    .unwrap();
    assert_eq!(output, "Call updated\n");
}

#[tokio::test]
#[serial]
async fn test_bad_date_is_rejected() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::Admin, false, false).await;

    let err = calls::handle_week(&ctx.services, Some("05/06/2024")).await.unwrap_err();
    assert!(matches!(err, PcbPoint::PcbPointError::InvalidInput(_)));
}
