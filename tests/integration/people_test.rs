//! Hierarchy pages and API error surfacing

use assert_matches::assert_matches;
use serde_json::json;
use serial_test::serial;
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, ResponseTemplate,
};
use PcbPoint::handlers::commands::people::{self, StudentForm};
use PcbPoint::models::{Role, UpdateStudentRequest};
use PcbPoint::PcbPointError;

use crate::helpers::*;

fn form(student_phone: &str) -> StudentForm {
    StudentForm {
        name: "Ishaan Verma".to_string(),
        class: "11".to_string(),
        platform: "PhysicsWallah".to_string(),
        student_phone: student_phone.to_string(),
        parent_phone: random_phone(),
        alternate_phone: None,
        group_mentor: None,
    }
}

#[tokio::test]
#[serial]
async fn test_group_mentor_adds_student_to_own_group() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::GroupMentor, false, false).await;

    Mock::given(method("POST"))
        .and(path("/api/add/student"))
        .and(body_partial_json(json!({
            "name": "Ishaan Verma",
            "groupMentorId": "groupMentor-1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "Student added" })))
        .expect(1)
        .mount(&ctx.mock.server)
        .await;

    let output = people::handle_add_student(&ctx.services, form(&random_phone())).await.unwrap();
    assert_eq!(output, "Student added\n");
}

#[tokio::test]
#[serial]
async fn test_invalid_phone_blocks_submit() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::Admin, false, false).await;
    ctx.mock.mock_json_expect("POST", "/api/add/student", json!({}), 0).await;

    let err = people::handle_add_student(&ctx.services, form("12345")).await.unwrap_err();
    assert_matches!(err, PcbPointError::InvalidInput(msg) if msg.contains("Student phone"));
}

#[tokio::test]
#[serial]
async fn test_missing_student() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::Admin, false, false).await;
    ctx.mock
        .mock_json("GET", "/api/detail/student/s9", 404, json!({ "message": "Not found" }))
        .await;

    let err = people::handle_student_detail(&ctx.services, "s9").await.unwrap_err();
    assert_matches!(&err, PcbPointError::StudentNotFound { student_id } if student_id == "s9");
    assert_eq!(err.user_message(), "No student with id s9");
}

#[tokio::test]
#[serial]
async fn test_server_error_message_reaches_user() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::Admin, false, false).await;
    ctx.mock
        .mock_json("GET", "/api/detail/supervisors", 500, json!({ "error": "Database unavailable" }))
        .await;

    let err = people::handle_staff_list(&ctx.services, Role::Supervisor).await.unwrap_err();
    assert_eq!(err.user_message(), "Database unavailable");
}

#[tokio::test]
#[serial]
async fn test_supervisor_adds_senior_mentor_under_self() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::Supervisor, false, false).await;

    Mock::given(method("POST"))
        .and(path("/api/add/seniorMentor"))
        .and(body_partial_json(json!({ "parentId": "supervisor-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&ctx.mock.server)
        .await;

    let output = people::handle_add_staff(
        &ctx.services,
        Role::SeniorMentor,
        "Neha Gupta".to_string(),
        "neha@pcbpoint.in".to_string(),
        random_phone(),
        "secret123".to_string(),
        None,
    )
    .await
    .unwrap();
    assert_eq!(output, "Senior Mentor Neha Gupta added\n");
}

#[tokio::test]
#[serial]
async fn test_staff_listing() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::Admin, false, false).await;
    ctx.mock
        .mock_json(
            "GET",
            "/api/detail/groupMentors",
            200,
            json!([user_json("gm-1", "groupMentor"), user_json("gm-2", "groupMentor")]),
        )
        .await;

    let output = people::handle_staff_list(&ctx.services, Role::GroupMentor).await.unwrap();
    assert!(output.contains("gm-1"));
    assert!(output.contains("gm-2"));
}

#[tokio::test]
#[serial]
async fn test_edit_student_sends_only_changed_fields() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::Admin, false, false).await;

    Mock::given(method("PATCH"))
        .and(path("/api/detail/student/s1"))
        .and(body_partial_json(json!({ "class": "12" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Student updated" })))
        .expect(1)
        .mount(&ctx.mock.server)
        .await;

    let request = UpdateStudentRequest {
        class: Some("12".to_string()),
        ..UpdateStudentRequest::default()
    };
    let output = people::handle_edit_student(&ctx.services, "s1", request).await.unwrap();
    assert_eq!(output, "Student updated\n");

    let requests = ctx.mock.server.received_requests().await.unwrap();
    let patch = requests.iter().find(|r| r.method.as_str() == "PATCH").unwrap();
    let body: serde_json::Value = serde_json::from_slice(&patch.body).unwrap();
    assert_eq!(body, json!({ "class": "12" }));

    let err = people::handle_edit_student(&ctx.services, "s1", UpdateStudentRequest::default())
        .await
        .unwrap_err();
    assert_matches!(err, PcbPointError::InvalidInput(_));
}

#[tokio::test]
#[serial]
async fn test_students_page_with_timestamped_fee_and_kit() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::Admin, false, false).await;

    let mut student = student_json("s1", "Arjun Mehta");
    student["fee"] = json!({
        "plan": { "tier": "Pro", "total": 12000, "installments": 3 },
        "payments": [{ "amount": 4000, "date": "2024-06-01T10:00:00.000Z" }]
    });
    student["kit"] = json!({ "ready": true, "dispatched": true, "dispatchedOn": "2024-06-05T08:00:00.000Z" });
    ctx.mock
        .mock_json("GET", "/api/detail/students", 200, json!({ "data": [student] }))
        .await;

    let output = people::handle_students(&ctx.services).await.unwrap();
    let row = output.lines().find(|l| l.starts_with("s1")).unwrap();
    assert!(row.contains("₹8,000 due"));
    assert!(row.contains("Dispatched"));
}

#[tokio::test]
#[serial]
async fn test_student_detail_with_unset_fee_plan() {
    let ctx = TestContext::new().await;
    ctx.login_as(Role::Admin, false, false).await;

    let mut student = student_json("s1", "Arjun Mehta");
    student["fee"] = json!({ "plan": { "tier": "Elite", "total": 0, "installments": 0 } });
    ctx.mock.mock_json("GET", "/api/detail/student/s1", 200, student).await;

    let output = people::handle_student_detail(&ctx.services, "s1").await.unwrap();
    assert!(output.starts_with("Arjun Mehta (s1)"));
    assert!(output.contains("Fee: Elite plan, invalid plan"));
}
