//! Client Integration Tests
//!
//! Exercise ApiClient against the scripted transport.

use chrono::NaiveDate;
use serde_json::json;

use crate::api::mock::{ok, MockTransport};
use crate::api::{login, ApiClient, ListQuery, Method, RequestBody};
use crate::domain::*;
use crate::error::{ApiError, INVALID_CREDENTIALS_MESSAGE};
use crate::session::{Role, Session, TenantContext};

fn session(role: Role, selected: Option<&str>) -> Session {
    Session {
        access_token: Some("secret".into()),
        role,
        user_id: Some("7".into()),
        organization_id: Some("3".into()),
        selected_admin_id: selected.map(str::to_string),
        ..Default::default()
    }
}

fn client(transport: &MockTransport, role: Role, selected: Option<&str>) -> ApiClient<MockTransport> {
    let ctx = TenantContext::from_session(&session(role, selected)).expect("signed in");
    ApiClient::new(transport.clone(), ctx)
}

#[tokio::test]
async fn test_list_sends_bearer_and_query() {
    let transport = MockTransport::fixed(200, r#"{"status": 200, "data": {"results": [], "count": 0, "next": null, "previous": null}}"#);
    let api = client(&transport, Role::Admin, None);

    let query = ListQuery::paged(10).with_search("ravi");
    let page = api.list::<Contact>(&query).await.expect("list");
    assert!(page.is_empty());

    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].path, "contact-list-create/7/");
    assert_eq!(sent[0].bearer.as_deref(), Some("secret"));
    assert!(sent[0].query.contains(&("search".to_string(), "ravi".to_string())));
}

#[tokio::test]
async fn test_organization_uses_selected_admin() {
    let transport = MockTransport::fixed(200, r#"{"status": true, "data": []}"#);
    let api = client(&transport, Role::Organization, Some("42"));
    api.list::<LeavePolicy>(&ListQuery::default()).await.expect("list");
    assert_eq!(transport.requests()[0].path, "leave-policies/42/");
}

#[tokio::test]
async fn test_no_selected_admin_blocks_request() {
    let transport = MockTransport::fixed(200, r#"{"status": true, "data": []}"#);
    let api = client(&transport, Role::Organization, None);

    assert_eq!(api.list::<Contact>(&ListQuery::default()).await, Err(ApiError::NoTenant));
    assert_eq!(api.list_employees().await, Err(ApiError::NoTenant));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_admin_role_ignores_selection() {
    let transport = MockTransport::fixed(200, r#"{"status": true, "data": []}"#);
    let api = client(&transport, Role::Admin, Some("42"));
    api.list::<Shift>(&ListQuery::default()).await.expect("list");
    assert_eq!(transport.requests()[0].path, "shifts/7/");
}

#[tokio::test]
async fn test_invalid_visit_never_sent() {
    let transport = MockTransport::fixed(201, r#"{"status": 201}"#);
    let api = client(&transport, Role::Admin, None);

    let draft = VisitDraft { title: "Site survey".into(), address: "Dock 4".into(), ..Default::default() };
    let err = api.create::<Visit>(&draft).await.unwrap_err();
    assert_eq!(err.user_message(), "Please select a schedule date");
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_invalid_location_never_sent() {
    let transport = MockTransport::fixed(201, r#"{"status": 201}"#);
    let api = client(&transport, Role::Admin, None);

    let draft = LocationDraft {
        name: "Pole".into(),
        latitude: Some(91.0),
        longitude: Some(0.0),
        ..Default::default()
    };
    assert!(matches!(api.create::<Location>(&draft).await, Err(ApiError::Validation(_))));

    let draft = LocationDraft { latitude: Some(0.0), longitude: Some(-180.5), ..draft };
    assert!(matches!(api.update::<Location>(1, &draft).await, Err(ApiError::Validation(_))));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_error_body_message_surfaces() {
    let transport = MockTransport::fixed(400, r#"{"status": 400, "message": "Phone number already exists"}"#);
    let api = client(&transport, Role::Admin, None);

    let draft = ContactDraft { name: "Ravi".into(), phone: "98450".into(), ..Default::default() };
    let err = api.create::<Contact>(&draft).await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 400, message: Some("Phone number already exists".into()) });
    assert_eq!(err.user_message(), "Phone number already exists");
}

#[tokio::test]
async fn test_unauthorized() {
    let transport = MockTransport::fixed(401, r#"{"detail": "Given token not valid"}"#);
    let api = client(&transport, Role::Admin, None);
    let err = api.delete::<Shift>(3).await.unwrap_err();
    assert!(err.requires_login());
    assert_eq!(transport.requests()[0].method, Method::Delete);
    assert_eq!(transport.requests()[0].path, "shifts/7/3/");
}

#[tokio::test]
async fn test_visit_check_in_posts_coordinates() {
    let transport = MockTransport::fixed(200, r#"{"status": 200, "message": "Checked in"}"#);
    let api = client(&transport, Role::Organization, Some("42"));

    let ack = api
        .visit_check_in(11, Coordinates { latitude: 12.97, longitude: 77.59 })
        .await
        .expect("check in");
    assert_eq!(ack.message.as_deref(), Some("Checked in"));

    let sent = &transport.requests()[0];
    assert_eq!(sent.path, "visit-check-in/42/7/11/");
    assert_eq!(sent.body, RequestBody::Json(json!({"latitude": 12.97, "longitude": 77.59})));
}

#[tokio::test]
async fn test_check_out_rejects_bad_fix() {
    let transport = MockTransport::fixed(200, "{}");
    let api = client(&transport, Role::Admin, None);
    let result = api.visit_check_out(11, Coordinates { latitude: 0.0, longitude: 200.0 }).await;
    assert!(matches!(result, Err(ApiError::Validation(_))));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_leave_decision_is_patch() {
    let transport = MockTransport::fixed(200, r#"{"status": 200, "message": "Leave approved"}"#);
    let api = client(&transport, Role::Admin, None);
    let update = LeaveStatusUpdate { status: LeaveStatus::Approved, remarks: None };
    api.set_leave_status(5, &update).await.expect("approve");
    let sent = &transport.requests()[0];
    assert_eq!(sent.method, Method::Patch);
    assert_eq!(sent.path, "leave-applications/7/5/");
}

#[tokio::test]
async fn test_attendance_date_filter() {
    let transport = MockTransport::new(|_| {
        ok(json!({"status": 200, "data": [
            {"id": 1, "employee_name": "Asha", "date": "2024-02-01", "check_in": "09:00", "status": "present"}
        ]}))
    });
    let api = client(&transport, Role::Admin, None);
    let query = ListQuery::default().with_range(NaiveDate::from_ymd_opt(2024, 2, 1), NaiveDate::from_ymd_opt(2024, 2, 29));
    let page = api.list_attendance(&query).await.expect("attendance");
    assert_eq!(page.results[0].employee_name, "Asha");
    let sent = &transport.requests()[0];
    assert!(sent.query.contains(&("end_date".to_string(), "2024-02-29".to_string())));
}

#[tokio::test]
async fn test_login() {
    let transport = MockTransport::new(|req| {
        assert_eq!(req.path, "login/");
        assert!(req.bearer.is_none());
        ok(json!({"status": 200, "data": {"access": "a", "refresh": "r", "role": "organization", "user_id": 1, "organization_id": 3}}))
    });
    let creds = Credentials { email: "o@example.com".into(), password: "pw".into() };
    let data = login(&transport, &creds).await.expect("login");
    let session = Session::from_login(&data);
    assert!(session.role.is_organization());
    assert_eq!(session.organization_id.as_deref(), Some("3"));
}

#[tokio::test]
async fn test_login_requires_fields() {
    let transport = MockTransport::fixed(200, "{}");
    let err = login(&transport, &Credentials::default()).await.unwrap_err();
    assert_eq!(err.user_message(), "Please enter your email");
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_login_bad_credentials_keep_session() {
    let creds = Credentials { email: "o@example.com".into(), password: "wrong".into() };

    let err = login(&MockTransport::fixed(401, ""), &creds).await.unwrap_err();
    assert!(!err.requires_login());
    assert_eq!(err.user_message(), INVALID_CREDENTIALS_MESSAGE);

    let transport = MockTransport::fixed(401, r#"{"status": 401, "message": "Invalid password"}"#);
    let err = login(&transport, &creds).await.unwrap_err();
    assert!(!err.requires_login());
    assert_eq!(err.user_message(), "Invalid password");
}
