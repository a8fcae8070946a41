//! End-to-end coverage of the event endpoints through the router.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use calbook_server::app;
use calbook_server::state::AppState;

fn test_app() -> Router {
    app(AppState::new())
}

async fn request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    let request = match body {
        Some(json) => builder.body(Body::from(json.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn standup(start: &str, end: &str, attendees: &[&str]) -> Value {
    json!({
        "title": "Standup",
        "description": "Daily sync",
        "location": "Room A",
        "organizer": "manager@x.com",
        "start_time": start,
        "end_time": end,
        "attendees": attendees,
    })
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = test_app();

    let (status, created) = request(
        &app,
        "POST",
        "/events",
        Some(standup("2024-01-10T09:00:00", "2024-01-10T09:30:00", &["a@x.com"])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["success"], json!(true));

    let id = created["event"]["event_id"].as_str().unwrap();
    assert!(id.starts_with("event_"));
    assert_eq!(created["event"]["status"], json!("scheduled"));

    let (status, fetched) = request(&app, "GET", &format!("/events/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], json!("Standup"));
    assert_eq!(fetched["start_time"], json!("2024-01-10T09:00:00"));
}

#[tokio::test]
async fn test_create_conflict_names_existing_event() {
    let app = test_app();

    let (_, first) = request(
        &app,
        "POST",
        "/events",
        Some(standup("2024-01-10T09:00:00", "2024-01-10T09:30:00", &["a@x.com"])),
    )
    .await;
    assert_eq!(first["success"], json!(true));

    // Overlapping interval, shared attendee: rejected with the first title.
    let (status, second) = request(
        &app,
        "POST",
        "/events",
        Some(standup("2024-01-10T09:15:00", "2024-01-10T09:45:00", &["a@x.com"])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["success"], json!(false));
    let message = second["message"].as_str().unwrap();
    assert!(message.contains("Schedule conflicts detected"));
    assert!(message.contains("'Standup'"));
    assert!(message.contains("a@x.com"));

    // Same interval, disjoint attendees: fine.
    let (_, third) = request(
        &app,
        "POST",
        "/events",
        Some(standup("2024-01-10T09:15:00", "2024-01-10T09:45:00", &["b@x.com"])),
    )
    .await;
    assert_eq!(third["success"], json!(true));
}

#[tokio::test]
async fn test_create_invalid_interval_is_a_business_error() {
    let app = test_app();

    let (status, response) = request(
        &app,
        "POST",
        "/events",
        Some(standup("2024-01-10T10:00:00", "2024-01-10T09:00:00", &[])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["success"], json!(false));
    assert!(
        response["message"]
            .as_str()
            .unwrap()
            .contains("Invalid time interval")
    );
}

#[tokio::test]
async fn test_get_missing_returns_sentinel() {
    let app = test_app();

    let (status, fetched) = request(&app, "GET", "/events/event_missing", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["status"], json!("not_found"));
    assert_eq!(fetched["event_id"], json!("event_missing"));
    assert_eq!(fetched["title"], json!(""));
}

#[tokio::test]
async fn test_update_and_update_missing() {
    let app = test_app();

    let (_, created) = request(
        &app,
        "POST",
        "/events",
        Some(standup("2024-01-10T09:00:00", "2024-01-10T09:30:00", &["a@x.com"])),
    )
    .await;
    let id = created["event"]["event_id"].as_str().unwrap();

    let mut updated_body = standup("2024-01-10T10:00:00", "2024-01-10T10:30:00", &["a@x.com"]);
    updated_body["title"] = json!("Renamed standup");
    let (_, updated) = request(&app, "PUT", &format!("/events/{id}"), Some(updated_body)).await;
    assert_eq!(updated["success"], json!(true));
    assert_eq!(updated["event"]["title"], json!("Renamed standup"));
    assert_eq!(updated["event"]["status"], json!("scheduled"));

    let (_, missing) = request(
        &app,
        "PUT",
        "/events/event_missing",
        Some(standup("2024-01-10T09:00:00", "2024-01-10T09:30:00", &[])),
    )
    .await;
    assert_eq!(missing["success"], json!(false));
    assert_eq!(missing["message"], json!("Event not found"));
}

#[tokio::test]
async fn test_delete_then_get_sentinel() {
    let app = test_app();

    let (_, created) = request(
        &app,
        "POST",
        "/events",
        Some(standup("2024-01-10T09:00:00", "2024-01-10T09:30:00", &[])),
    )
    .await;
    let id = created["event"]["event_id"].as_str().unwrap();

    let (_, deleted) = request(&app, "DELETE", &format!("/events/{id}"), None).await;
    assert_eq!(deleted["success"], json!(true));
    assert_eq!(
        deleted["message"],
        json!("Event 'Standup' deleted successfully")
    );

    let (_, fetched) = request(&app, "GET", &format!("/events/{id}"), None).await;
    assert_eq!(fetched["status"], json!("not_found"));

    let (_, again) = request(&app, "DELETE", &format!("/events/{id}"), None).await;
    assert_eq!(again["success"], json!(false));
}

#[tokio::test]
async fn test_list_filters_by_organizer_and_date() {
    let app = test_app();

    let mut a = standup("2024-01-10T09:00:00", "2024-01-10T09:30:00", &["a@x.com"]);
    a["organizer"] = json!("a@x.com");
    let mut b = standup("2024-02-20T09:00:00", "2024-02-20T09:30:00", &["b@x.com"]);
    b["organizer"] = json!("b@x.com");
    b["title"] = json!("Planning");

    request(&app, "POST", "/events", Some(a)).await;
    request(&app, "POST", "/events", Some(b)).await;

    let (_, all) = request(&app, "GET", "/events", None).await;
    assert_eq!(all["total_count"], json!(2));

    let (_, by_organizer) = request(&app, "GET", "/events?organizer=a@x.com", None).await;
    assert_eq!(by_organizer["total_count"], json!(1));
    assert_eq!(by_organizer["events"][0]["organizer"], json!("a@x.com"));

    let (_, by_range) = request(
        &app,
        "GET",
        "/events?start_date=2024-02-01&end_date=2024-02-28",
        None,
    )
    .await;
    assert_eq!(by_range["total_count"], json!(1));
    assert_eq!(by_range["events"][0]["title"], json!("Planning"));

    let (_, by_status) = request(&app, "GET", "/events?status=cancelled", None).await;
    assert_eq!(by_status["total_count"], json!(0));
}

#[tokio::test]
async fn test_missing_required_fields_are_an_input_error() {
    let app = test_app();

    // No start/end time: rejected by the transport layer, not stored.
    let (status, _) = request(
        &app,
        "POST",
        "/events",
        Some(json!({ "title": "Incomplete" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (_, all) = request(&app, "GET", "/events", None).await;
    assert_eq!(all["total_count"], json!(0));
}
