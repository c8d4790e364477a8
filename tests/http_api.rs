//! Integration tests for the signup HTTP surface.
//!
//! Each test builds a fresh seeded router and drives it in-process, so the
//! registry always starts from the fixed activity table.

use std::sync::Arc;

use activity_signup::registry::ActivityRegistry;
use activity_signup::web;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    web::app(Arc::new(ActivityRegistry::with_seed_roster()))
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn participants<'a>(activities: &'a Value, name: &str) -> Vec<&'a str> {
    activities[name]["participants"]
        .as_array()
        .expect("participants array")
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn get_activities_lists_seeded_roster() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/activities").await;

    assert_eq!(status, StatusCode::OK);
    let map = body.as_object().expect("mapping name -> record");
    assert_eq!(map.len(), 9);
    assert_eq!(
        body["Chess Club"]["description"],
        "Learn strategies and compete in chess tournaments"
    );
    assert_eq!(body["Chess Club"]["schedule"], "Fridays, 3:30 PM - 5:00 PM");
    assert_eq!(body["Chess Club"]["max_participants"], 12);
    assert_eq!(
        participants(&body, "Chess Club"),
        vec!["michael@mergington.edu", "daniel@mergington.edu"]
    );
}

#[tokio::test]
async fn signup_adds_participant_exactly_once() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=newstudent@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Signed up newstudent@mergington.edu for Chess Club"
    );

    let (_, activities) = send(&app, Method::GET, "/activities").await;
    let roster = participants(&activities, "Chess Club");
    let occurrences = roster
        .iter()
        .filter(|p| **p == "newstudent@mergington.edu")
        .count();
    assert_eq!(occurrences, 1, "email must appear exactly once");
}

#[tokio::test]
async fn duplicate_signup_is_rejected_without_state_change() {
    let app = app();

    for _ in 0..2 {
        let (status, body) = send(
            &app,
            Method::POST,
            "/activities/Chess%20Club/signup?email=michael@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["detail"],
            "Student is already signed up for this activity"
        );
    }

    let (_, activities) = send(&app, Method::GET, "/activities").await;
    assert_eq!(
        participants(&activities, "Chess Club"),
        vec!["michael@mergington.edu", "daniel@mergington.edu"],
        "rejected signups must leave the roster untouched"
    );
}

#[tokio::test]
async fn signup_for_unknown_activity_returns_404() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/activities/NonExistent/signup?email=test@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");
}

#[tokio::test]
async fn unregister_removes_exactly_that_entry() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Unregistered michael@mergington.edu from Chess Club"
    );

    let (_, activities) = send(&app, Method::GET, "/activities").await;
    assert_eq!(
        participants(&activities, "Chess Club"),
        vec!["daniel@mergington.edu"]
    );
}

#[tokio::test]
async fn unregister_of_non_member_is_rejected_without_state_change() {
    let app = app();

    for _ in 0..2 {
        let (status, body) = send(
            &app,
            Method::DELETE,
            "/activities/Chess%20Club/unregister?email=notsigned@mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Student is not signed up for this activity");
    }

    let (_, activities) = send(&app, Method::GET, "/activities").await;
    assert_eq!(participants(&activities, "Chess Club").len(), 2);
}

#[tokio::test]
async fn unregister_for_unknown_activity_returns_404() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::DELETE,
        "/activities/NonExistent/unregister?email=test@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Activity not found");
}

#[tokio::test]
async fn root_redirects_to_landing_page() {
    let app = app();
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/static/index.html"
    );
}

#[tokio::test]
async fn health_returns_ok() {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);
}
