mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::{app, get};

#[tokio::test]
async fn test_list_courses_json() {
    let (status, body) = get(app().await, "/api/courses").await;
    assert_eq!(status, StatusCode::OK);

    let courses: Value = serde_json::from_str(&body).expect("invalid json");
    let courses = courses.as_array().expect("expected an array");
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0]["id"], 1);
    assert_eq!(courses[0]["startDate"], "18 de Noviembre de 2025");
}

#[tokio::test]
async fn test_course_detail_json() {
    let (status, body) = get(app().await, "/api/courses/desarrollo-web-con-python").await;
    assert_eq!(status, StatusCode::OK);

    let detail: Value = serde_json::from_str(&body).expect("invalid json");
    assert_eq!(detail["course"]["title"], "Desarrollo Web con Python");
    assert_eq!(detail["sessions"].as_array().map(Vec::len), Some(8));
    assert_eq!(detail["sessions"][2]["resources"][1]["type"], "github");
    assert!(detail["sessions"][0].get("resources").is_none());
}

#[tokio::test]
async fn test_course_detail_json_not_found() {
    let (status, body) = get(app().await, "/api/courses/__nonexistent__").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let error: Value = serde_json::from_str(&body).expect("invalid json");
    assert_eq!(error["message"], "Not Found");
}
