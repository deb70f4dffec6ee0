mod common;

use common::builtin_state;

#[tokio::test]
async fn test_serves_pages_over_http() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read address");

    let app = academia::routes::router(builtin_state().await);
    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server failed");
    });

    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/courses/desarrollo-web-con-python", addr))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Plan de Sesiones"));

    let response = client
        .get(format!("http://{}/courses/no-existe", addr))
        .send()
        .await
        .expect("request failed");
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let courses: serde_json::Value = client
        .get(format!("http://{}/api/courses", addr))
        .send()
        .await
        .expect("request failed")
        .json()
        .await
        .expect("invalid json");
    assert_eq!(courses[0]["title"], "Desarrollo Web con Python");

    server.abort();
}
