//! API integration tests

use bookly_server::{api, config::AppConfig, AppState};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

/// Start a server on an ephemeral port and return its API base URL
async fn spawn_app(seed: bool) -> String {
    let mut config = AppConfig::default();
    config.store.seed = seed;

    let app = api::create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    format!("http://{}/api/v1", addr)
}

fn sample_book() -> Value {
    json!({
        "title": "A",
        "author": "B",
        "publisher": "C",
        "publisher_date": "2020-01-01",
        "page_count": 100,
        "language": "English"
    })
}

async fn create_book(client: &Client, base: &str, book: &Value) -> i64 {
    let response = client
        .post(format!("{}/books", base))
        .json(book)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No book ID")
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_app(false).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");

    let response = client
        .get(format!("{}/ready", base))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
    assert_eq!(body["books"], 0);
    assert_eq!(body["seeded"], false);
}

#[tokio::test]
async fn test_readiness_reports_seeded_store() {
    let base = spawn_app(true).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["books"], 6);
    assert_eq!(body["seeded"], true);
}

#[tokio::test]
async fn test_list_seeded_books() {
    let base = spawn_app(true).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body.as_object().expect("Expected a map of books");
    assert_eq!(books.len(), 6);
    assert_eq!(body["1"]["title"], "Richard Montes");
    assert_eq!(body["6"]["language"], "Bihari languages");
}

#[tokio::test]
async fn test_create_then_get() {
    let base = spawn_app(false).await;
    let client = Client::new();

    let id = create_book(&client, &base, &sample_book()).await;

    let response = client
        .get(format!("{}/books/{}", base, id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, sample_book());
}

#[tokio::test]
async fn test_create_rejects_incomplete_book() {
    let base = spawn_app(false).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .json(&json!({ "title": "Only a title" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadRequest");
    assert!(body["msg"].is_string());
}

#[tokio::test]
async fn test_missing_book_is_not_found() {
    let base = spawn_app(false).await;
    let client = Client::new();

    let requests = vec![
        client.get(format!("{}/books/42", base)),
        client.patch(format!("{}/books/42", base)).json(&sample_book()),
        client
            .patch(format!("{}/books/partial/42", base))
            .json(&json!({ "page_count": 1 })),
        client.delete(format!("{}/books/42", base)),
    ];

    for request in requests {
        let response = request.send().await.expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body["msg"], "Book with 42 not found");
    }
}

#[tokio::test]
async fn test_delete_missing_book_message() {
    let base = spawn_app(false).await;
    let client = Client::new();

    let response = client
        .delete(format!("{}/books/99", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["msg"], "Book with 99 not found");
}

#[tokio::test]
async fn test_replace_book() {
    let base = spawn_app(false).await;
    let client = Client::new();
    let id = create_book(&client, &base, &sample_book()).await;

    let replacement = json!({
        "title": "New",
        "author": "Someone",
        "publisher": "Elsewhere",
        "publisher_date": "1999",
        "page_count": 12,
        "language": "French"
    });

    let response = client
        .patch(format!("{}/books/{}", base, id))
        .json(&replacement)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, replacement);
}

#[tokio::test]
async fn test_partial_update_changes_only_given_fields() {
    let base = spawn_app(false).await;
    let client = Client::new();
    let id = create_book(&client, &base, &sample_book()).await;

    let response = client
        .patch(format!("{}/books/partial/{}", base, id))
        .json(&json!({ "page_count": 200 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["page_count"], 200);
    assert_eq!(body["title"], "A");
    assert_eq!(body["author"], "B");
    assert_eq!(body["publisher_date"], "2020-01-01");
}

#[tokio::test]
async fn test_partial_update_with_empty_patch() {
    let base = spawn_app(false).await;
    let client = Client::new();
    let id = create_book(&client, &base, &sample_book()).await;

    let response = client
        .patch(format!("{}/books/partial/{}", base, id))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, sample_book());
}

#[tokio::test]
async fn test_partial_update_rejects_null() {
    let base = spawn_app(false).await;
    let client = Client::new();
    let id = create_book(&client, &base, &sample_book()).await;

    let response = client
        .patch(format!("{}/books/partial/{}", base, id))
        .json(&json!({ "title": null, "page_count": 5 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "UpdateFailed");

    let stored: Value = client
        .get(format!("{}/books/{}", base, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(stored, sample_book());
}

#[tokio::test]
async fn test_delete_then_get_and_ids_not_reused() {
    let base = spawn_app(false).await;
    let client = Client::new();
    let first = create_book(&client, &base, &sample_book()).await;
    let second = create_book(&client, &base, &sample_book()).await;

    let response = client
        .delete(format!("{}/books/{}", base, first))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({}));

    let response = client
        .get(format!("{}/books/{}", base, first))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let third = create_book(&client, &base, &sample_book()).await;
    assert_ne!(third, second);
    assert_ne!(third, first);
}

#[tokio::test]
async fn test_invalid_path_id() {
    let base = spawn_app(false).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/books/not-a-number", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadRequest");
}

#[tokio::test]
async fn test_get_headers() {
    let base = spawn_app(false).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/headers/get_headers", base))
        .header("Accept", "application/json")
        .header("User-Agent", "bookly-tests")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["Accept"], "application/json");
    assert_eq!(body["User-Agent"], "bookly-tests");
    assert!(body["Host"].as_str().is_some_and(|h| h.starts_with("127.0.0.1")));
    assert!(body["Content-Type"].is_null());
}
