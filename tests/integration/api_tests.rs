//! API integration tests

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Create a book and return its JSON body
async fn create_book(client: &Client, title: &str, price: f64) -> Value {
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": title, "price": price }))
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse create response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_and_get_book() {
    let client = Client::new();

    let created = create_book(&client, "Dune", 12.5).await;
    assert!(created["id"].as_i64().expect("id is an integer") > 0);
    assert_eq!(created["title"], "Dune");
    assert_eq!(created["price"], 12.5);
    assert!(created["created_at"].is_string());

    let response = client
        .get(format!("{}/books/{}", BASE_URL, created["id"]))
        .send()
        .await
        .expect("Failed to send get request");

    assert!(response.status().is_success());

    let fetched: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["title"], created["title"]);
    assert_eq!(fetched["price"], created["price"]);
    assert_eq!(fetched["created_at"], created["created_at"]);
}

#[tokio::test]
#[ignore]
async fn test_create_book_rejects_empty_title() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": "", "price": 1.0 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "validation");
}

#[tokio::test]
#[ignore]
async fn test_create_book_rejects_negative_price() {
    let client = Client::new();

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({ "title": "Dune", "price": -1.0 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_get_unknown_id_returns_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/999999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
#[ignore]
async fn test_get_malformed_id_returns_400() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/not-a-number", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_list_books_reflects_creates_and_deletes() {
    let client = Client::new();

    let before: Vec<Value> = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send list request")
        .json()
        .await
        .expect("Failed to parse list response");

    let first = create_book(&client, "Dune", 12.5).await;
    let second = create_book(&client, "Dune Messiah", 9.99).await;

    let after_create: Vec<Value> = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send list request")
        .json()
        .await
        .expect("Failed to parse list response");

    assert_eq!(after_create.len(), before.len() + 2);
    assert!(after_create.iter().any(|b| b["id"] == first["id"]));
    assert!(after_create.iter().any(|b| b["id"] == second["id"]));

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, first["id"]))
        .send()
        .await
        .expect("Failed to send delete request");
    assert!(response.status().is_success());

    let after_delete: Vec<Value> = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to send list request")
        .json()
        .await
        .expect("Failed to parse list response");

    assert_eq!(after_delete.len(), before.len() + 1);
    assert!(!after_delete.iter().any(|b| b["id"] == first["id"]));
}

#[tokio::test]
#[ignore]
async fn test_update_changes_fields_and_preserves_created_at() {
    let client = Client::new();

    let created = create_book(&client, "Children of Dune", 10.0).await;

    let response = client
        .put(format!("{}/books/{}", BASE_URL, created["id"]))
        .json(&json!({ "title": "God Emperor of Dune", "price": 11.25 }))
        .send()
        .await
        .expect("Failed to send update request");

    assert!(response.status().is_success());

    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["title"], "God Emperor of Dune");
    assert_eq!(updated["price"], 11.25);
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
#[ignore]
async fn test_delete_then_get_returns_404() {
    let client = Client::new();

    let created = create_book(&client, "Heretics of Dune", 8.0).await;

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, created["id"]))
        .send()
        .await
        .expect("Failed to send delete request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "book deleted successfully");

    let response = client
        .get(format!("{}/books/{}", BASE_URL, created["id"]))
        .send()
        .await
        .expect("Failed to send get request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_delete_unknown_id_returns_404() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/books/999999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
