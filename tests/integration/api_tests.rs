//! API integration tests
//!
//! Each test spawns its own server on an ephemeral port with a fresh
//! registry and drives it over HTTP.

use std::sync::Arc;

use reqwest::Client;
use serde_json::{json, Value};
use tokio::sync::RwLock;

use circula_server::{
    api,
    config::AppConfig,
    registry::LibraryRegistry,
    seed::seed_demo_data,
    services::Services,
    AppState,
};

/// Spawn a server on an ephemeral port; returns the base URL for /api/v1.
async fn spawn_app(seed: bool) -> String {
    let mut registry = LibraryRegistry::new();
    if seed {
        seed_demo_data(&mut registry);
    }

    let state = AppState {
        config: Arc::new(AppConfig::default()),
        services: Arc::new(Services::new(Arc::new(RwLock::new(registry)))),
    };

    let app = api::router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    format!("http://{}/api/v1", addr)
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
}

#[tokio::test]
async fn test_create_book_and_duplicate_isbn() {
    let base = spawn_app(false).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .json(&json!({
            "title": "T1",
            "author": "Au1",
            "isbn": "A1"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["isbn"], "A1");
    assert_eq!(body["available"], true);
    assert_eq!(body["status"], "available");

    // Same ISBN again: 409, and the first record is unchanged
    let response = client
        .post(format!("{}/books", base))
        .json(&json!({
            "title": "Another",
            "author": "Someone",
            "isbn": "A1"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "DuplicateIsbn");

    let response = client
        .get(format!("{}/books/A1", base))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "T1");
    assert_eq!(body["author"], "Au1");
}

#[tokio::test]
async fn test_register_patron_and_duplicate_card() {
    let base = spawn_app(false).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/patrons", base))
        .json(&json!({ "name": "P1", "card_number": "C1" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["held_count"], 0);

    let response = client
        .post(format!("{}/patrons", base))
        .json(&json!({ "name": "P2", "card_number": "C1" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "DuplicateCard");
}

#[tokio::test]
async fn test_validation_rejects_empty_fields() {
    let base = spawn_app(false).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .json(&json!({ "title": "", "author": "Au", "isbn": "X" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_full_circulation_flow() {
    let base = spawn_app(false).await;
    let client = Client::new();

    client
        .post(format!("{}/books", base))
        .json(&json!({ "title": "T1", "author": "Au1", "isbn": "A1" }))
        .send()
        .await
        .expect("Failed to add book");
    client
        .post(format!("{}/patrons", base))
        .json(&json!({ "name": "P1", "card_number": "C1" }))
        .send()
        .await
        .expect("Failed to register patron");

    // Borrow
    let response = client
        .post(format!("{}/loans", base))
        .json(&json!({ "isbn": "A1", "card_number": "C1" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["book"]["available"], false);
    assert_eq!(body["book"]["status"], "on loan to P1");

    // Availability now reports the borrower's name
    let response = client
        .get(format!("{}/books/A1/availability", base))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "on_loan");
    assert_eq!(body["borrower"], "P1");

    // Borrowing with an unregistered card fails with 404 on the patron
    let response = client
        .post(format!("{}/loans", base))
        .json(&json!({ "isbn": "A1", "card_number": "C2" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NoSuchPatron");

    // The patron's held view includes the title
    let response = client
        .get(format!("{}/patrons/C1", base))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["held_count"], 1);
    assert_eq!(body["held_titles"][0], "T1");

    // Return
    let response = client
        .post(format!("{}/loans/return", base))
        .json(&json!({ "isbn": "A1", "card_number": "C1" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/books/A1/availability", base))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "available");
}

#[tokio::test]
async fn test_double_borrow_and_wrong_returner() {
    let base = spawn_app(false).await;
    let client = Client::new();

    client
        .post(format!("{}/books", base))
        .json(&json!({ "title": "T1", "author": "Au1", "isbn": "A1" }))
        .send()
        .await
        .expect("Failed to add book");
    for (name, card) in [("P1", "C1"), ("P2", "C2")] {
        client
            .post(format!("{}/patrons", base))
            .json(&json!({ "name": name, "card_number": card }))
            .send()
            .await
            .expect("Failed to register patron");
    }

    let response = client
        .post(format!("{}/loans", base))
        .json(&json!({ "isbn": "A1", "card_number": "C1" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // Already on loan
    let response = client
        .post(format!("{}/loans", base))
        .json(&json!({ "isbn": "A1", "card_number": "C2" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "BookNotAvailable");

    // A different patron cannot return it
    let response = client
        .post(format!("{}/loans/return", base))
        .json(&json!({ "isbn": "A1", "card_number": "C2" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 409);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NotBorrowedByPatron");
}

#[tokio::test]
async fn test_title_search_on_seeded_catalog() {
    let base = spawn_app(true).await;
    let client = Client::new();

    // Lowercase query matches the mixed-script title
    let response = client
        .get(format!("{}/books?title=python", base))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total"], 1);
    assert_eq!(body["books"][0]["isbn"], "9787115428028");

    let response = client
        .get(format!("{}/books?title=Python", base))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total"], 1);

    // No filter lists the whole catalog in insertion order
    let response = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total"], 4);
    assert_eq!(body["books"][0]["isbn"], "9787115428028");

    let response = client
        .get(format!("{}/patrons", base))
        .send()
        .await
        .expect("Failed to send request");
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_unknown_book_is_404() {
    let base = spawn_app(false).await;
    let client = Client::new();

    let response = client
        .get(format!("{}/books/missing/availability", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NoSuchBook");

    let response = client
        .post(format!("{}/loans", base))
        .json(&json!({ "isbn": "missing", "card_number": "C1" }))
        .send()
        .await
        .expect("Failed to send request");
    // Book existence is checked before patron existence
    assert_eq!(response.status(), 404);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NoSuchBook");
}
