//! API integration tests
//!
//! These run against a live server with an empty-ish database:
//! `cargo test -- --ignored`

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8000";

/// Unique suffix so repeated runs do not collide on unique columns
fn unique(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{}{}", prefix, nanos)
}

async fn post(client: &Client, path: &str, body: Value) -> (StatusCode, Value) {
    let response = client
        .post(format!("{}{}", BASE_URL, path))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    let body = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

async fn put(client: &Client, path: &str, body: Value) -> (StatusCode, Value) {
    let response = client
        .put(format!("{}{}", BASE_URL, path))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    let body = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

async fn get(client: &Client, path: &str) -> (StatusCode, Value) {
    let response = client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    let body = response.json().await.unwrap_or(Value::Null);
    (status, body)
}

async fn delete(client: &Client, path: &str) -> StatusCode {
    client
        .delete(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request")
        .status()
}

async fn create_member(client: &Client) -> i64 {
    let (status, body) = post(
        client,
        "/members",
        json!({
            "full_name": "Test Member",
            "email": format!("{}@example.org", unique("member")),
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["member_id"].as_i64().expect("No member ID")
}

async fn create_book(client: &Client, total_copies: i32) -> i64 {
    let (status, body) = post(
        client,
        "/books",
        json!({
            "title": "Test Book",
            "author": "Test Author",
            "total_copies": total_copies,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["available_copies"], total_copies);
    body["book_id"].as_i64().expect("No book ID")
}

async fn available_copies(client: &Client, book_id: i64) -> i64 {
    let (_, body) = get(client, &format!("/books/{}", book_id)).await;
    body["available_copies"].as_i64().expect("No available_copies")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();
    let (status, body) = get(&client, "/health").await;
    assert!(status.is_success());
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(&client, "/ready").await;
    assert!(status.is_success());
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_member_crud() {
    let client = Client::new();
    let email = format!("{}@example.org", unique("crud"));

    let (status, body) = post(
        &client,
        "/members/",
        json!({"full_name": "Grace Hopper", "email": email, "join_date": "2024-01-15"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["member_id"].as_i64().expect("No member ID");
    assert_eq!(body["join_date"], "2024-01-15");

    // Same email twice
    let (status, _) = post(
        &client,
        "/members",
        json!({"full_name": "Someone Else", "email": email}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Join date is kept when omitted on update
    let (status, body) = put(
        &client,
        &format!("/members/{}", id),
        json!({"full_name": "Grace B. Hopper", "email": email, "phone": null}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["full_name"], "Grace B. Hopper");
    assert_eq!(body["join_date"], "2024-01-15");

    let (status, body) = get(&client, "/members").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().expect("list").iter().any(|m| m["member_id"] == id));

    assert_eq!(delete(&client, &format!("/members/{}", id)).await, StatusCode::OK);
    let (status, body) = get(&client, &format!("/members/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Member not found");
}

#[tokio::test]
#[ignore]
async fn test_book_update_clamps_available_copies() {
    let client = Client::new();
    let book_id = create_book(&client, 5).await;

    let (status, body) = put(
        &client,
        &format!("/books/{}", book_id),
        json!({"title": "Test Book", "author": "Test Author", "genre": "essay", "total_copies": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_copies"], 2);
    assert_eq!(body["available_copies"], 2);

    assert_eq!(delete(&client, &format!("/books/{}", book_id)).await, StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_borrow_and_return_cycle() {
    let client = Client::new();
    let member_id = create_member(&client).await;
    let book_id = create_book(&client, 1).await;

    let (status, body) = post(
        &client,
        "/borrowed_books",
        json!({"member_id": member_id, "book_id": book_id, "borrow_date": "2024-03-01"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let borrow_id = body["borrow_id"].as_i64().expect("No borrow ID");
    assert_eq!(available_copies(&client, book_id).await, 0);

    // No copy left
    let (status, body) = post(
        &client,
        "/borrowed_books",
        json!({"member_id": member_id, "book_id": book_id, "borrow_date": "2024-03-02"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Book not available");

    // Outstanding filter
    let (_, body) = get(&client, "/borrowed_books?outstanding=true").await;
    assert!(body.as_array().expect("list").iter().any(|r| r["borrow_id"] == borrow_id));

    // Return
    let returned = json!({
        "member_id": member_id,
        "book_id": book_id,
        "borrow_date": "2024-03-01",
        "return_date": "2024-03-20"
    });
    let (status, body) = put(&client, &format!("/borrowed_books/{}", borrow_id), returned.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["return_date"], "2024-03-20");
    assert_eq!(available_copies(&client, book_id).await, 1);

    // Updating an already returned record does not give the copy back twice
    let (status, _) = put(&client, &format!("/borrowed_books/{}", borrow_id), returned).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(available_copies(&client, book_id).await, 1);

    let (_, body) = get(&client, &format!("/members/{}/borrowed_books", member_id)).await;
    assert_eq!(body.as_array().expect("list").len(), 1);

    // Member cannot go while records reference it
    assert_eq!(
        delete(&client, &format!("/members/{}", member_id)).await,
        StatusCode::CONFLICT
    );

    assert_eq!(
        delete(&client, &format!("/borrowed_books/{}", borrow_id)).await,
        StatusCode::OK
    );
    assert_eq!(available_copies(&client, book_id).await, 1);

    assert_eq!(delete(&client, &format!("/members/{}", member_id)).await, StatusCode::OK);
    assert_eq!(delete(&client, &format!("/books/{}", book_id)).await, StatusCode::OK);
}

#[tokio::test]
#[ignore]
async fn test_deleting_outstanding_record_releases_copy() {
    let client = Client::new();
    let member_id = create_member(&client).await;
    let book_id = create_book(&client, 2).await;

    let (_, body) = post(
        &client,
        "/borrowed_books",
        json!({"member_id": member_id, "book_id": book_id, "borrow_date": "2024-04-01"}),
    )
    .await;
    let borrow_id = body["borrow_id"].as_i64().expect("No borrow ID");
    assert_eq!(available_copies(&client, book_id).await, 1);

    assert_eq!(
        delete(&client, &format!("/borrowed_books/{}", borrow_id)).await,
        StatusCode::OK
    );
    assert_eq!(available_copies(&client, book_id).await, 2);

    delete(&client, &format!("/members/{}", member_id)).await;
    delete(&client, &format!("/books/{}", book_id)).await;
}

#[tokio::test]
#[ignore]
async fn test_borrow_unknown_book() {
    let client = Client::new();
    let member_id = create_member(&client).await;

    let (status, body) = post(
        &client,
        "/borrowed_books",
        json!({"member_id": member_id, "book_id": i32::MAX, "borrow_date": "2024-04-01"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Book not available");

    delete(&client, &format!("/members/{}", member_id)).await;
}

#[tokio::test]
#[ignore]
async fn test_librarian_and_account() {
    let client = Client::new();

    let (status, body) = post(
        &client,
        "/librarians",
        json!({"full_name": "Melvil Dewey", "hire_date": "2020-09-01"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let librarian_id = body["librarian_id"].as_i64().expect("No librarian ID");

    let username = unique("dewey");
    let (status, body) = post(
        &client,
        "/librarian_accounts",
        json!({"librarian_id": librarian_id, "username": username, "password_hash": "x$hash"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("password_hash").is_none());
    let account_id = body["account_id"].as_i64().expect("No account ID");

    // One account per librarian
    let (status, body) = post(
        &client,
        "/librarian_accounts",
        json!({"librarian_id": librarian_id, "username": unique("other"), "password_hash": "y"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Librarian already has an account");

    let (status, body) = get(&client, &format!("/librarians/{}/account", librarian_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["account_id"], account_id);

    let renamed = unique("mdewey");
    let (status, body) = put(
        &client,
        &format!("/librarian_accounts/{}", account_id),
        json!({"username": renamed}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], renamed);

    // Account goes with its librarian
    assert_eq!(
        delete(&client, &format!("/librarians/{}", librarian_id)).await,
        StatusCode::OK
    );
    let (status, _) = get(&client, &format!("/librarian_accounts/{}", account_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_account_for_unknown_librarian() {
    let client = Client::new();
    let (status, body) = post(
        &client,
        "/librarian_accounts",
        json!({"librarian_id": i32::MAX, "username": unique("ghost"), "password_hash": "z"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Librarian not found");
}
