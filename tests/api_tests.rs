//! API integration tests
//!
//! These run against a live server with a migrated database.
//! Run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

const BASE_URL: &str = "http://localhost:8080/api/v1";

/// Helper to create a publisher with a unique name, returns its id
async fn create_publisher(client: &Client, name: &str) -> Value {
    let response = client
        .post(format!("{}/publishers", BASE_URL))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to create publisher");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse publisher")
}

/// Helper to create an author, returns its id
async fn create_author(client: &Client, name: &str) -> Value {
    let response = client
        .post(format!("{}/authors", BASE_URL))
        .json(&json!({ "name": name }))
        .send()
        .await
        .expect("Failed to create author");
    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse author")
}

/// Unique suffix so tests do not collide on unique constraints
fn unique(name: &str) -> String {
    format!("{} {}", name, Uuid::new_v4())
}

#[tokio::test]
#[ignore]
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
async fn test_create_book_with_review_and_authors() {
    let client = Client::new();
    let publisher = create_publisher(&client, &unique("Ace Books")).await;
    let author1 = create_author(&client, &unique("Frank Herbert")).await;
    let author2 = create_author(&client, &unique("Brian Herbert")).await;

    let title = unique("Dune");
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": title,
            "publisher_id": publisher["id"],
            "author_ids": [author1["id"], author2["id"]],
            "review_comment": "Great book"
        }))
        .send()
        .await
        .expect("Failed to create book");

    assert_eq!(response.status(), 201);
    let book: Value = response.json().await.expect("Failed to parse book");

    assert!(book["id"].is_string());
    assert_eq!(book["title"], title.as_str());
    assert_eq!(book["publisher"]["id"], publisher["id"]);
    assert_eq!(book["authors"].as_array().unwrap().len(), 2);
    assert_eq!(book["review"]["comment"], "Great book");
    // The review's back-reference points at the new book
    assert_eq!(book["review"]["book_id"], book["id"]);
}

#[tokio::test]
#[ignore]
async fn test_create_book_missing_publisher_writes_nothing() {
    let client = Client::new();
    let title = unique("Orphan Book");

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": title,
            "publisher_id": Uuid::new_v4(),
            "author_ids": [],
            "review_comment": "never persisted"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "ReferenceNotFound");

    // No partial write: the title does not exist
    let lookup = client
        .get(format!("{}/books/title/{}", BASE_URL, title))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(lookup.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_create_book_drops_unresolved_author_ids() {
    let client = Client::new();
    let publisher = create_publisher(&client, &unique("Tor")).await;
    let author = create_author(&client, &unique("Ursula K. Le Guin")).await;

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": unique("The Dispossessed"),
            "publisher_id": publisher["id"],
            "author_ids": [author["id"], Uuid::new_v4(), Uuid::new_v4()],
            "review_comment": "An ambiguous utopia"
        }))
        .send()
        .await
        .expect("Failed to create book");

    assert_eq!(response.status(), 201);
    let book: Value = response.json().await.expect("Failed to parse book");

    // Exactly the existing subset, no error for the unknown ids
    let authors = book["authors"].as_array().unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0]["id"], author["id"]);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_title_conflicts() {
    let client = Client::new();
    let publisher = create_publisher(&client, &unique("Gollancz")).await;
    let title = unique("Hyperion");

    let body = json!({
        "title": title,
        "publisher_id": publisher["id"],
        "author_ids": [],
        "review_comment": "first"
    });

    let first = client
        .post(format!("{}/books", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to create book");
    assert_eq!(first.status(), 201);

    let second = client
        .post(format!("{}/books", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(second.status(), 409);

    let err: Value = second.json().await.expect("Failed to parse response");
    assert_eq!(err["error"], "Conflict");
}

#[tokio::test]
#[ignore]
async fn test_delete_book_cascades_review_but_not_authors() {
    let client = Client::new();
    let publisher = create_publisher(&client, &unique("Baen")).await;
    let author = create_author(&client, &unique("Lois McMaster Bujold")).await;

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&json!({
            "title": unique("Barrayar"),
            "publisher_id": publisher["id"],
            "author_ids": [author["id"]],
            "review_comment": "goes away with the book"
        }))
        .send()
        .await
        .expect("Failed to create book");
    assert_eq!(response.status(), 201);
    let book: Value = response.json().await.expect("Failed to parse book");
    let review_id = book["review"]["id"].as_str().unwrap().to_string();
    let book_id = book["id"].as_str().unwrap().to_string();

    let deleted = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to delete book");
    assert_eq!(deleted.status(), 204);

    // Review is gone with the book
    let review = client
        .get(format!("{}/reviews/{}", BASE_URL, review_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(review.status(), 404);

    // Author and publisher survive, unchanged
    let author_check = client
        .get(format!("{}/authors/{}", BASE_URL, author["id"].as_str().unwrap()))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(author_check.status(), 200);
    let author_body: Value = author_check.json().await.unwrap();
    assert_eq!(author_body["name"], author["name"]);

    let publisher_check = client
        .get(format!(
            "{}/publishers/{}",
            BASE_URL,
            publisher["id"].as_str().unwrap()
        ))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(publisher_check.status(), 200);
}

#[tokio::test]
#[ignore]
async fn test_delete_nonexistent_book_is_signaled() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_list_books_reflects_creates() {
    let client = Client::new();
    let publisher = create_publisher(&client, &unique("Orbit")).await;

    let before = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to list books");
    let before: Value = before.json().await.unwrap();
    let count_before = before.as_array().unwrap().len();

    for i in 0..3 {
        let response = client
            .post(format!("{}/books", BASE_URL))
            .json(&json!({
                "title": unique(&format!("Listing {}", i)),
                "publisher_id": publisher["id"],
                "author_ids": [],
                "review_comment": "n/a"
            }))
            .send()
            .await
            .expect("Failed to create book");
        assert_eq!(response.status(), 201);
    }

    let after = client
        .get(format!("{}/books", BASE_URL))
        .send()
        .await
        .expect("Failed to list books");
    let after: Value = after.json().await.unwrap();
    assert_eq!(after.as_array().unwrap().len(), count_before + 3);
}

#[tokio::test]
#[ignore]
async fn test_publisher_books_view() {
    let client = Client::new();
    let publisher = create_publisher(&client, &unique("Del Rey")).await;
    let publisher_id = publisher["id"].as_str().unwrap();

    for i in 0..2 {
        let response = client
            .post(format!("{}/books", BASE_URL))
            .json(&json!({
                "title": unique(&format!("Shelf {}", i)),
                "publisher_id": publisher["id"],
                "author_ids": [],
                "review_comment": "n/a"
            }))
            .send()
            .await
            .expect("Failed to create book");
        assert_eq!(response.status(), 201);
    }

    let response = client
        .get(format!("{}/publishers/{}/books", BASE_URL, publisher_id))
        .send()
        .await
        .expect("Failed to list publisher books");
    assert_eq!(response.status(), 200);

    let books: Value = response.json().await.unwrap();
    let books = books.as_array().unwrap();
    assert_eq!(books.len(), 2);
    for book in books {
        assert_eq!(book["publisher_id"].as_str().unwrap(), publisher_id);
    }
}
