//! Book API integration tests

use bookstore_admin::egui_app::BookstoreApi;
use bookstore_admin::shared::{BookDraft, BookValue, ClientError};
use mockito::Matcher;
use pretty_assertions::assert_eq;

use crate::common::{book_record, MockBackend};

fn draft() -> BookDraft {
    BookDraft {
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        summary: String::new(),
        price: "12.50".to_string(),
        quantity: "3".to_string(),
    }
}

#[test]
fn test_create_book_sends_bearer_token() {
    let mut backend = MockBackend::start();
    let mock = backend
        .server
        .mock("POST", "/book")
        .match_header("authorization", "Bearer abc123")
        .match_body(Matcher::Json(serde_json::json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "summary": "",
            "price": "12.50",
            "quantity": "3"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(book_record(42, "Dune").to_string())
        .create();

    let book = crate::assert_ok!(backend.api().create_book("abc123", &draft()));
    assert_eq!(book.id, Some(BookValue::from(42)));
    assert_eq!(book.title, "Dune");
    mock.assert();
}

#[test]
fn test_create_book_forbidden() {
    let mut backend = MockBackend::start();
    let _mock = backend.json("/book", 403, serde_json::json!({"message": "invalid token"}));

    let result = backend.api().create_book("stale", &draft());
    assert_eq!(result.unwrap_err(), ClientError::Forbidden);
}

#[test]
fn test_create_book_server_error() {
    let mut backend = MockBackend::start();
    let _mock = backend
        .server
        .mock("POST", "/book")
        .with_status(500)
        .with_body("Internal Server Error")
        .create();

    let error = backend.api().create_book("abc123", &draft()).unwrap_err();
    assert_eq!(error, ClientError::status(500, None));
    assert_eq!(error.user_message("Error adding book"), "Error adding book");
}
