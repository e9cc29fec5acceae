//! Mock backend helpers for integration tests
//!
//! Wraps a `mockito` server and builds an `HttpApi` pointed at it.

use bookstore_admin::egui_app::{Config, HttpApi};
use bookstore_admin::shared::AppConfig;

/// A mock bookstore backend and a client configured for it
pub struct MockBackend {
    pub server: mockito::ServerGuard,
    pub config: Config,
}

impl MockBackend {
    pub fn start() -> Self {
        let server = mockito::Server::new();
        let config = Config::with_builder(AppConfig::builder().server_url(server.url()))
            .expect("mock server url is valid");
        Self { server, config }
    }

    pub fn api(&self) -> HttpApi {
        HttpApi::new(self.config.clone()).expect("runtime starts")
    }

    /// JSON mock for `POST path` answering `status` with `body`
    pub fn json(&mut self, path: &str, status: usize, body: serde_json::Value) -> mockito::Mock {
        self.server
            .mock("POST", path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create()
    }
}

/// A complete book record as the backend would return it
pub fn book_record(id: i64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "author": "Frank Herbert",
        "summary": "Desert planet",
        "price": "12.50",
        "quantity": "3"
    })
}
