//! Authentication API integration tests
//!
//! Tests for the login and registration endpoints.

use bookstore_admin::egui_app::types::{Credentials, RegistrationRequest};
use bookstore_admin::egui_app::{BookstoreApi, Config, HttpApi};
use bookstore_admin::shared::{AppConfig, ClientError};
use mockito::Matcher;
use pretty_assertions::assert_eq;

use crate::common::MockBackend;

fn credentials() -> Credentials {
    Credentials {
        username: "alice".to_string(),
        password: "secret".to_string(),
    }
}

#[test]
fn test_login_success() {
    let mut backend = MockBackend::start();
    let mock = backend
        .server
        .mock("POST", "/auth/login")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({
            "username": "alice",
            "password": "secret"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token":"abc123"}"#)
        .create();

    let token = crate::assert_ok!(backend.api().login(&credentials()));
    assert_eq!(token, "abc123");
    mock.assert();
}

#[test]
fn test_login_bad_credentials() {
    let mut backend = MockBackend::start();
    let _mock = backend.json(
        "/auth/login",
        401,
        serde_json::json!({"message": "bad credentials"}),
    );

    let result = backend.api().login(&credentials());
    assert_eq!(
        result,
        Err(ClientError::status(401, Some("bad credentials".to_string())))
    );
}

#[test]
fn test_login_success_without_token_is_serialization_error() {
    let mut backend = MockBackend::start();
    let _mock = backend.json("/auth/login", 200, serde_json::json!({"ok": true}));

    crate::assert_err!(
        backend.api().login(&credentials()),
        ClientError::Serialization { .. }
    );
}

#[test]
fn test_login_unreachable_server() {
    let config = Config::with_builder(AppConfig::builder().server_url("http://127.0.0.1:9")).unwrap();
    let api = HttpApi::new(config).unwrap();

    crate::assert_err!(api.login(&credentials()), ClientError::Network { .. });
}

#[test]
fn test_register_sends_confirm_password() {
    let mut backend = MockBackend::start();
    let mock = backend
        .server
        .mock("POST", "/auth/register")
        .match_body(Matcher::Json(serde_json::json!({
            "username": "alice",
            "password": "secret",
            "confirmPassword": "secret"
        })))
        .with_status(201)
        .with_body("")
        .create();

    let request = RegistrationRequest {
        username: "alice".to_string(),
        password: "secret".to_string(),
        confirm_password: "secret".to_string(),
    };
    crate::assert_ok!(backend.api().register(&request));
    mock.assert();
}

#[test]
fn test_register_conflict() {
    let mut backend = MockBackend::start();
    let _mock = backend.json(
        "/auth/register",
        409,
        serde_json::json!({"message": "username taken"}),
    );

    let request = RegistrationRequest {
        username: "alice".to_string(),
        password: "secret".to_string(),
        confirm_password: "secret".to_string(),
    };
    let error = backend.api().register(&request).unwrap_err();
    assert_eq!(error.user_message("Registration failed"), "username taken");
}
