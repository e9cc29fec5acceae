//! Page flows driven against a mocked backend
//!
//! Each test runs the same sequence the UI does: submit the form, call the
//! backend, apply the answer.

use std::sync::Arc;
use std::time::{Duration, Instant};

use assert_matches::assert_matches;
use bookstore_admin::egui_app::storage::{self, FileStorage, MemoryStorage};
use bookstore_admin::egui_app::{
    AppState, AppView, BookstoreApi, DashboardFlow, DashboardSubmit, LoginFlow, Outcome,
};
use bookstore_admin::shared::{AppConfig, Book, BookRow, Field};
use pretty_assertions::assert_eq;

use crate::common::{book_record, MockBackend};

fn filled_dashboard() -> DashboardFlow {
    let mut flow = DashboardFlow::new();
    flow.toggle_form();
    flow.draft.title = "Dune".to_string();
    flow.draft.author = "Frank Herbert".to_string();
    flow.draft.price = "12.50".to_string();
    flow.draft.quantity = "3".to_string();
    flow
}

#[test]
fn test_login_ok_stores_token_and_opens_listing() {
    let mut backend = MockBackend::start();
    let _mock = backend.json("/auth/login", 200, serde_json::json!({"token": "abc123"}));
    let api = backend.api();
    let mut storage = MemoryStorage::new();

    let mut flow = LoginFlow::new();
    flow.username = "alice".to_string();
    flow.password = "secret".to_string();

    let credentials = flow.submit(Instant::now()).expect("form is valid");
    let outcome = flow.finish(api.login(&credentials), &mut storage, Instant::now());

    assert_eq!(outcome, Outcome::navigate(AppView::Dashboard));
    assert_eq!(storage::load_token(&storage), Some("abc123".to_string()));
}

#[test]
fn test_login_401_shows_message_on_password() {
    let mut backend = MockBackend::start();
    let _mock = backend.json(
        "/auth/login",
        401,
        serde_json::json!({"message": "bad credentials"}),
    );
    let api = backend.api();
    let mut storage = MemoryStorage::new();

    let mut flow = LoginFlow::new();
    flow.username = "alice".to_string();
    flow.password = "wrong-password".to_string();

    let credentials = flow.submit(Instant::now()).expect("form is valid");
    let outcome = flow.finish(api.login(&credentials), &mut storage, Instant::now());

    assert_eq!(outcome.navigate, None);
    assert_eq!(
        flow.feedback.error_message(Field::Password),
        Some("bad credentials")
    );
    assert!(!flow.is_loading());
}

#[test]
fn test_invalid_login_never_reaches_backend() {
    let mut backend = MockBackend::start();
    let mock = backend
        .server
        .mock("POST", "/auth/login")
        .expect(0)
        .create();

    let mut flow = LoginFlow::new();
    flow.username = "alice".to_string();
    flow.password = "abc".to_string();
    assert!(flow.submit(Instant::now()).is_none());

    mock.assert();
}

#[test]
fn test_add_book_without_token_redirects_without_request() {
    let mut backend = MockBackend::start();
    let mock = backend.server.mock("POST", "/book").expect(0).create();
    let storage = MemoryStorage::new();

    let mut flow = filled_dashboard();
    assert_matches!(
        flow.submit(&storage),
        DashboardSubmit::RedirectToLogin(outcome) => {
            assert_eq!(outcome.alert.as_deref(), Some("Please login first"));
            assert_eq!(outcome.navigate, Some(AppView::Login));
        }
    );
    mock.assert();
}

#[test]
fn test_add_book_403_clears_token() {
    let mut backend = MockBackend::start();
    let _mock = backend.json("/book", 403, serde_json::json!({"message": "jwt expired"}));
    let api = backend.api();
    let mut storage = MemoryStorage::new();
    storage::save_token(&mut storage, "stale").unwrap();

    let mut flow = filled_dashboard();
    let DashboardSubmit::Send { token, draft } = flow.submit(&storage) else {
        panic!("expected a request to send");
    };
    let outcome = flow.finish(api.create_book(&token, &draft), &mut storage);

    assert_eq!(outcome, Outcome::navigate(AppView::Login));
    assert_eq!(storage::load_token(&storage), None);
}

#[test]
fn test_add_book_201_appends_cache_and_row() {
    let mut backend = MockBackend::start();
    let _mock = backend.json("/book", 201, book_record(42, "Dune"));
    let api = backend.api();
    let mut storage = MemoryStorage::new();
    storage::save_token(&mut storage, "abc123").unwrap();

    let mut flow = filled_dashboard();
    let DashboardSubmit::Send { token, draft } = flow.submit(&storage) else {
        panic!("expected a request to send");
    };
    let outcome = flow.finish(api.create_book(&token, &draft), &mut storage);

    let expected: Book = serde_json::from_value(book_record(42, "Dune")).unwrap();
    assert_eq!(outcome.alert.as_deref(), Some("Book added successfully"));
    assert_eq!(storage::load_books(&storage), vec![expected]);
    assert_eq!(
        flow.rows().to_vec(),
        vec![BookRow {
            title: "Dune".to_string(),
            quantity: "3".to_string(),
            price: "12.50".to_string(),
            id: "42".to_string(),
        }]
    );
    assert!(!flow.form_visible());
}

#[test]
fn test_app_state_session_survives_restart() {
    let mut backend = MockBackend::start();
    let _login = backend.json("/auth/login", 200, serde_json::json!({"token": "abc123"}));
    let _book = backend.json("/book", 201, book_record(7, "Emma"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local_storage.json");
    let config = bookstore_admin::egui_app::Config::with_builder(
        AppConfig::builder()
            .server_url(backend.server.url())
            .storage_path(path.clone()),
    )
    .unwrap();

    let api: Arc<dyn BookstoreApi> = Arc::new(backend.api());
    let mut state = AppState::new(
        config.clone(),
        Box::new(FileStorage::open(&path).unwrap()),
        Arc::clone(&api),
    );
    assert_eq!(state.current_view, AppView::Login);

    state.login.username = "alice".to_string();
    state.login.password = "secret".to_string();
    state.handle_login(Instant::now());
    settle(&mut state);
    assert_eq!(state.current_view, AppView::Dashboard);

    state.dashboard.toggle_form();
    state.dashboard.draft.title = "Emma".to_string();
    state.dashboard.draft.author = "Jane Austen".to_string();
    state.dashboard.draft.price = "9".to_string();
    state.dashboard.draft.quantity = "1".to_string();
    state.handle_add_book();
    settle(&mut state);
    assert_eq!(state.alert.as_deref(), Some("Book added successfully"));
    drop(state);

    let reopened = AppState::new(config, Box::new(FileStorage::open(&path).unwrap()), api);
    assert_eq!(reopened.current_view, AppView::Dashboard);
    assert_eq!(reopened.dashboard.rows().len(), 1);
    assert_eq!(reopened.dashboard.rows()[0].title, "Emma");
}

fn settle(state: &mut AppState) {
    for _ in 0..500 {
        state.check_pending_results(Instant::now());
        if !state.has_pending() {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("request did not finish");
}
