use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Instant;

use crate::egui_app::api::{BookstoreApi, HttpApi};
use crate::egui_app::auth::{LoginFlow, RegisterFlow};
use crate::egui_app::dashboard::{DashboardFlow, DashboardSubmit};
use crate::egui_app::debug::{DebugCategory, DebugLogger};
use crate::egui_app::storage::{self, FileStorage, MemoryStorage, Storage};
use crate::egui_app::types::{AppView, Outcome};
use crate::egui_app::Config;
use crate::shared::book::Book;
use crate::shared::error::ClientError;

type Pending<T> = Option<Receiver<Result<T, ClientError>>>;

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub current_view: AppView,
    pub login: LoginFlow,
    pub register: RegisterFlow,
    pub dashboard: DashboardFlow,
    /// Blocking message shown in a modal until dismissed
    pub alert: Option<String>,
    pub debug_logger: DebugLogger,
    pub debug_view_expanded: bool,
    pub debug_filter_category: Option<DebugCategory>,
    storage: Box<dyn Storage>,
    api: Arc<dyn BookstoreApi>,
    login_result: Pending<String>,
    register_result: Pending<()>,
    book_result: Pending<Book>,
}

impl AppState {
    pub fn new(config: Config, storage: Box<dyn Storage>, api: Arc<dyn BookstoreApi>) -> Self {
        let debug_logger = DebugLogger::new(1000);
        debug_logger.info(DebugCategory::Other, "AppState initialized");

        let mut state = Self {
            config,
            current_view: AppView::Login,
            login: LoginFlow::new(),
            register: RegisterFlow::new(),
            dashboard: DashboardFlow::new(),
            alert: None,
            debug_logger,
            debug_view_expanded: false,
            debug_filter_category: None,
            storage,
            api,
            login_result: None,
            register_result: None,
            book_result: None,
        };

        if storage::load_token(state.storage.as_ref()).is_some() {
            state.navigate(AppView::Dashboard);
        }
        state
    }

    /// Build the real collaborators from configuration. An unreadable storage
    /// file is moved aside; when the file cannot be used at all the session
    /// falls back to memory.
    pub fn from_config(config: Config) -> Result<Self, ClientError> {
        let path = config.storage_path();
        let storage: Box<dyn Storage> = match FileStorage::open_or_recover(&path) {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "falling back to in-memory storage");
                Box::new(MemoryStorage::new())
            }
        };
        let api = Arc::new(HttpApi::new(config.clone())?);
        Ok(Self::new(config, storage, api))
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub fn has_pending(&self) -> bool {
        self.login_result.is_some() || self.register_result.is_some() || self.book_result.is_some()
    }

    /// Switch pages. The dashboard requires a stored token.
    pub fn navigate(&mut self, view: AppView) {
        let view = if view == AppView::Dashboard
            && storage::load_token(self.storage.as_ref()).is_none()
        {
            self.debug_logger
                .warn(DebugCategory::Auth, "dashboard requires login, redirecting");
            AppView::Login
        } else {
            view
        };

        if view == AppView::Dashboard {
            self.dashboard.load_cached(self.storage.as_ref());
        }
        self.debug_logger
            .debug(DebugCategory::UI, format!("navigate to {:?}", view));
        self.current_view = view;
    }

    fn apply(&mut self, outcome: Outcome) {
        if let Some(message) = outcome.alert {
            self.alert = Some(message);
        }
        if let Some(view) = outcome.navigate {
            self.navigate(view);
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn handle_login(&mut self, now: Instant) {
        let Some(credentials) = self.login.submit(now) else {
            return;
        };
        self.debug_logger.info(
            DebugCategory::Network,
            format!("POST login for {}", credentials.username),
        );

        let api = Arc::clone(&self.api);
        self.login_result = Some(spawn_request(move || api.login(&credentials)));
    }

    pub fn handle_register(&mut self) {
        let Some(request) = self.register.submit() else {
            return;
        };
        self.debug_logger.info(
            DebugCategory::Network,
            format!("POST register for {}", request.username),
        );

        let api = Arc::clone(&self.api);
        self.register_result = Some(spawn_request(move || api.register(&request)));
    }

    pub fn handle_add_book(&mut self) {
        match self.dashboard.submit(self.storage.as_ref()) {
            DashboardSubmit::InFlight => {}
            DashboardSubmit::RedirectToLogin(outcome) | DashboardSubmit::Blocked(outcome) => {
                self.apply(outcome)
            }
            DashboardSubmit::Send { token, draft } => {
                self.debug_logger.info(
                    DebugCategory::Network,
                    format!("POST book \"{}\"", draft.title),
                );
                let api = Arc::clone(&self.api);
                self.book_result = Some(spawn_request(move || api.create_book(&token, &draft)));
            }
        }
    }

    /// Apply any finished requests and expire old login errors. Called once
    /// per frame.
    pub fn check_pending_results(&mut self, now: Instant) {
        if let Some(result) = poll(&mut self.login_result) {
            log_result(&self.debug_logger, DebugCategory::Auth, "login", &result);
            let outcome = self.login.finish(result, self.storage.as_mut(), now);
            self.apply(outcome);
        }

        if let Some(result) = poll(&mut self.register_result) {
            log_result(&self.debug_logger, DebugCategory::Auth, "registration", &result);
            let outcome = self.register.finish(result);
            self.apply(outcome);
        }

        if let Some(result) = poll(&mut self.book_result) {
            log_result(&self.debug_logger, DebugCategory::Books, "add book", &result);
            let outcome = self.dashboard.finish(result, self.storage.as_mut());
            self.apply(outcome);
        }

        self.login.expire_errors(now, self.config.error_display());
    }

    pub fn logout(&mut self) {
        if let Err(e) = storage::clear_token(self.storage.as_mut()) {
            self.debug_logger
                .error(DebugCategory::Storage, format!("failed to clear token: {}", e));
        }
        self.debug_logger.info(DebugCategory::Auth, "logged out");
        self.login = LoginFlow::new();
        self.dashboard.reset();
        self.navigate(AppView::Login);
    }
}

fn spawn_request<T, F>(request: F) -> Receiver<Result<T, ClientError>>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ClientError> + Send + 'static,
{
    let (tx, rx) = channel();
    std::thread::spawn(move || {
        let _ = tx.send(request());
    });
    rx
}

fn poll<T>(slot: &mut Pending<T>) -> Option<Result<T, ClientError>> {
    let rx = slot.as_ref()?;
    let result = match rx.try_recv() {
        Ok(result) => result,
        Err(TryRecvError::Empty) => return None,
        Err(TryRecvError::Disconnected) => Err(ClientError::network("request worker stopped")),
    };
    *slot = None;
    Some(result)
}

fn log_result<T>(logger: &DebugLogger, category: DebugCategory, what: &str, result: &Result<T, ClientError>) {
    match result {
        Ok(_) => logger.info(category, format!("✓ {} succeeded", what)),
        Err(e) => logger.error(category, format!("✗ {} failed: {}", what, e)),
    }
}
