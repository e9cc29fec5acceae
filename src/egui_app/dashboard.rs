//! Dashboard Flow
//!
//! State behind the product listing page: the visible book table and the
//! add-book form that the add button, the cancel button and the backdrop all
//! toggle. Rows carry edit/delete controls that have no behavior.

use crate::egui_app::storage::{self, Storage};
use crate::egui_app::types::{AppView, Outcome};
use crate::shared::book::{Book, BookDraft, BookRow};
use crate::shared::error::ClientError;
use crate::shared::validation;

pub const LOGIN_REQUIRED: &str = "Please login first";
pub const FIELDS_REQUIRED: &str = "Please fill required fields";
pub const BOOK_ADDED: &str = "Book added successfully";
pub const BOOK_FAILED: &str = "Error adding book";

/// What pressing "add book" resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardSubmit {
    /// A request is already pending
    InFlight,
    /// No stored token; go log in
    RedirectToLogin(Outcome),
    /// Required fields missing
    Blocked(Outcome),
    /// Send this draft with this token
    Send { token: String, draft: BookDraft },
}

#[derive(Debug, Clone, Default)]
pub struct DashboardFlow {
    pub draft: BookDraft,
    rows: Vec<BookRow>,
    form_visible: bool,
    in_flight: bool,
}

impl DashboardFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[BookRow] {
        &self.rows
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn toggle_form(&mut self) {
        self.form_visible = !self.form_visible;
    }

    /// Replace the table with the cached books
    pub fn load_cached(&mut self, storage: &dyn Storage) {
        self.rows = storage::load_books(storage).iter().map(BookRow::from).collect();
        tracing::debug!(rows = self.rows.len(), "loaded cached books");
    }

    pub fn submit(&mut self, storage: &dyn Storage) -> DashboardSubmit {
        if self.in_flight {
            return DashboardSubmit::InFlight;
        }

        let Some(token) = storage::load_token(storage) else {
            tracing::info!("add book without token, redirecting to login");
            self.close_form();
            return DashboardSubmit::RedirectToLogin(
                Outcome::alert(LOGIN_REQUIRED).and_navigate(AppView::Login),
            );
        };

        if !validation::validate_book_draft(&self.draft).is_valid() {
            return DashboardSubmit::Blocked(Outcome::alert(FIELDS_REQUIRED));
        }

        self.in_flight = true;
        DashboardSubmit::Send {
            token,
            draft: self.draft.clone(),
        }
    }

    pub fn finish(&mut self, result: Result<Book, ClientError>, storage: &mut dyn Storage) -> Outcome {
        self.in_flight = false;

        let book = match result {
            Ok(book) => book,
            Err(e) if e.is_authorization() => {
                tracing::warn!("book endpoint rejected token, clearing session");
                if let Err(e) = storage::clear_token(storage) {
                    tracing::error!(error = %e, "failed to clear token");
                }
                self.close_form();
                return Outcome::navigate(AppView::Login);
            }
            Err(e) => {
                tracing::warn!(error = %e, "adding book failed");
                return Outcome::alert(e.user_message(BOOK_FAILED));
            }
        };

        tracing::info!(title = %book.title, id = %book.display_id(), "book added");
        let cached = storage::append_book(storage, &book);
        self.rows.push(BookRow::from(&book));
        self.close_form();

        match cached {
            Ok(()) => Outcome::alert(BOOK_ADDED),
            Err(e) => {
                tracing::error!(error = %e, "failed to cache book");
                Outcome::alert(format!("{} ({})", BOOK_ADDED, e))
            }
        }
    }

    fn close_form(&mut self) {
        self.draft = BookDraft::default();
        self.form_visible = false;
    }

    /// Drop table and form contents, e.g. on logout
    pub fn reset(&mut self) {
        *self = Self {
            in_flight: self.in_flight,
            ..Self::default()
        };
    }
}
