//! Per-field feedback shown next to form inputs.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crate::shared::validation::{Field, FieldCheck, ValidationReport};

static IDLE: FieldFeedback = FieldFeedback::Idle;

/// What the view shows beside one input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFeedback {
    /// Neutral styling, no message
    Idle,
    /// Red border and message; `shown_at` drives auto-hide when set
    Error {
        message: String,
        shown_at: Option<Instant>,
    },
    /// Accent border, no message
    Success,
}

impl FieldFeedback {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            FieldFeedback::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FieldFeedback::Error { .. })
    }
}

/// Feedback for every field of one form
#[derive(Debug, Clone, Default)]
pub struct FormFeedback {
    fields: BTreeMap<Field, FieldFeedback>,
}

impl FormFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &FieldFeedback {
        self.fields.get(&field).unwrap_or(&IDLE)
    }

    pub fn error_message(&self, field: Field) -> Option<&str> {
        self.get(field).error_message()
    }

    /// Show an error; pass `now` when the error should expire later.
    pub fn show_error(&mut self, field: Field, message: impl Into<String>, now: Option<Instant>) {
        self.fields.insert(
            field,
            FieldFeedback::Error {
                message: message.into(),
                shown_at: now,
            },
        );
    }

    pub fn set_success(&mut self, field: Field) {
        self.fields.insert(field, FieldFeedback::Success);
    }

    pub fn hide(&mut self, field: Field) {
        self.fields.insert(field, FieldFeedback::Idle);
    }

    /// Errors become `Error`; passing checks become `Success` or `Idle`.
    pub fn apply_check(
        &mut self,
        field: Field,
        check: &FieldCheck,
        mark_success: bool,
        now: Option<Instant>,
    ) {
        match check {
            FieldCheck::Error(message) => self.show_error(field, message.clone(), now),
            FieldCheck::Ok if mark_success => self.set_success(field),
            FieldCheck::Ok => self.hide(field),
        }
    }

    pub fn apply_report(&mut self, report: &ValidationReport, mark_success: bool, now: Option<Instant>) {
        for (field, check) in report.iter() {
            self.apply_check(field, check, mark_success, now);
        }
    }

    /// Hide timed errors older than `ttl`
    pub fn expire(&mut self, now: Instant, ttl: Duration) {
        for feedback in self.fields.values_mut() {
            if let FieldFeedback::Error {
                shown_at: Some(shown_at),
                ..
            } = feedback
            {
                if now.saturating_duration_since(*shown_at) >= ttl {
                    *feedback = FieldFeedback::Idle;
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn has_errors(&self) -> bool {
        self.fields.values().any(FieldFeedback::is_error)
    }
}
