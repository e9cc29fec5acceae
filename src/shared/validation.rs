//! Form Validation
//!
//! Pure field checks shared by every form. The same functions back the live
//! (per keystroke) and the on-submit validation so the two can never disagree.

use std::collections::BTreeMap;
use std::fmt;

use crate::shared::book::BookDraft;

/// Minimum password length accepted by login and registration
pub const MIN_PASSWORD_LEN: usize = 4;

/// Every input the forms validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Password,
    ConfirmPassword,
    Title,
    Author,
    Summary,
    Price,
    Quantity,
}

impl Field {
    /// Label used in messages and as input hint
    pub fn label(self) -> &'static str {
        match self {
            Field::Username => "Username",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm password",
            Field::Title => "Book name",
            Field::Author => "Author name",
            Field::Summary => "Summary",
            Field::Price => "Price",
            Field::Quantity => "Quantity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of checking one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCheck {
    Ok,
    Error(String),
}

impl FieldCheck {
    pub fn is_ok(&self) -> bool {
        matches!(self, FieldCheck::Ok)
    }
}

/// Per-field outcome of validating a whole form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    checks: BTreeMap<Field, FieldCheck>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, check: FieldCheck) {
        self.checks.insert(field, check);
    }

    pub fn is_valid(&self) -> bool {
        self.checks.values().all(FieldCheck::is_ok)
    }

    pub fn get(&self, field: Field) -> Option<&FieldCheck> {
        self.checks.get(&field)
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        match self.checks.get(&field) {
            Some(FieldCheck::Error(message)) => Some(message),
            _ => None,
        }
    }

    /// Failing fields with their messages, in field order
    pub fn errors(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.checks.iter().filter_map(|(field, check)| match check {
            FieldCheck::Error(message) => Some((*field, message.as_str())),
            FieldCheck::Ok => None,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldCheck)> + '_ {
        self.checks.iter().map(|(field, check)| (*field, check))
    }
}

/// Check that `value` is non-blank and, when `min_len > 0`, long enough.
///
/// Blankness is judged on the trimmed value; length on the raw value.
pub fn check_required(field: Field, value: &str, min_len: usize) -> FieldCheck {
    if value.trim().is_empty() {
        return FieldCheck::Error(format!("Please enter {}", field.label()));
    }
    if min_len > 0 && value.chars().count() < min_len {
        return FieldCheck::Error(format!(
            "{} must be at least {} characters",
            field.label(),
            min_len
        ));
    }
    FieldCheck::Ok
}

/// Check that `value` is not empty. Whitespace counts as content.
pub fn check_present(field: Field, value: &str) -> FieldCheck {
    if value.is_empty() {
        FieldCheck::Error(format!("Please enter {}", field.label()))
    } else {
        FieldCheck::Ok
    }
}

/// Cross-field check between password and its confirmation
pub fn check_match(password: &str, confirm: &str) -> FieldCheck {
    if password == confirm {
        FieldCheck::Ok
    } else {
        FieldCheck::Error("Passwords do not match".to_string())
    }
}

pub fn validate_login(username: &str, password: &str) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.insert(Field::Username, check_required(Field::Username, username, 0));
    report.insert(
        Field::Password,
        check_required(Field::Password, password, MIN_PASSWORD_LEN),
    );
    report
}

/// Individual checks first; the match check only runs once they all pass.
pub fn validate_registration(username: &str, password: &str, confirm: &str) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.insert(Field::Username, check_required(Field::Username, username, 0));
    report.insert(
        Field::Password,
        check_required(Field::Password, password, MIN_PASSWORD_LEN),
    );
    report.insert(
        Field::ConfirmPassword,
        check_required(Field::ConfirmPassword, confirm, 0),
    );
    if report.is_valid() {
        report.insert(Field::ConfirmPassword, check_match(password, confirm));
    }
    report
}

/// Check for the confirmation input while the user is typing in it.
pub fn validate_confirmation_live(password: &str, confirm: &str) -> FieldCheck {
    let check = check_required(Field::ConfirmPassword, confirm, 0);
    if !check.is_ok() || password.is_empty() {
        return check;
    }
    check_match(password, confirm)
}

/// Title, author, price and quantity must be non-empty; summary is optional.
pub fn validate_book_draft(draft: &BookDraft) -> ValidationReport {
    let mut report = ValidationReport::new();
    report.insert(Field::Title, check_present(Field::Title, &draft.title));
    report.insert(Field::Author, check_present(Field::Author, &draft.author));
    report.insert(Field::Summary, FieldCheck::Ok);
    report.insert(Field::Price, check_present(Field::Price, &draft.price));
    report.insert(Field::Quantity, check_present(Field::Quantity, &draft.quantity));
    report
}
