/**
 * Authentication Module
 *
 * Form state for the login and registration pages. The flows validate input,
 * hand back the request to send, and turn the backend's answer into an
 * `Outcome` for the app shell. They never perform I/O themselves apart from
 * persisting the issued token.
 */

use std::time::{Duration, Instant};

use crate::egui_app::form::FormFeedback;
use crate::egui_app::storage::{self, Storage};
use crate::egui_app::types::{AppView, Credentials, Outcome, RegistrationRequest};
use crate::shared::error::ClientError;
use crate::shared::validation::{self, Field};

pub const LOGIN_FAILED: &str = "Incorrect username or password";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const REGISTRATION_SUCCEEDED: &str = "Registration successful!";

/// Login page state
#[derive(Debug, Clone, Default)]
pub struct LoginFlow {
    pub username: String,
    pub password: String,
    pub feedback: FormFeedback,
    loading: bool,
    in_flight: bool,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Typing into a field hides its error
    pub fn on_input(&mut self, field: Field) {
        self.feedback.hide(field);
    }

    /// Validate and, when the form is valid, return the credentials to send.
    ///
    /// Returns `None` while a previous request is still pending.
    pub fn submit(&mut self, now: Instant) -> Option<Credentials> {
        if self.in_flight {
            tracing::debug!("login already in flight, ignoring submit");
            return None;
        }

        let report = validation::validate_login(&self.username, &self.password);
        self.feedback.apply_report(&report, false, Some(now));
        if !report.is_valid() {
            return None;
        }

        self.loading = true;
        self.in_flight = true;
        Some(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Apply the backend's answer. Loading is cleared whatever happened.
    pub fn finish(
        &mut self,
        result: Result<String, ClientError>,
        storage: &mut dyn Storage,
        now: Instant,
    ) -> Outcome {
        self.loading = false;
        self.in_flight = false;

        let persisted = result.and_then(|token| storage::save_token(storage, &token));
        match persisted {
            Ok(()) => {
                tracing::info!(username = %self.username, "login succeeded");
                self.password.clear();
                self.feedback.clear();
                Outcome::navigate(AppView::Dashboard)
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                self.feedback
                    .show_error(Field::Password, e.user_message(LOGIN_FAILED), Some(now));
                Outcome::none()
            }
        }
    }

    pub fn expire_errors(&mut self, now: Instant, ttl: Duration) {
        self.feedback.expire(now, ttl);
    }
}

/// Registration page state
#[derive(Debug, Clone, Default)]
pub struct RegisterFlow {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub feedback: FormFeedback,
    in_flight: bool,
}

impl RegisterFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Live validation of the field the user just edited
    pub fn on_input(&mut self, field: Field) {
        let check = match field {
            Field::Username => validation::check_required(Field::Username, &self.username, 0),
            Field::Password => validation::check_required(
                Field::Password,
                &self.password,
                validation::MIN_PASSWORD_LEN,
            ),
            Field::ConfirmPassword => {
                validation::validate_confirmation_live(&self.password, &self.confirm_password)
            }
            _ => return,
        };
        self.feedback.apply_check(field, &check, true, None);
    }

    /// Validate the whole form and return the trimmed request when valid.
    pub fn submit(&mut self) -> Option<RegistrationRequest> {
        if self.in_flight {
            tracing::debug!("registration already in flight, ignoring submit");
            return None;
        }

        let report = validation::validate_registration(
            &self.username,
            &self.password,
            &self.confirm_password,
        );
        self.feedback.apply_report(&report, true, None);
        if !report.is_valid() {
            return None;
        }

        self.in_flight = true;
        Some(RegistrationRequest {
            username: self.username.trim().to_string(),
            password: self.password.trim().to_string(),
            confirm_password: self.confirm_password.trim().to_string(),
        })
    }

    pub fn finish(&mut self, result: Result<(), ClientError>) -> Outcome {
        self.in_flight = false;
        match result {
            Ok(()) => {
                tracing::info!(username = %self.username.trim(), "registration succeeded");
                *self = Self::default();
                Outcome::alert(REGISTRATION_SUCCEEDED).and_navigate(AppView::Login)
            }
            Err(e) => {
                tracing::warn!(error = %e, "registration failed");
                Outcome::alert(format!(
                    "Registration failed: {}",
                    e.user_message(REGISTRATION_FAILED)
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::form::FieldFeedback;
    use crate::egui_app::storage::MemoryStorage;

    fn login_flow(username: &str, password: &str) -> LoginFlow {
        LoginFlow {
            username: username.to_string(),
            password: password.to_string(),
            ..LoginFlow::default()
        }
    }

    fn register_flow(username: &str, password: &str, confirm: &str) -> RegisterFlow {
        RegisterFlow {
            username: username.to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
            ..RegisterFlow::default()
        }
    }

    #[test]
    fn test_login_empty_fields_blocked() {
        let mut flow = login_flow("", "");
        assert!(flow.submit(Instant::now()).is_none());
        assert!(!flow.is_loading());
        assert_eq!(
            flow.feedback.error_message(Field::Username),
            Some("Please enter Username")
        );
        assert_eq!(
            flow.feedback.error_message(Field::Password),
            Some("Please enter Password")
        );
    }

    #[test]
    fn test_login_short_password_blocked() {
        let mut flow = login_flow("alice", "abc");
        assert!(flow.submit(Instant::now()).is_none());
        assert_eq!(
            flow.feedback.error_message(Field::Password),
            Some("Password must be at least 4 characters")
        );
    }

    #[test]
    fn test_login_validation_errors_auto_clear() {
        let mut flow = login_flow("", "abcd");
        let start = Instant::now();
        flow.submit(start);
        assert!(flow.feedback.has_errors());

        flow.expire_errors(start + Duration::from_secs(5), Duration::from_secs(5));
        assert!(!flow.feedback.has_errors());
    }

    #[test]
    fn test_login_input_hides_error() {
        let mut flow = login_flow("", "abcd");
        flow.submit(Instant::now());
        flow.on_input(Field::Username);
        assert_eq!(flow.feedback.get(Field::Username), &FieldFeedback::Idle);
    }

    #[test]
    fn test_login_double_submit_guarded() {
        let mut flow = login_flow("alice", "secret");
        let first = flow.submit(Instant::now());
        assert_eq!(
            first,
            Some(Credentials {
                username: "alice".to_string(),
                password: "secret".to_string()
            })
        );
        assert!(flow.is_loading());
        assert!(flow.submit(Instant::now()).is_none());
    }

    #[test]
    fn test_login_success_stores_token() {
        let mut storage = MemoryStorage::new();
        let mut flow = login_flow("alice", "secret");
        flow.submit(Instant::now());

        let outcome = flow.finish(Ok("abc123".to_string()), &mut storage, Instant::now());
        assert_eq!(outcome, Outcome::navigate(AppView::Dashboard));
        assert_eq!(storage::load_token(&storage), Some("abc123".to_string()));
        assert!(!flow.is_loading());
        assert!(!flow.in_flight());
    }

    #[test]
    fn test_login_failure_shows_server_message() {
        let mut storage = MemoryStorage::new();
        let mut flow = login_flow("alice", "secret");
        flow.submit(Instant::now());

        let error = ClientError::status(401, Some("bad credentials".to_string()));
        let outcome = flow.finish(Err(error), &mut storage, Instant::now());
        assert_eq!(outcome, Outcome::none());
        assert_eq!(
            flow.feedback.error_message(Field::Password),
            Some("bad credentials")
        );
        assert_eq!(storage::load_token(&storage), None);
        assert!(!flow.is_loading());
    }

    #[test]
    fn test_login_failure_default_message() {
        let mut storage = MemoryStorage::new();
        let mut flow = login_flow("alice", "secret");
        flow.submit(Instant::now());

        flow.finish(Err(ClientError::status(500, None)), &mut storage, Instant::now());
        assert_eq!(flow.feedback.error_message(Field::Password), Some(LOGIN_FAILED));
    }

    #[test]
    fn test_register_live_validation_marks_success() {
        let mut flow = register_flow("alice", "", "");
        flow.on_input(Field::Username);
        assert_eq!(flow.feedback.get(Field::Username), &FieldFeedback::Success);

        flow.password = "abc".to_string();
        flow.on_input(Field::Password);
        assert_eq!(
            flow.feedback.error_message(Field::Password),
            Some("Password must be at least 4 characters")
        );
    }

    #[test]
    fn test_register_live_confirm_checks_match() {
        let mut flow = register_flow("alice", "secret", "secre");
        flow.on_input(Field::ConfirmPassword);
        assert_eq!(
            flow.feedback.error_message(Field::ConfirmPassword),
            Some("Passwords do not match")
        );

        flow.confirm_password.push('t');
        flow.on_input(Field::ConfirmPassword);
        assert_eq!(flow.feedback.get(Field::ConfirmPassword), &FieldFeedback::Success);
    }

    #[test]
    fn test_register_mismatch_blocks_submit() {
        let mut flow = register_flow("alice", "secret", "other");
        assert!(flow.submit().is_none());
        assert!(!flow.in_flight());
        assert_eq!(
            flow.feedback.error_message(Field::ConfirmPassword),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_register_sends_trimmed_values() {
        let mut flow = register_flow("  alice ", "secret ", "secret ");
        let request = flow.submit().unwrap();
        assert_eq!(
            request,
            RegistrationRequest {
                username: "alice".to_string(),
                password: "secret".to_string(),
                confirm_password: "secret".to_string(),
            }
        );
        assert!(flow.submit().is_none());
    }

    #[test]
    fn test_register_success_alerts_and_goes_to_login() {
        let mut flow = register_flow("alice", "secret", "secret");
        flow.submit();
        let outcome = flow.finish(Ok(()));
        assert_eq!(
            outcome,
            Outcome::alert(REGISTRATION_SUCCEEDED).and_navigate(AppView::Login)
        );
        assert!(flow.username.is_empty());
    }

    #[test]
    fn test_register_failure_alerts_server_message() {
        let mut flow = register_flow("alice", "secret", "secret");
        flow.submit();
        let outcome = flow.finish(Err(ClientError::status(
            409,
            Some("username taken".to_string()),
        )));
        assert_eq!(
            outcome,
            Outcome::alert("Registration failed: username taken")
        );
        assert!(!flow.in_flight());
        assert_eq!(flow.username, "alice");
    }
}
