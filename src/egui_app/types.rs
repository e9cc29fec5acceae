/**
 * Shared Types Module
 *
 * App view states, request/response bodies for the auth endpoints, and the
 * `Outcome` a flow hands back to the app shell.
 */

use serde::{Deserialize, Serialize};

/// Current app view/page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login page
    Login,
    /// Registration page
    Register,
    /// Product listing with the add-book form
    Dashboard,
}

/// Login request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Registration request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Successful login response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Error body returned by the backend on failure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Side effects a flow asks the shell to perform
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub alert: Option<String>,
    pub navigate: Option<AppView>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn alert(message: impl Into<String>) -> Self {
        Self {
            alert: Some(message.into()),
            navigate: None,
        }
    }

    pub fn navigate(view: AppView) -> Self {
        Self {
            alert: None,
            navigate: Some(view),
        }
    }

    pub fn and_navigate(mut self, view: AppView) -> Self {
        self.navigate = Some(view);
        self
    }
}
