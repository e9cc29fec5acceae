/**
 * Bookstore API Client
 *
 * HTTP client for the three backend endpoints the app uses: login,
 * registration and book creation. Calls block the calling thread; the app
 * state runs them on a worker thread and polls for the result.
 */

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::runtime::Runtime;

use crate::egui_app::config::{Config, BOOK_PATH, LOGIN_PATH, REGISTER_PATH};
use crate::egui_app::types::{Credentials, ErrorBody, LoginResponse, RegistrationRequest};
use crate::shared::book::{Book, BookDraft};
use crate::shared::error::ClientError;

/// Backend operations used by the flows
pub trait BookstoreApi: Send + Sync {
    /// Exchange credentials for a token
    fn login(&self, credentials: &Credentials) -> Result<String, ClientError>;

    /// Create an account
    fn register(&self, request: &RegistrationRequest) -> Result<(), ClientError>;

    /// Create a book; a rejected token comes back as `ClientError::Forbidden`
    fn create_book(&self, token: &str, draft: &BookDraft) -> Result<Book, ClientError>;
}

/// reqwest-backed implementation
pub struct HttpApi {
    config: Config,
    client: Client,
    runtime: Runtime,
}

impl HttpApi {
    pub fn new(config: Config) -> Result<Self, ClientError> {
        let runtime = Runtime::new()
            .map_err(|e| ClientError::network(format!("Failed to create runtime: {}", e)))?;
        Ok(Self {
            config,
            client: Client::new(),
            runtime,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn post<B, T>(&self, path: &str, token: Option<&str>, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.runtime.block_on(self.send(path, token, body))
    }

    async fn send<B, T>(&self, path: &str, token: Option<&str>, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.api_url(path);

        let mut request = self.client.post(&url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        tracing::debug!(%url, status = status.as_u16(), "backend responded");

        decode_response(status, &text)
    }
}

/// Map a status and raw body to the typed result.
///
/// 403 always means the token was rejected, whatever the body says.
fn decode_response<T: DeserializeOwned>(status: StatusCode, text: &str) -> Result<T, ClientError> {
    if status == StatusCode::FORBIDDEN {
        return Err(ClientError::Forbidden);
    }

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(text)
            .ok()
            .and_then(|body| body.message);
        return Err(ClientError::status(status.as_u16(), message));
    }

    let text = if text.trim().is_empty() { "null" } else { text };
    Ok(serde_json::from_str(text)?)
}

impl BookstoreApi for HttpApi {
    fn login(&self, credentials: &Credentials) -> Result<String, ClientError> {
        let response: LoginResponse = self.post(LOGIN_PATH, None, credentials)?;
        Ok(response.token)
    }

    fn register(&self, request: &RegistrationRequest) -> Result<(), ClientError> {
        let _: serde_json::Value = self.post(REGISTER_PATH, None, request)?;
        Ok(())
    }

    fn create_book(&self, token: &str, draft: &BookDraft) -> Result<Book, ClientError> {
        self.post(BOOK_PATH, Some(token), draft)
    }
}
