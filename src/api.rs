//! HTTP transport for the wishlist service
//!
//! Requests are executed as spawned tasks; each one folds its outcome into
//! exactly one completion action. Once issued, a request cannot be
//! cancelled, and nothing correlates a response to the submission that
//! caused it.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::action::{Action, Operation};
use crate::request::ApiRequest;

#[derive(Debug)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    Transport(reqwest::Error),
    /// The server answered with a non-success status.
    Application {
        status: StatusCode,
        message: Option<String>,
    },
    /// Success status, but the body is not what the operation expects.
    Malformed(String),
}

impl ApiError {
    /// Server-provided text suitable for the flash channel. Transport and
    /// malformed-body failures carry none and fall back to the generic
    /// message in the reducer.
    pub fn server_message(&self) -> Option<String> {
        match self {
            ApiError::Application { message, .. } => message.clone(),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "request failed: {}", e),
            ApiError::Application {
                status,
                message: Some(text),
            } => write!(f, "server rejected request ({}): {}", status, text),
            ApiError::Application {
                status,
                message: None,
            } => write!(f, "server rejected request ({})", status),
            ApiError::Malformed(detail) => write!(f, "unexpected response body: {}", detail),
        }
    }
}

impl std::error::Error for ApiError {}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Execute the request and fold the outcome into the completion action
    /// for `op`. Always yields exactly one action; failure detail is logged
    /// here and reduced to the message the flash channel may show.
    pub async fn execute(&self, op: Operation, request: ApiRequest) -> Action {
        match self.complete(op, &request).await {
            Ok(action) => action,
            Err(error) => {
                warn!(op = op.name(), %error, "request failed");
                Action::RequestDidFail {
                    op,
                    message: error.server_message(),
                }
            }
        }
    }

    async fn complete(&self, op: Operation, request: &ApiRequest) -> Result<Action, ApiError> {
        let body = self.send(request).await?;
        Ok(match op {
            // the delete response body is ignored
            Operation::Delete => Action::DeleteDidSucceed,
            Operation::Search => Action::SearchDidLoad(decode(&body)?),
            Operation::Create | Operation::Update | Operation::Retrieve => {
                Action::WishlistDidLoad(op, decode(&body)?)
            }
            Operation::AddItem | Operation::Purchase => Action::ItemDidLoad(op, decode(&body)?),
        })
    }

    async fn send(&self, request: &ApiRequest) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut call = self.http.request(request.method.clone(), &url);
        if let Some(body) = &request.body {
            call = call.json(body);
        }
        let response = call.send().await.map_err(ApiError::Transport)?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::Transport)?;
        if status.is_success() {
            Ok(text)
        } else {
            Err(ApiError::Application {
                status,
                message: error_message(&text),
            })
        }
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// Failure bodies are expected to carry a `message` field; its absence must
/// not take the client down.
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(Value::as_str).map(str::to_string))
}
