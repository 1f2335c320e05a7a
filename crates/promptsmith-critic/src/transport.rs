use std::error::Error as StdError;

use async_trait::async_trait;
use promptsmith_credentials::Credential;
use thiserror::Error;
use tracing::debug;

use crate::wire::{ErrorEnvelope, ResponsesRequest, ResponsesResponse};

/// Default API root
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Failures while talking to the completion endpoint
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Response contained no output text")]
    EmptyOutput,
}

/// One round trip to a text-generation endpoint
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    /// Send the request and return the generated text
    async fn create_response(&self, request: &ResponsesRequest) -> Result<String, TransportError>;
}

/// `reqwest`-backed transport bound to a single credential
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
    credential: Credential,
}

impl HttpTransport {
    pub fn new(credential: Credential, api_base: &str) -> Self {
        Self::with_client(reqwest::Client::new(), credential, api_base)
    }

    /// Use a preconfigured `reqwest` client
    pub fn with_client(http: reqwest::Client, credential: Credential, api_base: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}/responses", api_base.trim_end_matches('/')),
            credential,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionTransport for HttpTransport {
    async fn create_response(&self, request: &ResponsesRequest) -> Result<String, TransportError> {
        debug!(endpoint = %self.endpoint, model = %request.model, "Sending request");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(self.credential.expose())
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Request(describe_error(&e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(describe_error(&e)))?;

        debug!(status = status.as_u16(), body_len = body.len(), "Received response");

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            let message = if message.trim().is_empty() {
                status.canonical_reason().unwrap_or("no response body").to_string()
            } else {
                message
            };
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ResponsesResponse =
            serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))?;

        if let Some(error) = parsed.error.as_ref() {
            return Err(TransportError::Api(error.message.clone()));
        }

        parsed.output_text().ok_or(TransportError::EmptyOutput)
    }
}

/// Error text with every cause in the source chain.
///
/// reqwest's own message names only the URL; the reason, such as a refused
/// connection, lives further down the chain.
fn describe_error(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
