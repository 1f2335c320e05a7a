use std::time::Instant;

use async_trait::async_trait;
use promptsmith_credentials::Credential;
use tracing::{debug, info, warn};

use crate::transport::{CompletionTransport, HttpTransport, DEFAULT_API_BASE};
use crate::wire::{ResponsesRequest, DEFAULT_MODEL};
use crate::CritiqueOutcome;

/// Anything that can critique a prompt.
///
/// Implementations never fail past this boundary: every problem is folded
/// into [`CritiqueOutcome::Failed`].
#[async_trait]
pub trait Critic: Send + Sync {
    async fn critique(&self, prompt: &str) -> CritiqueOutcome;
}

/// Settings for the HTTP-backed client
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub model: String,
    pub api_base: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ClientSettings {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

/// Critique client bound to one transport (and so one credential)
pub struct CritiqueClient {
    transport: Box<dyn CompletionTransport>,
    model: String,
}

impl CritiqueClient {
    pub fn new(credential: Credential, settings: ClientSettings) -> Self {
        let transport = HttpTransport::new(credential, &settings.api_base);
        Self::with_transport(Box::new(transport), settings.model)
    }

    pub fn with_transport(
        transport: Box<dyn CompletionTransport>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            model: model.into(),
        }
    }
}

#[async_trait]
impl Critic for CritiqueClient {
    async fn critique(&self, prompt: &str) -> CritiqueOutcome {
        let request = ResponsesRequest::critique(&self.model, prompt);

        debug!(
            prompt_chars = prompt.chars().count(),
            model = %self.model,
            "Running critique"
        );

        let started = Instant::now();
        match self.transport.create_response(&request).await {
            Ok(text) => {
                info!(
                    output_chars = text.chars().count(),
                    duration_secs = started.elapsed().as_secs_f64(),
                    "Critique completed"
                );
                CritiqueOutcome::completed(text)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    duration_secs = started.elapsed().as_secs_f64(),
                    "Critique failed"
                );
                CritiqueOutcome::failed(e)
            }
        }
    }
}
