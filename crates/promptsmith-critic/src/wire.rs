//! Request and response bodies for the Responses endpoint.

use serde::{Deserialize, Serialize};

use crate::CritiquePrompts;

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "gpt-5-nano";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputMessage {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextFormat {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextOptions {
    pub format: TextFormat,
    pub verbosity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReasoningOptions {
    pub effort: String,
    /// Serialized as `null` to disable reasoning summaries
    pub summary: Option<String>,
}

/// Body of `POST /responses`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponsesRequest {
    pub model: String,
    pub input: Vec<InputMessage>,
    pub text: TextOptions,
    pub reasoning: ReasoningOptions,
    pub store: bool,
}

impl ResponsesRequest {
    /// Critique request for `prompt`: plain text output, low verbosity,
    /// low reasoning effort, not stored by the provider.
    pub fn critique(model: &str, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            input: vec![
                InputMessage {
                    role: Role::System,
                    content: CritiquePrompts::system_instruction().to_string(),
                },
                InputMessage {
                    role: Role::User,
                    content: CritiquePrompts::user_message(prompt),
                },
            ],
            text: TextOptions {
                format: TextFormat {
                    kind: "text".into(),
                },
                verbosity: "low".into(),
            },
            reasoning: ReasoningOptions {
                effort: "low".into(),
                summary: None,
            },
            store: false,
        }
    }
}

/// The subset of a Responses payload we read
#[derive(Debug, Deserialize)]
pub struct ResponsesResponse {
    #[serde(default)]
    pub output: Vec<OutputItem>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct OutputItem {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: String,
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiError,
}

impl ResponsesResponse {
    /// Concatenate every `output_text` part of every `message` item.
    ///
    /// Returns `None` when the payload carries no output text at all.
    pub fn output_text(&self) -> Option<String> {
        let parts: Vec<&str> = self
            .output
            .iter()
            .filter(|item| item.kind == "message")
            .flat_map(|item| item.content.iter())
            .filter(|part| part.kind == "output_text")
            .filter_map(|part| part.text.as_deref())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.concat())
        }
    }
}
