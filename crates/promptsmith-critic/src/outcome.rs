/// Result of one critique call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CritiqueOutcome {
    /// The model answered; `text` is its output, unmodified
    Completed { text: String },
    /// The request failed; `error` carries the underlying message
    Failed { error: String },
}

impl CritiqueOutcome {
    pub fn completed(text: impl Into<String>) -> Self {
        CritiqueOutcome::Completed { text: text.into() }
    }

    pub fn failed(error: impl ToString) -> Self {
        CritiqueOutcome::Failed {
            error: error.to_string(),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, CritiqueOutcome::Completed { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CritiqueOutcome::Failed { .. })
    }

    /// Text to show the user: the output, or `Error: <message>`
    pub fn into_text(self) -> String {
        match self {
            CritiqueOutcome::Completed { text } => text,
            CritiqueOutcome::Failed { error } => format!("Error: {}", error),
        }
    }
}

impl std::fmt::Display for CritiqueOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CritiqueOutcome::Completed { text } => f.write_str(text),
            CritiqueOutcome::Failed { error } => write!(f, "Error: {}", error),
        }
    }
}
