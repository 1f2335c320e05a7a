use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// How the critique was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    Repl,
    OneShot,
    Web,
    Api,
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Surface::Repl => write!(f, "repl"),
            Surface::OneShot => write!(f, "one-shot"),
            Surface::Web => write!(f, "web"),
            Surface::Api => write!(f, "api"),
        }
    }
}

/// Structured log events for a promptsmith process.
///
/// Events never carry the credential or the prompt text itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEvent {
    CredentialResolved {
        source: String,
    },
    CredentialMissing {
        sources: Vec<String>,
    },
    CritiqueStarted {
        request_id: String,
        surface: Surface,
        prompt_chars: usize,
    },
    CritiqueCompleted {
        request_id: String,
        output_chars: usize,
        duration_secs: f64,
    },
    CritiqueFailed {
        request_id: String,
        error: String,
        duration_secs: f64,
    },
    ServerListening {
        address: String,
        model: String,
    },
}

impl LogEvent {
    /// Add a timestamp to serialize with the event
    pub fn with_timestamp(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(self).unwrap_or_default();
        if let Some(obj) = value.as_object_mut() {
            obj.insert(
                "timestamp".to_string(),
                serde_json::Value::String(chrono::Utc::now().to_rfc3339()),
            );
        }
        value
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors
    #[default]
    Pretty,
    /// JSON lines format for machine consumption
    Json,
    /// Compact single-line format
    Compact,
}

/// Writes [`LogEvent`]s to stderr in the configured format
#[derive(Debug, Clone, Copy, Default)]
pub struct Logger {
    format: LogFormat,
}

impl Logger {
    pub fn new(format: LogFormat) -> Self {
        Self { format }
    }

    pub fn log(&self, event: &LogEvent) {
        if let Some(line) = self.render(event) {
            let _ = writeln!(std::io::stderr(), "{}", line);
        }
    }

    /// Render an event as one line, or `None` if this format skips it
    pub fn render(&self, event: &LogEvent) -> Option<String> {
        match self.format {
            LogFormat::Json => Some(event.with_timestamp().to_string()),
            LogFormat::Pretty => Self::render_pretty(event),
            LogFormat::Compact => Some(Self::render_compact(event)),
        }
    }

    fn render_pretty(event: &LogEvent) -> Option<String> {
        let line = match event {
            LogEvent::CredentialResolved { source } => {
                format!("{} API key loaded from {}", "✓".bright_green(), source)
                    .dimmed()
                    .to_string()
            }
            LogEvent::CredentialMissing { sources } => format!(
                "{} No API key found (checked: {})",
                "✗".bright_red(),
                sources.join(", ")
            ),
            // The drivers show their own progress indicator.
            LogEvent::CritiqueStarted { .. } => return None,
            LogEvent::CritiqueCompleted { duration_secs, .. } => format!(
                "    {} Done ({:.1}s)",
                "✓".bright_green(),
                duration_secs
            )
            .dimmed()
            .to_string(),
            LogEvent::CritiqueFailed {
                error,
                duration_secs,
                ..
            } => format!(
                "    {} Failed ({:.1}s): {}",
                "✗".bright_red(),
                duration_secs,
                error.bright_red()
            ),
            LogEvent::ServerListening { address, model } => format!(
                "  {} {} {}",
                "->".bright_green(),
                format!("Listening on http://{}", address).bold(),
                format!("(model: {})", model).dimmed()
            ),
        };
        Some(line)
    }

    fn render_compact(event: &LogEvent) -> String {
        let timestamp = chrono::Utc::now().format("%H:%M:%S");
        match event {
            LogEvent::CredentialResolved { source } => {
                format!("[{}] credential:{}", timestamp, source)
            }
            LogEvent::CredentialMissing { .. } => format!("[{}] credential:missing", timestamp),
            LogEvent::CritiqueStarted {
                request_id,
                surface,
                prompt_chars,
            } => format!(
                "[{}] critique:start:{} {} chars={}",
                timestamp, request_id, surface, prompt_chars
            ),
            LogEvent::CritiqueCompleted {
                request_id,
                output_chars,
                duration_secs,
            } => format!(
                "[{}] critique:done:{} chars={} {:.1}s",
                timestamp, request_id, output_chars, duration_secs
            ),
            LogEvent::CritiqueFailed {
                request_id,
                error,
                duration_secs,
            } => format!(
                "[{}] critique:error:{} {:.1}s {}",
                timestamp, request_id, duration_secs, error
            ),
            LogEvent::ServerListening { address, .. } => {
                format!("[{}] server:listen {}", timestamp, address)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_events_are_tagged_and_timestamped() {
        let event = LogEvent::CritiqueStarted {
            request_id: "r1".into(),
            surface: Surface::Web,
            prompt_chars: 17,
        };
        let line = Logger::new(LogFormat::Json).render(&event).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();

        assert_eq!(value["event"], "critique_started");
        assert_eq!(value["surface"], "web");
        assert_eq!(value["prompt_chars"], 17);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_pretty_skips_started_event() {
        let event = LogEvent::CritiqueStarted {
            request_id: "r1".into(),
            surface: Surface::Repl,
            prompt_chars: 3,
        };
        assert!(Logger::new(LogFormat::Pretty).render(&event).is_none());
    }

    #[test]
    fn test_compact_failure_line() {
        let event = LogEvent::CritiqueFailed {
            request_id: "r2".into(),
            error: "timed out".into(),
            duration_secs: 2.5,
        };
        let line = Logger::new(LogFormat::Compact).render(&event).unwrap();
        assert!(line.ends_with("critique:error:r2 2.5s timed out"), "{}", line);
    }
}
