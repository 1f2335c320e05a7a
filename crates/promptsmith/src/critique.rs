use std::time::Instant;

use promptsmith_critic::{Critic, CritiqueOutcome};
use promptsmith_logging::{LogEvent, Logger, Surface};

/// Run one critique and log its lifecycle events.
pub async fn run_logged(
    critic: &dyn Critic,
    logger: &Logger,
    surface: Surface,
    prompt: &str,
) -> CritiqueOutcome {
    let request_id = uuid::Uuid::new_v4().to_string();
    logger.log(&LogEvent::CritiqueStarted {
        request_id: request_id.clone(),
        surface,
        prompt_chars: prompt.chars().count(),
    });

    let started = Instant::now();
    let outcome = critic.critique(prompt).await;
    let duration_secs = started.elapsed().as_secs_f64();

    match &outcome {
        CritiqueOutcome::Completed { text } => logger.log(&LogEvent::CritiqueCompleted {
            request_id,
            output_chars: text.chars().count(),
            duration_secs,
        }),
        CritiqueOutcome::Failed { error } => logger.log(&LogEvent::CritiqueFailed {
            request_id,
            error: error.clone(),
            duration_secs,
        }),
    }

    outcome
}

/// True when the prompt has something other than whitespace
pub fn is_submittable(prompt: &str) -> bool {
    !prompt.trim().is_empty()
}
