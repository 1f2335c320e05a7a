use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use promptsmith_critic::{Critic, CritiqueOutcome};

/// Critic that records prompts and replies with a fixed outcome
#[derive(Clone)]
pub struct FakeCritic {
    prompts: Arc<Mutex<Vec<String>>>,
    reply: CritiqueOutcome,
}

impl FakeCritic {
    pub fn answering(text: &str) -> Self {
        Self {
            prompts: Arc::default(),
            reply: CritiqueOutcome::completed(text),
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            prompts: Arc::default(),
            reply: CritiqueOutcome::failed(error),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Critic for FakeCritic {
    async fn critique(&self, prompt: &str) -> CritiqueOutcome {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone()
    }
}
