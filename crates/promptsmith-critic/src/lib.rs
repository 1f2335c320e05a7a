mod client;
mod outcome;
mod prompts;
pub mod transport;
pub mod wire;

pub use client::{ClientSettings, Critic, CritiqueClient};
pub use outcome::CritiqueOutcome;
pub use prompts::{CritiquePrompts, SECTION_HEADINGS, USER_PREFIX};
pub use transport::{CompletionTransport, HttpTransport, TransportError, DEFAULT_API_BASE};
pub use wire::{ResponsesRequest, DEFAULT_MODEL};
