//! Meeting-minutes session management
//!
//! This module provides the `MinutesSession` controller that manages:
//! - The participant list (seeded from configuration, append-only)
//! - The current system prompt
//! - Prompt composition and the generate-minutes call
//! - The last generated minutes

mod participant;
mod prompt;
mod session;
mod view;

pub use participant::Participant;
pub use prompt::{GenerationRequest, DEFAULT_SYSTEM_PROMPT};
pub use session::MinutesSession;
pub use view::SessionView;
