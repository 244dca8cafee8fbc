//! Text generation service
//!
//! The session controller talks to the LLM through the `GenerationService`
//! trait:
//! - `GeminiClient` calls Google's `generateContent` endpoint
//! - `ScriptedGenerator` replays canned responses for tests

pub mod gemini;
pub mod messages;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;
mod service;

pub use gemini::GeminiClient;
#[cfg(any(test, feature = "test-util"))]
pub use mock::ScriptedGenerator;
pub use service::{GenerationError, GenerationService};

/// Model used when the configuration does not name one
pub const DEFAULT_MODEL: &str = "gemini-2.0-pro-exp-02-05";

/// Gemini REST API root
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
