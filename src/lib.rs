pub mod config;
pub mod error;
pub mod generation;
pub mod http;
pub mod session;

pub use config::{Config, InitialParticipants};
pub use error::{SessionError, SessionResult};
pub use generation::{GeminiClient, GenerationError, GenerationService};
#[cfg(any(test, feature = "test-util"))]
pub use generation::ScriptedGenerator;
pub use http::{create_app, create_router, AppState};
pub use session::{GenerationRequest, MinutesSession, Participant, SessionView};
