use super::participant::Participant;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of a session, as returned to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    /// Session identifier (e.g., "session-6f1c...")
    pub session_id: String,

    /// When the session was created
    pub created_at: DateTime<Utc>,

    /// Registered participants, in insertion order
    pub participants: Vec<Participant>,

    /// System prompt used by the last generate (default template until then)
    pub system_prompt: String,

    /// Last generated Markdown minutes, if the last attempt succeeded
    pub minutes: Option<String>,

    /// When `minutes` was generated
    pub generated_at: Option<DateTime<Utc>>,

    /// Startup warnings (e.g., malformed participant configuration)
    #[serde(default)]
    pub notices: Vec<String>,
}
