use crate::generation::GenerationService;
use crate::session::{MinutesSession, Participant};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Live sessions (session_id → session)
    ///
    /// Each session has its own mutex, held for a whole action, so actions on
    /// one session run one at a time.
    pub sessions: Arc<RwLock<HashMap<String, Arc<Mutex<MinutesSession>>>>>,

    /// Text generation backend
    pub generator: Arc<dyn GenerationService>,

    /// Model identifier passed on every generate call
    pub model: String,

    /// Participants every new session starts with
    pub initial_participants: Arc<Vec<Participant>>,

    /// Startup warnings shown with every session
    pub notices: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(generator: Arc<dyn GenerationService>, model: impl Into<String>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            generator,
            model: model.into(),
            initial_participants: Arc::new(Vec::new()),
            notices: Arc::new(Vec::new()),
        }
    }

    pub fn with_initial_participants(mut self, participants: Vec<Participant>) -> Self {
        self.initial_participants = Arc::new(participants);
        self
    }

    pub fn with_notices(mut self, notices: Vec<String>) -> Self {
        self.notices = Arc::new(notices);
        self
    }

    /// Look up a live session
    pub async fn session(&self, session_id: &str) -> Option<Arc<Mutex<MinutesSession>>> {
        let sessions = self.sessions.read().await;
        sessions.get(session_id).cloned()
    }
}
