use super::participant::Participant;
use super::prompt::{GenerationRequest, DEFAULT_SYSTEM_PROMPT};
use super::view::SessionView;
use crate::error::{SessionError, SessionResult};
use crate::generation::{GenerationError, GenerationService};
use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

/// Per-user session: participant list, current system prompt, last minutes
///
/// `minutes` is either non-empty or `None`. It is only set by a successful
/// generation and is cleared as soon as a generation fails.
pub struct MinutesSession {
    session_id: String,
    created_at: DateTime<Utc>,
    participants: Vec<Participant>,
    system_prompt: String,
    minutes: Option<String>,
    generated_at: Option<DateTime<Utc>>,
}

impl MinutesSession {
    /// Create a session seeded with the configured initial participants
    pub fn new(session_id: String, initial_participants: Vec<Participant>) -> Self {
        info!(
            "Creating session {} with {} initial participants",
            session_id,
            initial_participants.len()
        );

        Self {
            session_id,
            created_at: Utc::now(),
            participants: initial_participants,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            minutes: None,
            generated_at: None,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn minutes(&self) -> Option<&str> {
        self.minutes.as_deref()
    }

    /// Append a participant; an empty name is rejected and nothing changes
    pub fn add_participant(
        &mut self,
        name: &str,
        role: &str,
        remark: &str,
    ) -> SessionResult<&[Participant]> {
        if name.is_empty() {
            warn!("Session {}: participant name missing", self.session_id);
            return Err(SessionError::EmptyParticipantName);
        }

        self.participants.push(Participant::new(name, role, remark));
        info!(
            "Session {}: added participant {} ({} total)",
            self.session_id,
            name,
            self.participants.len()
        );

        Ok(&self.participants)
    }

    /// Generate minutes for `transcript` with the session's participants
    ///
    /// An empty transcript is rejected before any service call and leaves the
    /// stored minutes as they were. A service failure clears them.
    pub async fn generate_minutes(
        &mut self,
        service: &dyn GenerationService,
        model: &str,
        system_prompt: &str,
        transcript: &str,
    ) -> SessionResult<&str> {
        if transcript.is_empty() {
            warn!("Session {}: transcript missing", self.session_id);
            return Err(SessionError::MissingTranscript);
        }

        self.system_prompt = system_prompt.to_string();

        let prompt =
            GenerationRequest::new(&self.system_prompt, &self.participants, transcript).compose();

        info!(
            "Session {}: generating minutes via {} ({} participants, transcript_chars={})",
            self.session_id,
            service.provider_name(),
            self.participants.len(),
            transcript.chars().count()
        );

        match service.generate(model, &prompt).await {
            Ok(text) if !text.is_empty() => {
                self.generated_at = Some(Utc::now());
                let minutes = self.minutes.insert(text);
                info!(
                    "Session {}: minutes generated ({} characters)",
                    self.session_id,
                    minutes.chars().count()
                );
                Ok(minutes.as_str())
            }
            Ok(_) => {
                self.clear_minutes();
                error!("Session {}: generation returned no text", self.session_id);
                Err(SessionError::Generation(GenerationError::EmptyResponse))
            }
            Err(e) => {
                self.clear_minutes();
                error!("Session {}: generation failed: {}", self.session_id, e);
                Err(SessionError::Generation(e))
            }
        }
    }

    /// Snapshot for the presentation layer
    pub fn view(&self, notices: &[String]) -> SessionView {
        SessionView {
            session_id: self.session_id.clone(),
            created_at: self.created_at,
            participants: self.participants.clone(),
            system_prompt: self.system_prompt.clone(),
            minutes: self.minutes.clone(),
            generated_at: self.generated_at,
            notices: notices.to_vec(),
        }
    }

    fn clear_minutes(&mut self) {
        self.minutes = None;
        self.generated_at = None;
    }
}
