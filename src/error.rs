/// Error types for session actions
///
/// These are returned to the presentation layer as values; nothing here panics
/// or aborts the session.
use crate::generation::GenerationError;
use thiserror::Error;

/// Failure of a session action
#[derive(Error, Debug)]
pub enum SessionError {
    /// Participant form submitted without a name
    #[error("参加者名を入力してください。")]
    EmptyParticipantName,

    /// Generate requested with an empty transcript
    #[error("文字起こしテキストを入力してください。")]
    MissingTranscript,

    /// The generation service call failed
    #[error("LLM生成中にエラーが発生しました: {0}")]
    Generation(#[from] GenerationError),
}

impl SessionError {
    /// Input problems the user can fix; reported as warnings, not errors
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            SessionError::EmptyParticipantName | SessionError::MissingTranscript
        )
    }
}

/// Result type alias for session actions
pub type SessionResult<T> = std::result::Result<T, SessionError>;
