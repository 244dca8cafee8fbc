//! HTTP API server for the minutes form
//!
//! This module provides a REST API over per-user sessions:
//! - POST /sessions - Start a session
//! - GET /sessions/:id - Session snapshot
//! - DELETE /sessions/:id - Discard a session
//! - POST /sessions/:id/participants - Add a participant
//! - POST /sessions/:id/minutes - Generate minutes from a transcript
//! - GET /sessions/:id/minutes - Raw Markdown minutes
//! - GET /defaults - Default system prompt and initial participants
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use handlers::{AddParticipantRequest, ErrorResponse, GenerateMinutesRequest};
pub use routes::{create_app, create_router};
pub use state::AppState;
