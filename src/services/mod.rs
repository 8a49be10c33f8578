pub mod content_service;
pub mod quiz_session;

pub use content_service::{ContentService, LoadOrigin, LoadOutcome};
pub use quiz_session::{AnswerOutcome, AnswerRecord, QuizSession, SessionState};
