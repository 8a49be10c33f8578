use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::Question;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Subject {
    pub id: Uuid,                 // Assigned at decode time
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>, // Ordered as delivered
}

impl Subject {
    pub fn new(title: &str, description: &str, questions: Vec<Question>) -> Self {
        Subject {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            questions,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Subjects without questions are listed but cannot start a session.
    pub fn is_playable(&self) -> bool {
        !self.questions.is_empty()
    }
}
