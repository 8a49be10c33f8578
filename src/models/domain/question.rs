use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single multiple-choice prompt. `correct_index` is 0-based.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: Uuid,
    pub text: String,
    pub answer_choices: Vec<String>,
    pub correct_index: usize,
}

impl Question {
    pub fn new(text: &str, answer_choices: Vec<String>, correct_index: usize) -> Self {
        Question {
            id: Uuid::new_v4(),
            text: text.to_string(),
            answer_choices,
            correct_index,
        }
    }

    pub fn choice_count(&self) -> usize {
        self.answer_choices.len()
    }

    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }

    pub fn correct_choice(&self) -> Option<&str> {
        self.answer_choices.get(self.correct_index).map(String::as_str)
    }
}
