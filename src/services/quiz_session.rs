use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{FinalScore, Question, Subject},
};

#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum SessionState {
    AwaitingAnswer { index: usize },
    ShowingResult { index: usize, selected: usize, correct: bool },
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerRecord {
    pub question_id: Uuid,
    pub selected: usize,
    pub correct: bool,
}

/// What the caller needs to render a result view.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub selected: usize,
    pub correct_index: usize,
    pub score: usize,
}

/// One walk through a subject's questions. Single use: start a new session
/// to retake a quiz.
#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    state: SessionState,
    score: usize,
    answers: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> AppResult<Self> {
        if questions.is_empty() {
            return Err(AppError::InvalidSessionPrecondition(
                "Cannot start a quiz with no questions".to_string(),
            ));
        }

        Ok(Self {
            answers: Vec::with_capacity(questions.len()),
            questions,
            state: SessionState::AwaitingAnswer { index: 0 },
            score: 0,
            started_at: Utc::now(),
            completed_at: None,
        })
    }

    pub fn for_subject(subject: &Subject) -> AppResult<Self> {
        Self::new(subject.questions.clone()).map_err(|_| {
            AppError::InvalidSessionPrecondition(format!(
                "Subject '{}' has no questions",
                subject.title
            ))
        })
    }

    pub fn submit_answer(&mut self, choice: usize) -> AppResult<AnswerOutcome> {
        let index = match self.state {
            SessionState::AwaitingAnswer { index } => index,
            SessionState::ShowingResult { index, .. } => {
                return Err(AppError::InvalidTransition(format!(
                    "Question {} has already been answered",
                    index + 1
                )))
            }
            SessionState::Completed => {
                return Err(AppError::InvalidTransition(
                    "Quiz is already completed".to_string(),
                ))
            }
        };

        let question = &self.questions[index];
        if choice >= question.choice_count() {
            return Err(AppError::InvalidSessionPrecondition(format!(
                "Choice {} is out of range for {} answers",
                choice,
                question.choice_count()
            )));
        }

        let correct = question.is_correct(choice);
        if correct {
            self.score += 1;
        }
        self.answers.push(AnswerRecord {
            question_id: question.id,
            selected: choice,
            correct,
        });
        self.state = SessionState::ShowingResult {
            index,
            selected: choice,
            correct,
        };
        log::debug!(
            "Question {}/{} answered with {} ({})",
            index + 1,
            self.questions.len(),
            choice,
            if correct { "correct" } else { "incorrect" }
        );

        Ok(AnswerOutcome {
            correct,
            selected: choice,
            correct_index: question.correct_index,
            score: self.score,
        })
    }

    pub fn advance(&mut self) -> AppResult<&SessionState> {
        let index = match self.state {
            SessionState::ShowingResult { index, .. } => index,
            SessionState::AwaitingAnswer { index } => {
                return Err(AppError::InvalidTransition(format!(
                    "Question {} must be answered before advancing",
                    index + 1
                )))
            }
            SessionState::Completed => {
                return Err(AppError::InvalidTransition(
                    "Quiz is already completed".to_string(),
                ))
            }
        };

        if index + 1 < self.questions.len() {
            self.state = SessionState::AwaitingAnswer { index: index + 1 };
        } else {
            self.state = SessionState::Completed;
            self.completed_at = Some(Utc::now());
            log::debug!("Quiz completed with {}/{}", self.score, self.questions.len());
        }

        Ok(&self.state)
    }

    pub fn final_score(&self) -> AppResult<FinalScore> {
        match self.state {
            SessionState::Completed => Ok(FinalScore {
                score: self.score,
                total: self.questions.len(),
            }),
            _ => Err(AppError::InvalidTransition(
                "Final score is only available once the quiz is completed".to_string(),
            )),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Position in the question list; equals `total()` once completed.
    pub fn current_index(&self) -> usize {
        match self.state {
            SessionState::AwaitingAnswer { index } | SessionState::ShowingResult { index, .. } => {
                index
            }
            SessionState::Completed => self.questions.len(),
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index())
    }

    pub fn last_selection(&self) -> Option<usize> {
        match self.state {
            SessionState::ShowingResult { selected, .. } => Some(selected),
            _ => None,
        }
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }
}
