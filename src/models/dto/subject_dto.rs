use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Question, Subject};

/// Question as it appears on the wire. `answer` is a 1-based numeral string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct QuestionDto {
    pub text: String,
    pub answer: String,
    #[validate(length(min = 2))]
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct SubjectDto {
    #[validate(length(min = 1))]
    pub title: String,
    pub desc: String,
    pub questions: Vec<QuestionDto>,
}

impl QuestionDto {
    /// Parses `answer` into a 0-based index into `answers`.
    pub fn correct_index(&self) -> AppResult<usize> {
        let numeral: usize = self.answer.trim().parse().map_err(|_| {
            AppError::Decode(format!("answer '{}' is not an integer", self.answer))
        })?;

        if numeral == 0 || numeral > self.answers.len() {
            return Err(AppError::Decode(format!(
                "answer {} is out of range for {} answers",
                numeral,
                self.answers.len()
            )));
        }

        Ok(numeral - 1)
    }
}

impl From<&Question> for QuestionDto {
    fn from(question: &Question) -> Self {
        QuestionDto {
            text: question.text.clone(),
            answer: (question.correct_index + 1).to_string(),
            answers: question.answer_choices.clone(),
        }
    }
}

impl TryFrom<QuestionDto> for Question {
    type Error = AppError;

    fn try_from(dto: QuestionDto) -> Result<Self, Self::Error> {
        dto.validate()?;
        let correct_index = dto.correct_index()?;
        Ok(Question::new(&dto.text, dto.answers, correct_index))
    }
}

impl From<&Subject> for SubjectDto {
    fn from(subject: &Subject) -> Self {
        SubjectDto {
            title: subject.title.clone(),
            desc: subject.description.clone(),
            questions: subject.questions.iter().map(QuestionDto::from).collect(),
        }
    }
}

impl TryFrom<SubjectDto> for Subject {
    type Error = AppError;

    fn try_from(dto: SubjectDto) -> Result<Self, Self::Error> {
        dto.validate()?;
        if dto.title.trim().is_empty() {
            return Err(AppError::Decode("subject title must not be blank".to_string()));
        }
        let questions = dto
            .questions
            .into_iter()
            .map(Question::try_from)
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Subject::new(&dto.title, &dto.desc, questions))
    }
}

/// Decodes a whole payload. Any invalid subject fails the entire payload.
pub fn decode_payload(body: &str) -> AppResult<Vec<Subject>> {
    let dtos: Vec<SubjectDto> = serde_json::from_str(body)?;
    dtos.into_iter()
        .enumerate()
        .map(|(i, dto)| {
            Subject::try_from(dto).map_err(|e| match e {
                AppError::Decode(msg) => AppError::Decode(format!("subject {}: {}", i, msg)),
                other => other,
            })
        })
        .collect()
}

pub fn encode_payload(subjects: &[Subject]) -> AppResult<String> {
    let dtos: Vec<SubjectDto> = subjects.iter().map(SubjectDto::from).collect();
    serde_json::to_string(&dtos).map_err(|e| AppError::Decode(e.to_string()))
}

/// JSON Schema for the payload, for people authoring question files.
pub fn payload_schema() -> AppResult<String> {
    let schema = schemars::schema_for!(Vec<SubjectDto>);
    serde_json::to_string_pretty(&schema).map_err(|e| AppError::Decode(e.to_string()))
}
