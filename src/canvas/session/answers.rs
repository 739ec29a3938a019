use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::canvas::rubric::Rubric;

/// The one mutable entity in the assessment: a sparse mapping from question
/// key to recorded value. A key absent from the map means "not yet answered",
/// which is a distinct state from any valid score, including 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    answers: BTreeMap<String, u8>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value for a question, validating against the rubric. Values
    /// outside `[0, max_score]` and unknown keys are rejected; the sheet never
    /// stores an out-of-range value.
    pub fn record(&mut self, rubric: &Rubric, key: &str, value: u8) -> Result<(), AnswerError> {
        let question = rubric.question(key).ok_or_else(|| AnswerError::UnknownQuestion {
            key: key.to_string(),
        })?;

        if value > question.max_score {
            return Err(AnswerError::OutOfRange {
                key: key.to_string(),
                value,
                max_score: question.max_score,
            });
        }

        self.answers.insert(key.to_string(), value);
        Ok(())
    }

    /// Return a question to the unanswered state.
    pub fn clear_answer(&mut self, key: &str) {
        self.answers.remove(key);
    }

    pub fn reset(&mut self) {
        self.answers.clear();
    }

    pub fn value(&self, key: &str) -> Option<u8> {
        self.answers.get(key).copied()
    }

    pub fn is_answered(&self, key: &str) -> bool {
        self.answers.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.answers.iter().map(|(key, value)| (key.as_str(), *value))
    }

    /// Index of the first rubric question without a recorded answer, used to
    /// resume a session where the respondent left off.
    pub fn first_unanswered(&self, rubric: &Rubric) -> Option<usize> {
        rubric
            .questions()
            .iter()
            .position(|question| !self.answers.contains_key(question.key))
    }

    pub(crate) fn from_map(answers: BTreeMap<String, u8>) -> Self {
        Self { answers }
    }

    pub(crate) fn as_map(&self) -> &BTreeMap<String, u8> {
        &self.answers
    }
}

/// Rejection raised at the point of recording an answer.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("no rubric question with key '{key}'")]
    UnknownQuestion { key: String },
    #[error("value {value} outside 0..={max_score} for question '{key}'")]
    OutOfRange {
        key: String,
        value: u8,
        max_score: u8,
    },
}
