//! Rubric model: the fixed question catalog, section membership, answer
//! scales, hard-requirement flags, and strong-fit thresholds.
//!
//! The rubric is constructed once at startup and treated as read-only
//! reference data by every scoring stage. Construction validates the
//! authoring invariants up front so a broken rubric fails immediately rather
//! than skewing scores at evaluation time.

mod catalog;
mod domain;

use std::collections::{BTreeMap, BTreeSet};

pub use domain::{scale_labels, ArchetypeId, Question, SectionId, Threshold};

/// Validated, immutable rubric. Section maxima and fraction-based thresholds
/// are derived from the live question list on every call; earlier revisions
/// of the assessment duplicated them as literals and the copies drifted.
#[derive(Debug, Clone)]
pub struct Rubric {
    questions: Vec<Question>,
    thresholds: BTreeMap<SectionId, Threshold>,
}

impl Rubric {
    /// The full hand-authored assessment rubric.
    pub fn standard() -> Self {
        Self::new(catalog::standard_questions(), catalog::standard_thresholds())
            .expect("standard rubric catalog must validate")
    }

    pub fn new(
        questions: Vec<Question>,
        thresholds: BTreeMap<SectionId, Threshold>,
    ) -> Result<Self, RubricError> {
        let mut seen = BTreeSet::new();
        for question in &questions {
            if domain::scale_labels(question.max_score).is_none() {
                return Err(RubricError::UnsupportedScale {
                    key: question.key.to_string(),
                    max_score: question.max_score,
                });
            }
            if !seen.insert(question.key) {
                return Err(RubricError::DuplicateKey {
                    key: question.key.to_string(),
                });
            }
        }

        for section in SectionId::ordered() {
            if !thresholds.contains_key(&section) {
                return Err(RubricError::MissingThreshold { section });
            }
        }

        Ok(Self {
            questions,
            thresholds,
        })
    }

    pub fn builder() -> RubricBuilder {
        RubricBuilder::default()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, key: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.key == key)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn questions_in(&self, section: SectionId) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |question| question.section == section)
    }

    pub fn hard_requirements(&self) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(|question| question.hard_requirement)
    }

    /// Sum of `max_score` over the section's questions, derived fresh.
    pub fn section_max(&self, section: SectionId) -> u32 {
        self.questions_in(section)
            .map(|question| u32::from(question.max_score))
            .sum()
    }

    /// The score at or above which the section counts as a strong fit.
    pub fn strong_fit_threshold(&self, section: SectionId) -> u32 {
        self.thresholds[&section].resolve(self.section_max(section))
    }
}

/// Build variant for tests and alternative rubrics; hard requirements may be
/// marked after the fact by key, which is where a dangling reference to a
/// nonexistent question is caught.
#[derive(Debug, Default)]
pub struct RubricBuilder {
    questions: Vec<Question>,
    thresholds: BTreeMap<SectionId, Threshold>,
    hard_requirements: Vec<String>,
}

impl RubricBuilder {
    pub fn question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    pub fn threshold(mut self, section: SectionId, threshold: Threshold) -> Self {
        self.thresholds.insert(section, threshold);
        self
    }

    pub fn hard_requirement(mut self, key: &str) -> Self {
        self.hard_requirements.push(key.to_string());
        self
    }

    pub fn build(mut self) -> Result<Rubric, RubricError> {
        for key in &self.hard_requirements {
            let question = self
                .questions
                .iter_mut()
                .find(|question| question.key == key)
                .ok_or_else(|| RubricError::UnknownHardRequirement { key: key.clone() })?;
            question.hard_requirement = true;
        }

        Rubric::new(self.questions, self.thresholds)
    }
}

/// Rubric authoring bugs. Fatal at startup, never a runtime condition.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RubricError {
    #[error("question '{key}' uses unsupported scale size {max_score}")]
    UnsupportedScale { key: String, max_score: u8 },
    #[error("question key '{key}' is declared twice")]
    DuplicateKey { key: String },
    #[error("hard requirement references nonexistent question '{key}'")]
    UnknownHardRequirement { key: String },
    #[error("no strong-fit threshold configured for section {section:?}")]
    MissingThreshold { section: SectionId },
}
