//! Interactive session state: the mutable answer sheet, the archetype
//! selection, and persistence of both through a snapshot store.

mod answers;
mod selection;
mod snapshot;
mod store;

pub use answers::{AnswerError, AnswerSheet};
pub use selection::{ArchetypeSelection, SelectionPolicy, MINIMUM_SELECTED_ARCHETYPES};
pub use snapshot::{HydratedState, SessionSnapshot, SNAPSHOT_KEY};
pub use store::{FileSnapshotStore, InMemorySnapshotStore, SnapshotStore, StoreError};

use std::sync::Arc;

use tracing::debug;

use crate::canvas::rubric::{ArchetypeId, Question, Rubric};
use crate::canvas::scoring::{Recommendation, ScoringEngine, SectionTotals};

/// One respondent's walk through the assessment. Owns the only mutable state
/// in the system and writes a snapshot after every change; all scoring stays
/// read-only and derived.
pub struct CanvasSession<S: SnapshotStore> {
    rubric: Rubric,
    store: Arc<S>,
    policy: SelectionPolicy,
    answers: AnswerSheet,
    selection: ArchetypeSelection,
    current_step: usize,
}

impl<S: SnapshotStore> CanvasSession<S> {
    /// Resume from whatever the store holds. A missing or malformed snapshot
    /// degrades to a fresh session; only store transport failures surface.
    pub fn resume(rubric: Rubric, store: Arc<S>, policy: SelectionPolicy) -> Result<Self, SessionError> {
        let snapshot = match store.load()? {
            Some(raw) => SessionSnapshot::from_json(&raw),
            None => SessionSnapshot::default(),
        };
        let state = snapshot.hydrate(&rubric);
        debug!(
            answered = state.answers.len(),
            step = state.current_step,
            "resumed assessment session"
        );

        Ok(Self {
            rubric,
            store,
            policy,
            answers: state.answers,
            selection: state.selection,
            current_step: state.current_step,
        })
    }

    pub fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn selection(&self) -> &ArchetypeSelection {
        &self.selection
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.rubric.questions().get(self.current_step)
    }

    /// Whether enough archetypes are selected for the assessment to proceed.
    pub fn selection_ready(&self) -> bool {
        self.selection.meets(&self.policy)
    }

    pub fn record_answer(&mut self, key: &str, value: u8) -> Result<(), SessionError> {
        self.answers.record(&self.rubric, key, value)?;
        self.persist()
    }

    pub fn clear_answer(&mut self, key: &str) -> Result<(), SessionError> {
        self.answers.clear_answer(key);
        self.persist()
    }

    pub fn toggle_archetype(&mut self, archetype: ArchetypeId) -> Result<(), SessionError> {
        self.selection.toggle(archetype);
        self.persist()
    }

    pub fn advance(&mut self) -> Result<(), SessionError> {
        let last = self.rubric.question_count().saturating_sub(1);
        if self.current_step < last {
            self.current_step += 1;
        }
        self.persist()
    }

    pub fn back(&mut self) -> Result<(), SessionError> {
        self.current_step = self.current_step.saturating_sub(1);
        self.persist()
    }

    /// Wipe the session on explicit user request: empty answers, selection
    /// back to every archetype, cursor at the first question.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.answers.reset();
        self.selection = ArchetypeSelection::all();
        self.current_step = 0;
        self.store.clear()?;
        Ok(())
    }

    pub fn totals(&self) -> SectionTotals {
        ScoringEngine::new(&self.rubric).section_totals(&self.answers)
    }

    pub fn recommendation(&self) -> Recommendation {
        let engine = ScoringEngine::new(&self.rubric);
        let totals = engine.section_totals(&self.answers);
        engine.recommendation(&totals, &self.answers, &self.selection)
    }

    fn persist(&self) -> Result<(), SessionError> {
        let snapshot =
            SessionSnapshot::capture(&self.answers, self.current_step, &self.selection);
        self.store.save(&snapshot.to_json())?;
        Ok(())
    }
}

/// Error raised by session mutations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
