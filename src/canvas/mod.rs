//! The decision canvas: rubric reference data, the scoring pipeline, and the
//! interactive session wrapper around both.

pub mod rubric;
pub mod scoring;
pub mod session;

pub use rubric::{scale_labels, ArchetypeId, Question, Rubric, RubricError, SectionId, Threshold};
pub use scoring::{Recommendation, ScoringEngine, SectionScore, SectionTotals, Severity};
pub use session::{
    AnswerError, AnswerSheet, ArchetypeSelection, CanvasSession, FileSnapshotStore,
    InMemorySnapshotStore, SelectionPolicy, SessionError, SessionSnapshot, SnapshotStore,
    StoreError,
};
