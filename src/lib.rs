//! Guided assessment that scores a data product design against a fixed rubric
//! and recommends an architectural archetype.
//!
//! The heart of the crate is the scoring pipeline: sparse per-question answers
//! reduce to per-section totals, archetypes qualify by crossing their
//! strong-fit thresholds, hard requirements gate the result, and a synthesizer
//! turns all of that into one `(message, severity)` outcome. Around it sit the
//! immutable [`canvas::rubric::Rubric`], the mutable
//! [`canvas::session::AnswerSheet`], and a tolerant persistence layer for
//! resuming a half-finished assessment. There is no server, CLI, or wire
//! protocol; embedding UIs drive the session one answer at a time.

pub mod canvas;
pub mod config;
pub mod error;
pub mod telemetry;

pub use canvas::{
    scale_labels, AnswerError, AnswerSheet, ArchetypeId, ArchetypeSelection, CanvasSession,
    FileSnapshotStore, InMemorySnapshotStore, Question, Recommendation, Rubric, RubricError,
    ScoringEngine, SectionId, SectionScore, SectionTotals, SelectionPolicy, SessionError,
    SessionSnapshot, Severity, SnapshotStore, StoreError, Threshold,
};
pub use error::CanvasError;
