use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::warn;

use crate::canvas::rubric::{ArchetypeId, Rubric};

use super::answers::AnswerSheet;
use super::selection::ArchetypeSelection;

/// Key under which the session snapshot lives in the surrounding key-value
/// store.
pub const SNAPSHOT_KEY: &str = "data-product-cut-answers";

/// Persisted session state. The format has grown over revisions — a bare
/// answer map, then `currentStepIndex`, then `archetypeSelection`, then
/// `savedAt` — so parsing tolerates every older shape and unknown fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub answers: BTreeMap<String, u8>,
    pub current_step: Option<usize>,
    pub selection: Option<BTreeSet<ArchetypeId>>,
    pub saved_at: Option<DateTime<Utc>>,
}

/// Rubric-validated session state ready to drive a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HydratedState {
    pub answers: AnswerSheet,
    pub current_step: usize,
    pub selection: ArchetypeSelection,
}

impl SessionSnapshot {
    pub fn capture(
        answers: &AnswerSheet,
        current_step: usize,
        selection: &ArchetypeSelection,
    ) -> Self {
        Self {
            answers: answers.as_map().clone(),
            current_step: Some(current_step),
            selection: Some(selection.as_set().clone()),
            saved_at: Some(Utc::now()),
        }
    }

    /// Parse a raw snapshot, degrading to "start fresh" on anything
    /// malformed. Field-level sanitization drops non-numeric answer values
    /// and non-boolean selection entries rather than failing the whole parse.
    pub fn from_json(raw: &str) -> Self {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "discarding unparseable session snapshot");
                return Self::default();
            }
        };

        let Value::Object(object) = value else {
            warn!("discarding session snapshot with non-object root");
            return Self::default();
        };

        if !object.contains_key("answers") {
            // Oldest shape: the snapshot was just the answer map.
            return Self {
                answers: sanitize_answers(&Value::Object(object)),
                ..Self::default()
            };
        }

        let answers = object
            .get("answers")
            .map(sanitize_answers)
            .unwrap_or_default();

        let current_step = object
            .get("currentStepIndex")
            .and_then(Value::as_u64)
            .map(|index| index as usize);

        let selection = object
            .get("archetypeSelection")
            .and_then(sanitize_selection);

        let saved_at = object
            .get("savedAt")
            .and_then(Value::as_str)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|timestamp| timestamp.with_timezone(&Utc));

        Self {
            answers,
            current_step,
            selection,
            saved_at,
        }
    }

    pub fn to_json(&self) -> String {
        let mut object = Map::new();
        object.insert(
            "answers".to_string(),
            Value::Object(
                self.answers
                    .iter()
                    .map(|(key, value)| (key.clone(), Value::from(*value)))
                    .collect(),
            ),
        );
        if let Some(step) = self.current_step {
            object.insert("currentStepIndex".to_string(), Value::from(step as u64));
        }
        if let Some(selection) = &self.selection {
            let entries = ArchetypeId::ordered()
                .into_iter()
                .map(|archetype| {
                    (
                        archetype_key(archetype).to_string(),
                        Value::from(selection.contains(&archetype)),
                    )
                })
                .collect();
            object.insert("archetypeSelection".to_string(), Value::Object(entries));
        }
        if let Some(saved_at) = self.saved_at {
            object.insert("savedAt".to_string(), Value::from(saved_at.to_rfc3339()));
        }
        Value::Object(object).to_string()
    }

    /// Validate the snapshot against a rubric: unknown question keys are
    /// dropped, values above a question's maximum clamp to that maximum, the
    /// step index clamps to the question range, and a missing selection
    /// defaults to every archetype in scope (the original behavior).
    pub fn hydrate(&self, rubric: &Rubric) -> HydratedState {
        let mut clean = BTreeMap::new();
        for (key, value) in &self.answers {
            match rubric.question(key) {
                Some(question) => {
                    clean.insert(key.clone(), (*value).min(question.max_score));
                }
                None => {
                    warn!(key = key.as_str(), "dropping answer for unknown question");
                }
            }
        }
        let answers = AnswerSheet::from_map(clean);

        let last_step = rubric.question_count().saturating_sub(1);
        let current_step = match self.current_step {
            Some(index) => index.min(last_step),
            None => answers.first_unanswered(rubric).unwrap_or(last_step),
        };

        let selection = self
            .selection
            .clone()
            .map(ArchetypeSelection::from)
            .unwrap_or_else(ArchetypeSelection::all);

        HydratedState {
            answers,
            current_step,
            selection,
        }
    }
}

fn sanitize_answers(value: &Value) -> BTreeMap<String, u8> {
    let Value::Object(entries) = value else {
        warn!("ignoring non-object answers field in session snapshot");
        return BTreeMap::new();
    };

    let mut answers = BTreeMap::new();
    for (key, value) in entries {
        // as_u64 is None for floats, negatives, strings, and booleans; those
        // entries are dropped rather than coerced.
        let Some(number) = value.as_u64() else {
            warn!(key = key.as_str(), "dropping non-integer answer value");
            continue;
        };
        answers.insert(key.clone(), u8::try_from(number).unwrap_or(u8::MAX));
    }
    answers
}

fn sanitize_selection(value: &Value) -> Option<BTreeSet<ArchetypeId>> {
    let Value::Object(entries) = value else {
        warn!("treating non-object archetype selection as absent");
        return None;
    };

    let mut selection = BTreeSet::new();
    for (key, value) in entries {
        let Some(archetype) = archetype_from_key(key) else {
            warn!(key = key.as_str(), "dropping unknown archetype in selection");
            continue;
        };
        match value.as_bool() {
            Some(true) => {
                selection.insert(archetype);
            }
            Some(false) => {}
            None => {
                warn!(key = key.as_str(), "dropping non-boolean selection value");
            }
        }
    }
    Some(selection)
}

const fn archetype_key(archetype: ArchetypeId) -> &'static str {
    match archetype {
        ArchetypeId::Source => "source",
        ArchetypeId::Aggregate => "aggregate",
        ArchetypeId::Consumer => "consumer",
    }
}

fn archetype_from_key(key: &str) -> Option<ArchetypeId> {
    match key {
        "source" => Some(ArchetypeId::Source),
        "aggregate" => Some(ArchetypeId::Aggregate),
        "consumer" => Some(ArchetypeId::Consumer),
        _ => None,
    }
}
