use std::collections::BTreeMap;

use serde::Serialize;

use crate::canvas::rubric::{Rubric, SectionId};
use crate::canvas::session::AnswerSheet;

/// Score and maximum for one section. `max` counts every in-scope question
/// regardless of how many are answered; unanswered questions contribute 0 to
/// `score` only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionScore {
    pub score: u32,
    pub max: u32,
}

impl SectionScore {
    /// Completion percentage, rounded. A section with no questions reports 0
    /// rather than dividing by zero.
    pub fn percent(&self) -> u32 {
        if self.max == 0 {
            return 0;
        }
        ((self.score as f64 / self.max as f64) * 100.0).round() as u32
    }
}

/// Derived, read-only per-section totals. Recomputed fresh from the rubric
/// and the current answer sheet on every request; never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SectionTotals {
    totals: BTreeMap<SectionId, SectionScore>,
}

impl SectionTotals {
    pub fn get(&self, section: SectionId) -> SectionScore {
        self.totals.get(&section).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionId, SectionScore)> + '_ {
        self.totals.iter().map(|(section, score)| (*section, *score))
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (SectionId, SectionScore)>) -> Self {
        Self {
            totals: entries.into_iter().collect(),
        }
    }
}

pub(crate) fn compute(rubric: &Rubric, answers: &AnswerSheet) -> SectionTotals {
    compute_scoped(rubric, answers, &SectionId::ordered())
}

pub(crate) fn compute_scoped(
    rubric: &Rubric,
    answers: &AnswerSheet,
    sections: &[SectionId],
) -> SectionTotals {
    let mut totals: BTreeMap<SectionId, SectionScore> = sections
        .iter()
        .map(|section| (*section, SectionScore::default()))
        .collect();

    for question in rubric.questions() {
        let Some(entry) = totals.get_mut(&question.section) else {
            continue;
        };
        entry.max += u32::from(question.max_score);
        if let Some(value) = answers.value(question.key) {
            entry.score += u32::from(value);
        }
    }

    SectionTotals { totals }
}
