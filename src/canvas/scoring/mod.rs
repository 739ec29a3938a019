//! Scoring and recommendation pipeline: totals aggregation, strong-fit
//! qualification, hard-requirement gating, and outcome synthesis.
//!
//! Every stage is a pure function over the rubric, the caller's answer sheet
//! snapshot, and the considered archetypes. Nothing here mutates its inputs or
//! caches results, so repeated and concurrent read-only calls need no
//! coordination.

mod qualification;
mod recommendation;
mod requirements;
mod totals;

#[cfg(test)]
mod tests;

pub use recommendation::{Recommendation, Severity};
pub use totals::{SectionScore, SectionTotals};

use crate::canvas::rubric::{ArchetypeId, Question, Rubric, SectionId};
use crate::canvas::session::{AnswerSheet, ArchetypeSelection};

/// Stateless evaluator applying a borrowed rubric to answer sheets.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'r> {
    rubric: &'r Rubric,
}

impl<'r> ScoringEngine<'r> {
    pub fn new(rubric: &'r Rubric) -> Self {
        Self { rubric }
    }

    pub fn rubric(&self) -> &'r Rubric {
        self.rubric
    }

    /// Per-section `{score, max}` over the full rubric.
    pub fn section_totals(&self, answers: &AnswerSheet) -> SectionTotals {
        totals::compute(self.rubric, answers)
    }

    /// Totals restricted to the given sections; sections outside the scope
    /// are absent from the result and read back as `{0, 0}`.
    pub fn section_totals_scoped(
        &self,
        answers: &AnswerSheet,
        sections: &[SectionId],
    ) -> SectionTotals {
        totals::compute_scoped(self.rubric, answers, sections)
    }

    /// Considered archetypes at or above their strong-fit threshold, in
    /// canonical order.
    pub fn qualified_archetypes(
        &self,
        totals: &SectionTotals,
        considered: &ArchetypeSelection,
    ) -> Vec<ArchetypeId> {
        qualification::qualified_archetypes(self.rubric, totals, considered)
    }

    /// Hard-requirement questions not answered at their maximum score.
    pub fn hard_requirement_issues(&self, answers: &AnswerSheet) -> Vec<&'r Question> {
        requirements::hard_requirement_issues(self.rubric, answers)
    }

    /// Synthesize the final outcome for the current state of the assessment.
    pub fn recommendation(
        &self,
        totals: &SectionTotals,
        answers: &AnswerSheet,
        considered: &ArchetypeSelection,
    ) -> Recommendation {
        recommendation::synthesize(self.rubric, totals, answers, considered)
    }
}
