use crate::canvas::rubric::{ArchetypeId, Question, Rubric, SectionId};
use crate::canvas::session::AnswerSheet;

/// Hard-requirement questions that are not fully satisfied: the recorded
/// answer is below the question's maximum, or there is no recorded answer at
/// all (unanswered never satisfies a hard requirement).
pub(crate) fn hard_requirement_issues<'r>(
    rubric: &'r Rubric,
    answers: &AnswerSheet,
) -> Vec<&'r Question> {
    rubric
        .hard_requirements()
        .filter(|question| {
            answers
                .value(question.key)
                .map(|value| value < question.max_score)
                .unwrap_or(true)
        })
        .collect()
}

/// Restrict issues to the ones that actually block a recommendation.
///
/// General-section issues always block. An archetype-section issue blocks only
/// if that archetype has already crossed its strong-fit threshold; a failed
/// hard requirement inside a section that was never in contention must not be
/// surfaced as a reason to withhold the recommendation.
pub(crate) fn blocking_issues<'r>(
    issues: &[&'r Question],
    qualified: &[ArchetypeId],
) -> Vec<&'r Question> {
    issues
        .iter()
        .filter(|question| match question.section {
            SectionId::General => true,
            section => section
                .archetype()
                .map(|archetype| qualified.contains(&archetype))
                .unwrap_or(false),
        })
        .copied()
        .collect()
}
