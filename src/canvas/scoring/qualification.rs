use crate::canvas::rubric::{ArchetypeId, Rubric};
use crate::canvas::session::ArchetypeSelection;

use super::totals::SectionTotals;

/// Archetypes from the considered set whose section score reaches the
/// strong-fit threshold, in canonical rubric order. Every qualifier is kept;
/// collapsing to a single winner here would hide the "multiple archetypes
/// qualify" outcome downstream.
pub(crate) fn qualified_archetypes(
    rubric: &Rubric,
    totals: &SectionTotals,
    considered: &ArchetypeSelection,
) -> Vec<ArchetypeId> {
    ArchetypeId::ordered()
        .into_iter()
        .filter(|archetype| considered.contains(*archetype))
        .filter(|archetype| {
            let section = archetype.section();
            totals.get(section).score >= rubric.strong_fit_threshold(section)
        })
        .collect()
}
