use super::common::*;
use crate::canvas::rubric::ArchetypeId;
use crate::canvas::scoring::{ScoringEngine, Severity};
use crate::canvas::session::ArchetypeSelection;

#[test]
fn weak_general_viability_short_circuits_everything_else() {
    let rubric = assessment_rubric();
    let engine = ScoringEngine::new(&rubric);

    // Source and consumer would qualify, and hard requirements are untouched;
    // none of that matters while the foundation is unsound.
    let totals = totals_of(&rubric, 16, 10, 0, 10);
    let result = engine.recommendation(
        &totals,
        &satisfied_hard_requirements(&rubric),
        &ArchetypeSelection::all(),
    );

    assert_eq!(
        result.message,
        "General viability is below 17. Rework the boundary before moving ahead."
    );
    assert_eq!(result.severity, Severity::Negative);
}

#[test]
fn mentions_qualifying_archetype_when_blocked_by_a_hard_requirement() {
    let rubric = assessment_rubric();
    let engine = ScoringEngine::new(&rubric);

    let mut sheet = satisfied_hard_requirements(&rubric);
    sheet
        .record(&rubric, "source-domain-modules", 0)
        .expect("records");

    let totals = totals_of(&rubric, 19, 10, 0, 0);
    let result = engine.recommendation(&totals, &sheet, &ArchetypeSelection::all());

    assert_eq!(
        result.message,
        "Qualifies for source-aligned, but resolve hard requirements before building the product."
    );
    assert_eq!(result.severity, Severity::Negative);
}

#[test]
fn single_qualifier_with_clean_hard_requirements_is_positive() {
    let rubric = assessment_rubric();
    let engine = ScoringEngine::new(&rubric);

    let totals = totals_of(&rubric, 19, 10, 0, 0);
    let result = engine.recommendation(
        &totals,
        &satisfied_hard_requirements(&rubric),
        &ArchetypeSelection::all(),
    );

    assert_eq!(result.message, "Build a source-aligned data product.");
    assert_eq!(result.severity, Severity::Positive);
}

#[test]
fn aggregate_recommendation_uses_an_article() {
    let rubric = assessment_rubric();
    let engine = ScoringEngine::new(&rubric);

    let totals = totals_of(&rubric, 19, 0, 18, 0);
    let result = engine.recommendation(
        &totals,
        &satisfied_hard_requirements(&rubric),
        &ArchetypeSelection::all(),
    );

    assert_eq!(result.message, "Build an aggregate data product.");
    assert_eq!(result.severity, Severity::Positive);
}

#[test]
fn multiple_qualifiers_are_a_cautionary_outcome() {
    let rubric = assessment_rubric();
    let engine = ScoringEngine::new(&rubric);

    let totals = totals_of(&rubric, 20, 10, 18, 0);
    let result = engine.recommendation(
        &totals,
        &satisfied_hard_requirements(&rubric),
        &ArchetypeSelection::all(),
    );

    assert_eq!(
        result.message,
        "Multiple archetypes qualify. Consider layering the products deliberately."
    );
    assert_eq!(result.severity, Severity::Caution);
}

#[test]
fn no_qualifier_means_redesigning_the_cut() {
    let rubric = assessment_rubric();
    let engine = ScoringEngine::new(&rubric);

    let totals = totals_of(&rubric, 20, 8, 0, 0);
    let result = engine.recommendation(
        &totals,
        &satisfied_hard_requirements(&rubric),
        &ArchetypeSelection::all(),
    );

    assert_eq!(
        result.message,
        "No archetype fit crossed the threshold. Redesign the cut."
    );
    assert_eq!(result.severity, Severity::Negative);
}

#[test]
fn general_hard_requirement_blocks_even_without_qualifiers() {
    let rubric = assessment_rubric();
    let engine = ScoringEngine::new(&rubric);

    let mut sheet = satisfied_hard_requirements(&rubric);
    sheet
        .record(&rubric, "general-single-owner", 0)
        .expect("records");

    let totals = totals_of(&rubric, 20, 8, 0, 0);
    let result = engine.recommendation(&totals, &sheet, &ArchetypeSelection::all());

    assert_eq!(
        result.message,
        "No archetype qualifies yet; also resolve hard requirements before building the product."
    );
    assert_eq!(result.severity, Severity::Negative);
}

#[test]
fn hard_requirements_of_non_qualifying_archetypes_never_block() {
    let rubric = assessment_rubric();
    let engine = ScoringEngine::new(&rubric);

    // Source misses its threshold, so its broken hard requirement must not be
    // surfaced as a reason to withhold the outcome.
    let mut sheet = satisfied_hard_requirements(&rubric);
    sheet
        .record(&rubric, "source-domain-modules", 0)
        .expect("records");

    let totals = totals_of(&rubric, 20, 8, 0, 0);
    let result = engine.recommendation(&totals, &sheet, &ArchetypeSelection::all());

    assert_eq!(
        result.message,
        "No archetype fit crossed the threshold. Redesign the cut."
    );
    assert_eq!(result.severity, Severity::Negative);
}

#[test]
fn broken_hard_requirement_is_ignored_while_another_archetype_wins() {
    let rubric = assessment_rubric();
    let engine = ScoringEngine::new(&rubric);

    let mut sheet = satisfied_hard_requirements(&rubric);
    sheet
        .record(&rubric, "aggregate-cost-owner", 0)
        .expect("records");

    let totals = totals_of(&rubric, 20, 10, 5, 0);
    let result = engine.recommendation(&totals, &sheet, &ArchetypeSelection::all());

    assert_eq!(result.message, "Build a source-aligned data product.");
    assert_eq!(result.severity, Severity::Positive);
}

#[test]
fn blocking_message_names_every_qualifier() {
    let rubric = assessment_rubric();
    let engine = ScoringEngine::new(&rubric);

    let mut sheet = satisfied_hard_requirements(&rubric);
    sheet
        .record(&rubric, "source-domain-modules", 1)
        .expect("records");
    sheet
        .record(&rubric, "aggregate-cost-owner", 1)
        .expect("records");

    let totals = totals_of(&rubric, 20, 10, 18, 0);
    let result = engine.recommendation(&totals, &sheet, &ArchetypeSelection::all());

    assert_eq!(
        result.message,
        "Qualifies for source-aligned and aggregate, but resolve hard requirements before building the product."
    );
    assert_eq!(result.severity, Severity::Negative);
}

#[test]
fn deselected_archetypes_are_out_of_contention() {
    let rubric = assessment_rubric();
    let engine = ScoringEngine::new(&rubric);

    let totals = totals_of(&rubric, 20, 10, 18, 0);
    let considered: ArchetypeSelection = [ArchetypeId::Aggregate].into_iter().collect();
    let result = engine.recommendation(
        &totals,
        &satisfied_hard_requirements(&rubric),
        &considered,
    );

    assert_eq!(result.message, "Build an aggregate data product.");
    assert_eq!(result.severity, Severity::Positive);
}

#[test]
fn same_inputs_always_yield_the_same_outcome() {
    let rubric = assessment_rubric();
    let engine = ScoringEngine::new(&rubric);

    let sheet = satisfied_hard_requirements(&rubric);
    let totals = totals_of(&rubric, 19, 10, 0, 0);
    let first = engine.recommendation(&totals, &sheet, &ArchetypeSelection::all());
    let second = engine.recommendation(&totals, &sheet, &ArchetypeSelection::all());
    assert_eq!(first, second);
}
