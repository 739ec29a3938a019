use std::collections::BTreeMap;

use crate::canvas::rubric::{Rubric, SectionId, Threshold};
use crate::canvas::scoring::{SectionScore, SectionTotals};
use crate::canvas::session::AnswerSheet;

/// Standard question catalog with pinned absolute thresholds so the message
/// assertions below stay stable if the catalog factors are ever retuned.
pub(super) fn assessment_rubric() -> Rubric {
    let thresholds = BTreeMap::from([
        (SectionId::General, Threshold::Absolute(17)),
        (SectionId::Source, Threshold::Absolute(9)),
        (SectionId::Aggregate, Threshold::Absolute(17)),
        (SectionId::Consumer, Threshold::Absolute(7)),
    ]);
    Rubric::new(Rubric::standard().questions().to_vec(), thresholds)
        .expect("standard questions with absolute thresholds validate")
}

/// Answer sheet with every hard requirement recorded at its maximum score.
pub(super) fn satisfied_hard_requirements(rubric: &Rubric) -> AnswerSheet {
    let mut sheet = AnswerSheet::new();
    let hard: Vec<(&str, u8)> = rubric
        .hard_requirements()
        .map(|question| (question.key, question.max_score))
        .collect();
    for (key, max_score) in hard {
        sheet
            .record(rubric, key, max_score)
            .expect("hard requirement keys resolve");
    }
    sheet
}

/// Record answers within a section until the target score is reached.
pub(super) fn fill_section(
    sheet: &mut AnswerSheet,
    rubric: &Rubric,
    section: SectionId,
    target: u32,
) {
    let mut remaining = target;
    let plan: Vec<(&str, u8)> = rubric
        .questions_in(section)
        .map(|question| (question.key, question.max_score))
        .collect();
    for (key, max_score) in plan {
        let value = remaining.min(u32::from(max_score)) as u8;
        sheet.record(rubric, key, value).expect("in-range answer");
        remaining -= u32::from(value);
    }
    assert_eq!(remaining, 0, "section cannot reach target score {target}");
}

/// Hand-built totals, mirroring how a UI would feed precomputed totals back
/// into qualification and recommendation.
pub(super) fn totals_of(
    rubric: &Rubric,
    general: u32,
    source: u32,
    aggregate: u32,
    consumer: u32,
) -> SectionTotals {
    SectionTotals::from_entries([
        (
            SectionId::General,
            SectionScore {
                score: general,
                max: rubric.section_max(SectionId::General),
            },
        ),
        (
            SectionId::Source,
            SectionScore {
                score: source,
                max: rubric.section_max(SectionId::Source),
            },
        ),
        (
            SectionId::Aggregate,
            SectionScore {
                score: aggregate,
                max: rubric.section_max(SectionId::Aggregate),
            },
        ),
        (
            SectionId::Consumer,
            SectionScore {
                score: consumer,
                max: rubric.section_max(SectionId::Consumer),
            },
        ),
    ])
}
