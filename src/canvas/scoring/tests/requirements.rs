use super::common::*;
use crate::canvas::scoring::ScoringEngine;
use crate::canvas::session::AnswerSheet;

#[test]
fn unanswered_hard_requirement_is_an_issue() {
    let rubric = assessment_rubric();
    let engine = ScoringEngine::new(&rubric);

    let issues = engine.hard_requirement_issues(&AnswerSheet::new());
    let keys: Vec<&str> = issues.iter().map(|question| question.key).collect();
    assert_eq!(
        keys,
        vec![
            "general-single-owner",
            "source-domain-modules",
            "aggregate-cost-owner",
        ]
    );
}

#[test]
fn answer_below_max_is_an_issue() {
    let rubric = assessment_rubric();
    let engine = ScoringEngine::new(&rubric);

    let mut sheet = satisfied_hard_requirements(&rubric);
    sheet
        .record(&rubric, "source-domain-modules", 1)
        .expect("records");

    let issues = engine.hard_requirement_issues(&sheet);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].key, "source-domain-modules");
}

#[test]
fn max_score_satisfies_every_hard_requirement() {
    let rubric = assessment_rubric();
    let engine = ScoringEngine::new(&rubric);

    let sheet = satisfied_hard_requirements(&rubric);
    assert!(engine.hard_requirement_issues(&sheet).is_empty());
}

#[test]
fn zero_is_recorded_but_still_unsatisfied() {
    let rubric = assessment_rubric();
    let engine = ScoringEngine::new(&rubric);

    let mut sheet = AnswerSheet::new();
    sheet
        .record(&rubric, "aggregate-cost-owner", 0)
        .expect("zero is a valid recorded score");

    let issues = engine.hard_requirement_issues(&sheet);
    assert!(issues.iter().any(|question| question.key == "aggregate-cost-owner"));
}
