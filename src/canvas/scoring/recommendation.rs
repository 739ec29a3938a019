use serde::{Deserialize, Serialize};

use crate::canvas::rubric::{ArchetypeId, Rubric, SectionId};
use crate::canvas::session::{AnswerSheet, ArchetypeSelection};

use super::totals::SectionTotals;
use super::{qualification, requirements};

/// Severity class attached to every recommendation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Positive,
    Caution,
    Negative,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Positive => "positive",
            Severity::Caution => "caution",
            Severity::Negative => "negative",
        }
    }
}

/// Final outcome of the assessment: a fixed message plus its severity.
/// Purely derived from totals, answers, and the considered archetypes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub message: String,
    pub severity: Severity,
}

impl Recommendation {
    fn negative(message: String) -> Self {
        Self {
            message,
            severity: Severity::Negative,
        }
    }
}

/// Ordered-precedence synthesis; the first matching rule wins.
pub(crate) fn synthesize(
    rubric: &Rubric,
    totals: &SectionTotals,
    answers: &AnswerSheet,
    considered: &ArchetypeSelection,
) -> Recommendation {
    let general_threshold = rubric.strong_fit_threshold(SectionId::General);
    if totals.get(SectionId::General).score < general_threshold {
        // An unsound foundation short-circuits every other check.
        return Recommendation::negative(format!(
            "General viability is below {general_threshold}. Rework the boundary before moving ahead."
        ));
    }

    let qualified = qualification::qualified_archetypes(rubric, totals, considered);
    let issues = requirements::hard_requirement_issues(rubric, answers);
    let blocking = requirements::blocking_issues(&issues, &qualified);

    if !blocking.is_empty() {
        let message = if qualified.is_empty() {
            "No archetype qualifies yet; also resolve hard requirements before building the product."
                .to_string()
        } else {
            format!(
                "Qualifies for {}, but resolve hard requirements before building the product.",
                join_labels(&qualified)
            )
        };
        return Recommendation::negative(message);
    }

    match qualified.as_slice() {
        [] => Recommendation::negative(
            "No archetype fit crossed the threshold. Redesign the cut.".to_string(),
        ),
        [only] => Recommendation {
            message: build_message(*only),
            severity: Severity::Positive,
        },
        _ => Recommendation {
            message: "Multiple archetypes qualify. Consider layering the products deliberately."
                .to_string(),
            severity: Severity::Caution,
        },
    }
}

fn build_message(archetype: ArchetypeId) -> String {
    let label = archetype.label();
    let article = if label.starts_with(['a', 'e', 'i', 'o', 'u']) {
        "an"
    } else {
        "a"
    };
    format!("Build {article} {label} data product.")
}

fn join_labels(archetypes: &[ArchetypeId]) -> String {
    let labels: Vec<&str> = archetypes.iter().map(|archetype| archetype.label()).collect();
    match labels.as_slice() {
        [] => String::new(),
        [only] => (*only).to_string(),
        [head @ .., last] => format!("{} and {last}", head.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_message_picks_the_indefinite_article_by_vowel() {
        assert_eq!(
            build_message(ArchetypeId::Source),
            "Build a source-aligned data product."
        );
        assert_eq!(
            build_message(ArchetypeId::Aggregate),
            "Build an aggregate data product."
        );
        assert_eq!(
            build_message(ArchetypeId::Consumer),
            "Build a consumer-aligned data product."
        );
    }

    #[test]
    fn join_labels_reads_naturally() {
        assert_eq!(join_labels(&[ArchetypeId::Source]), "source-aligned");
        assert_eq!(
            join_labels(&[ArchetypeId::Source, ArchetypeId::Aggregate]),
            "source-aligned and aggregate"
        );
        assert_eq!(
            join_labels(&ArchetypeId::ordered()),
            "source-aligned, aggregate and consumer-aligned"
        );
    }
}
