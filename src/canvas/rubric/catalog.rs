//! Hand-authored standard rubric for the data product cut assessment.

use std::collections::BTreeMap;

use super::domain::{Question, SectionId, Threshold};

const fn question(
    key: &'static str,
    section: SectionId,
    group: &'static str,
    prompt: &'static str,
    max_score: u8,
) -> Question {
    Question {
        key,
        section,
        group,
        prompt,
        max_score,
        hard_requirement: false,
    }
}

const fn hard_requirement(
    key: &'static str,
    section: SectionId,
    group: &'static str,
    prompt: &'static str,
    max_score: u8,
) -> Question {
    Question {
        key,
        section,
        group,
        prompt,
        max_score,
        hard_requirement: true,
    }
}

pub(super) fn standard_questions() -> Vec<Question> {
    vec![
        question(
            "general-purpose-one-sentence",
            SectionId::General,
            "Clear consumer & use case",
            "Can you describe the main purpose in one sentence?",
            2,
        ),
        question(
            "general-clear-teams",
            SectionId::General,
            "Clear consumer & use case",
            "Are there any specific teams or roles that want to use this product right now?",
            2,
        ),
        hard_requirement(
            "general-single-owner",
            SectionId::General,
            "Stable ownership",
            "Is one specific domain or team accountable for semantics, quality, and operations?",
            2,
        ),
        question(
            "general-future-owner",
            SectionId::General,
            "Stable ownership",
            "Would the owner credibly handle future changes?",
            2,
        ),
        question(
            "general-standalone-unit",
            SectionId::General,
            "Low integration burden",
            "Is this the smallest useful standalone unit that does not force consumers to stitch things together?",
            2,
        ),
        question(
            "general-immediate-use",
            SectionId::General,
            "Low integration burden",
            "Can a typical consumer immediately start using this product meaningfully on their own?",
            2,
        ),
        question(
            "general-needed-only",
            SectionId::General,
            "Bounded scope",
            "Does the product include only what is needed for its purpose?",
            2,
        ),
        question(
            "general-no-speculative-data",
            SectionId::General,
            "Bounded scope",
            "Is it limited to only including things that are useful in the present?",
            2,
        ),
        question(
            "general-independent-sla",
            SectionId::General,
            "Distinct SLA & quality",
            "Can you define the latency, refresh cadence, completeness, and data quality rules for this product independently?",
            2,
        ),
        question(
            "general-coherent-operations",
            SectionId::General,
            "Coherent operations",
            "Do the contents share similar batch versus stream needs, frequency and latency expectations?",
            2,
        ),
        question(
            "source-standalone-sense",
            SectionId::Source,
            "Source-aligned",
            "Does the data product make sense on its own, or does it require the other parts of the source data?",
            2,
        ),
        question(
            "source-cohesive-whole",
            SectionId::Source,
            "Source-aligned",
            "Does it feel like a cohesive, integrated whole rather than a random collection of related items?",
            2,
        ),
        hard_requirement(
            "source-domain-modules",
            SectionId::Source,
            "Source-aligned",
            "Does the cut follow meaningful domain modules rather than whole systems?",
            2,
        ),
        question(
            "source-local-dimensions",
            SectionId::Source,
            "Source-aligned",
            "Does the data contain only internal or also cross-domain dimensions?",
            2,
        ),
        // Positive polarity: a higher score means changes stay isolated to
        // this product.
        question(
            "source-isolated-changes",
            SectionId::Source,
            "Source-aligned",
            "Do changes on the data source impact only this data product?",
            2,
        ),
        question(
            "aggregate-broad-demand",
            SectionId::Aggregate,
            "Aggregate",
            "Are there more than two teams that need the same derived view with identical meaning?",
            3,
        ),
        question(
            "aggregate-duplicate-integration",
            SectionId::Aggregate,
            "Aggregate",
            "Would teams repeatedly build the same integration or calculation without the aggregate?",
            2,
        ),
        question(
            "aggregate-combined-value",
            SectionId::Aggregate,
            "Aggregate",
            "Does value emerge only after combining sources?",
            3,
        ),
        question(
            "aggregate-expensive-derivation",
            SectionId::Aggregate,
            "Aggregate",
            "Is the derivation expensive (feature engineering, entity matching, deduplication, cross-source joins)?",
            2,
        ),
        hard_requirement(
            "aggregate-cost-owner",
            SectionId::Aggregate,
            "Aggregate",
            "Is there someone in the company willing to bear the costs of this data product?",
            3,
        ),
        question(
            "aggregate-tight-scope",
            SectionId::Aggregate,
            "Aggregate",
            "Is the scope tight enough so the product is not drifting toward a mini data warehouse?",
            2,
        ),
        question(
            "aggregate-strong-governance",
            SectionId::Aggregate,
            "Aggregate",
            "Is the outcome valuable enough to justify the required strong governance?",
            3,
        ),
        question(
            "aggregate-semantics-owner",
            SectionId::Aggregate,
            "Aggregate",
            "Can the owning team maintain the integrated semantics, despite spanning multiple sources?",
            3,
        ),
        question(
            "consumer-verb-object",
            SectionId::Consumer,
            "Consumer-aligned",
            "Can this purpose be expressed as a verb + object sentence (for example, monitor churn by segment, forecast demand by categories, or review fraud cases)?",
            3,
        ),
        question(
            "consumer-artifact",
            SectionId::Consumer,
            "Consumer-aligned",
            "Does the product roughly map one-to-one to a key artifact (dashboard core, report, reverse ETL output, ML feature set) or does it feed many unrelated dashboards?",
            3,
        ),
        question(
            "consumer-process-boundary",
            SectionId::Consumer,
            "Consumer-aligned",
            "Does the boundary follow a business process and not a system boundary?",
            2,
        ),
        question(
            "consumer-decision-boundary",
            SectionId::Consumer,
            "Consumer-aligned",
            "Does the cut reflect how a consumer acts or decides, not how data happens to be stored?",
            2,
        ),
    ]
}

/// Strong-fit factors per section. Thresholds are always resolved against the
/// derived section maximum, never hand-maintained as literals.
pub(super) fn standard_thresholds() -> BTreeMap<SectionId, Threshold> {
    BTreeMap::from([
        (SectionId::General, Threshold::FractionOfMax(0.85)),
        (SectionId::Source, Threshold::FractionOfMax(0.7)),
        (SectionId::Aggregate, Threshold::FractionOfMax(0.8)),
        (SectionId::Consumer, Threshold::FractionOfMax(0.7)),
    ])
}
