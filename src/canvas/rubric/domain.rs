use serde::{Deserialize, Serialize};

/// Named grouping of rubric questions: general viability plus one section per archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    General,
    Source,
    Aggregate,
    Consumer,
}

impl SectionId {
    pub const fn label(self) -> &'static str {
        match self {
            SectionId::General => "General viability",
            SectionId::Source => "Source-aligned",
            SectionId::Aggregate => "Aggregate",
            SectionId::Consumer => "Consumer-aligned",
        }
    }

    pub const fn ordered() -> [SectionId; 4] {
        [
            SectionId::General,
            SectionId::Source,
            SectionId::Aggregate,
            SectionId::Consumer,
        ]
    }

    /// The archetype this section scores, if any.
    pub const fn archetype(self) -> Option<ArchetypeId> {
        match self {
            SectionId::General => None,
            SectionId::Source => Some(ArchetypeId::Source),
            SectionId::Aggregate => Some(ArchetypeId::Aggregate),
            SectionId::Consumer => Some(ArchetypeId::Consumer),
        }
    }
}

/// Candidate architectural shape for the data product under assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchetypeId {
    Source,
    Aggregate,
    Consumer,
}

impl ArchetypeId {
    pub const fn label(self) -> &'static str {
        match self {
            ArchetypeId::Source => "source-aligned",
            ArchetypeId::Aggregate => "aggregate",
            ArchetypeId::Consumer => "consumer-aligned",
        }
    }

    /// Canonical ordering used everywhere qualification results are reported.
    pub const fn ordered() -> [ArchetypeId; 3] {
        [
            ArchetypeId::Source,
            ArchetypeId::Aggregate,
            ArchetypeId::Consumer,
        ]
    }

    pub const fn section(self) -> SectionId {
        match self {
            ArchetypeId::Source => SectionId::Source,
            ArchetypeId::Aggregate => SectionId::Aggregate,
            ArchetypeId::Consumer => SectionId::Consumer,
        }
    }
}

/// Single rubric entry. Immutable once the rubric is built; `key` is unique
/// across the whole rubric and is what answer sheets and snapshots refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub key: &'static str,
    pub section: SectionId,
    pub group: &'static str,
    pub prompt: &'static str,
    pub max_score: u8,
    pub hard_requirement: bool,
}

impl Question {
    /// Answer labels for this question's scale, lowest score first.
    pub fn scale_labels(&self) -> &'static [&'static str] {
        // Construction-time validation guarantees the scale is supported.
        scale_labels(self.max_score).unwrap_or(&[])
    }

    /// Human-readable label for a recorded value, with a distinct wording for
    /// the unanswered state.
    pub fn answer_label(&self, value: Option<u8>) -> String {
        match value {
            None => "Not answered".to_string(),
            Some(value) => match self.scale_labels().get(value as usize) {
                Some(label) => (*label).to_string(),
                None => format!("Score {value}"),
            },
        }
    }
}

/// Labels for the supported answer scales. Any other scale size is a rubric
/// authoring bug and is rejected when the rubric is constructed.
pub fn scale_labels(max_score: u8) -> Option<&'static [&'static str]> {
    match max_score {
        1 => Some(&["No", "Yes"]),
        2 => Some(&["No", "Partially / unclear", "Yes"]),
        3 => Some(&["No", "Limited evidence", "Mostly there", "Fully there"]),
        _ => None,
    }
}

/// Strong-fit threshold for a section, either fixed or derived from the
/// section's maximum at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Threshold {
    Absolute(u32),
    FractionOfMax(f64),
}

impl Threshold {
    /// Resolve against the live section maximum. Fractions round half away
    /// from zero, applied once on the final product.
    pub fn resolve(self, section_max: u32) -> u32 {
        match self {
            Threshold::Absolute(value) => value,
            Threshold::FractionOfMax(factor) => (section_max as f64 * factor).round() as u32,
        }
    }
}
