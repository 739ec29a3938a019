use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::canvas::rubric::ArchetypeId;

/// Default minimum number of archetypes a respondent must keep in scope.
pub const MINIMUM_SELECTED_ARCHETYPES: usize = 1;

/// The set of archetypes currently under consideration. The assessment has
/// shipped with "always all", "pick any subset", and "pick exactly one"
/// variants, so this is deliberately set-valued with the floor expressed as a
/// policy rather than baked into the type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeSelection {
    selected: BTreeSet<ArchetypeId>,
}

impl ArchetypeSelection {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every archetype in scope, the original behavior of the assessment.
    pub fn all() -> Self {
        Self {
            selected: ArchetypeId::ordered().into_iter().collect(),
        }
    }

    pub fn select(&mut self, archetype: ArchetypeId) {
        self.selected.insert(archetype);
    }

    pub fn deselect(&mut self, archetype: ArchetypeId) {
        self.selected.remove(&archetype);
    }

    pub fn toggle(&mut self, archetype: ArchetypeId) {
        if !self.selected.remove(&archetype) {
            self.selected.insert(archetype);
        }
    }

    pub fn contains(&self, archetype: ArchetypeId) -> bool {
        self.selected.contains(&archetype)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected archetypes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = ArchetypeId> + '_ {
        self.selected.iter().copied()
    }

    pub fn meets(&self, policy: &SelectionPolicy) -> bool {
        self.selected.len() >= policy.minimum
    }

    pub(crate) fn as_set(&self) -> &BTreeSet<ArchetypeId> {
        &self.selected
    }
}

impl FromIterator<ArchetypeId> for ArchetypeSelection {
    fn from_iter<I: IntoIterator<Item = ArchetypeId>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeSet<ArchetypeId>> for ArchetypeSelection {
    fn from(selected: BTreeSet<ArchetypeId>) -> Self {
        Self { selected }
    }
}

/// Floor on how many archetypes must stay selected before the assessment is
/// considered answerable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionPolicy {
    pub minimum: usize,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            minimum: MINIMUM_SELECTED_ARCHETYPES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_follows_canonical_order() {
        let selection: ArchetypeSelection =
            [ArchetypeId::Consumer, ArchetypeId::Source].into_iter().collect();
        let ordered: Vec<ArchetypeId> = selection.iter().collect();
        assert_eq!(ordered, vec![ArchetypeId::Source, ArchetypeId::Consumer]);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut selection = ArchetypeSelection::empty();
        selection.toggle(ArchetypeId::Aggregate);
        assert!(selection.contains(ArchetypeId::Aggregate));
        selection.toggle(ArchetypeId::Aggregate);
        assert!(!selection.contains(ArchetypeId::Aggregate));
    }

    #[test]
    fn default_policy_requires_one_selection() {
        let policy = SelectionPolicy::default();
        assert!(!ArchetypeSelection::empty().meets(&policy));
        assert!(ArchetypeSelection::all().meets(&policy));
    }

    #[test]
    fn policy_floor_is_configurable() {
        let policy = SelectionPolicy { minimum: 0 };
        assert!(ArchetypeSelection::empty().meets(&policy));

        let exactly_one = SelectionPolicy { minimum: 1 };
        let single: ArchetypeSelection = [ArchetypeId::Source].into_iter().collect();
        assert!(single.meets(&exactly_one));
    }
}
