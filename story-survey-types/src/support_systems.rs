use serde::{Deserialize, Serialize};

use crate::SupportSystem;

/// The support systems a respondent has selected.
///
/// Behaves like a set (no duplicates) but remembers selection order, which
/// is the order used when the selection is written out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<SupportSystem>", into = "Vec<SupportSystem>")]
pub struct SupportSystems {
    selected: Vec<SupportSystem>,
}

impl SupportSystems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a support system. Returns `false` if it was already selected.
    pub fn insert(&mut self, system: SupportSystem) -> bool {
        if self.contains(system) {
            return false;
        }
        self.selected.push(system);
        true
    }

    /// Deselect a support system. Returns `false` if it was not selected.
    pub fn remove(&mut self, system: SupportSystem) -> bool {
        let before = self.selected.len();
        self.selected.retain(|s| *s != system);
        self.selected.len() != before
    }

    pub fn contains(&self, system: SupportSystem) -> bool {
        self.selected.contains(&system)
    }

    /// Whether "Other" is among the selections.
    pub fn includes_other(&self) -> bool {
        self.contains(SupportSystem::Other)
    }

    /// Iterate selections in the order they were made.
    pub fn iter(&self) -> impl Iterator<Item = SupportSystem> + '_ {
        self.selected.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Labels of the selections joined with `separator`.
    pub fn join(&self, separator: &str) -> String {
        self.iter()
            .map(SupportSystem::label)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl FromIterator<SupportSystem> for SupportSystems {
    fn from_iter<I: IntoIterator<Item = SupportSystem>>(iter: I) -> Self {
        let mut systems = Self::new();
        for system in iter {
            systems.insert(system);
        }
        systems
    }
}

impl From<Vec<SupportSystem>> for SupportSystems {
    fn from(systems: Vec<SupportSystem>) -> Self {
        systems.into_iter().collect()
    }
}

impl From<SupportSystems> for Vec<SupportSystem> {
    fn from(systems: SupportSystems) -> Self {
        systems.selected
    }
}

impl<'a> IntoIterator for &'a SupportSystems {
    type Item = SupportSystem;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, SupportSystem>>;

    fn into_iter(self) -> Self::IntoIter {
        self.selected.iter().copied()
    }
}
