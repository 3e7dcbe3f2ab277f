use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::formula::FormulaId;

/// Formulas selected for evaluation. Any subset is valid, including none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedPains(BTreeSet<FormulaId>);

impl SelectedPains {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        FormulaId::ALL.into_iter().collect()
    }

    pub fn is_selected(&self, id: FormulaId) -> bool {
        self.0.contains(&id)
    }

    pub fn select(&mut self, id: FormulaId) {
        self.0.insert(id);
    }

    pub fn deselect(&mut self, id: FormulaId) {
        self.0.remove(&id);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = FormulaId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<FormulaId> for SelectedPains {
    fn from_iter<T: IntoIterator<Item = FormulaId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
