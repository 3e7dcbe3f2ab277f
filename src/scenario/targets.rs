use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::parameters::normalize_fraction;
use crate::formula::FormulaId;

/// Expected reduction of each formula's annual cost after automation (0..1).
/// Formulas without an entry assume no gain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReductionTargets(BTreeMap<FormulaId, f64>);

impl ReductionTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: FormulaId) -> f64 {
        self.0.get(&id).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, id: FormulaId, target: f64) {
        self.0.insert(id, target);
    }

    pub fn with(mut self, id: FormulaId, target: f64) -> Self {
        self.set(id, target);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormulaId, f64)> + '_ {
        self.0.iter().map(|(id, t)| (*id, *t))
    }

    /// Copy with whole-percent entries converted to fractions.
    pub fn normalized(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|(id, t)| (*id, normalize_fraction(*t)))
                .collect(),
        )
    }
}

impl FromIterator<(FormulaId, f64)> for ReductionTargets {
    fn from_iter<T: IntoIterator<Item = (FormulaId, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
