//! Planning hints

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hints for the planner
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanHints {
    /// Emit the concrete size of a merged or split slot when every factor is
    /// statically known. When false that slot is left for the array library
    /// to infer, unless an untouched dynamic axis already takes the inferred
    /// slot.
    pub fold_static_product: bool,
}

impl Default for PlanHints {
    fn default() -> Self {
        Self {
            fold_static_product: true,
        }
    }
}

impl PlanHints {
    /// Create planning hints with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether statically known merged sizes are folded into the target shape
    pub fn with_fold_static_product(mut self, fold: bool) -> Self {
        self.fold_static_product = fold;
        self
    }
}
