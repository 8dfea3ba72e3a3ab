//! Execution hints and configuration

use axial_planner::PlanHints;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Execution hints for controlling axis operations
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExecHints {
    /// Library key to dispatch to, None = the registry's default library
    pub library: Option<String>,
    /// Hints forwarded to the planner
    pub plan: PlanHints,
    /// Skip the transpose call when the planned permutation is the identity
    pub elide_identity_transpose: bool,
}

impl ExecHints {
    /// Create new execution hints with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the library binding by key
    pub fn with_library(mut self, library: impl Into<String>) -> Self {
        self.library = Some(library.into());
        self
    }

    /// Set planner hints
    pub fn with_plan_hints(mut self, plan: PlanHints) -> Self {
        self.plan = plan;
        self
    }

    /// Set identity transpose elision
    pub fn with_identity_elision(mut self, elide: bool) -> Self {
        self.elide_identity_transpose = elide;
        self
    }
}
