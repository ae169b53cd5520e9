// crates/review-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Review Gate Runtime
// Description: Rule evaluation engine and configuration.
// Purpose: Provide the single canonical evaluation path over review snapshots.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The runtime evaluates completion rules against one immutable snapshot:
//! a pure, synchronous, bounded computation with no I/O and no shared
//! state. Hosts construct a [`ReviewGate`], hand it a snapshot, and render
//! the returned [`crate::core::RuleResult`].

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod blockers;
pub mod combinator;
pub mod emoji_approval;
pub mod file_coverage;
pub mod platform_approval;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use combinator::DEFAULT_RULES;
pub use combinator::Rule;
pub use combinator::evaluate_any;

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ReviewSnapshot;
use crate::core::RuleResult;
use crate::core::SnapshotError;

// ============================================================================
// SECTION: Engine Configuration
// ============================================================================

/// Minimum approval count floor used when no designated reviewers exist.
pub const DEFAULT_NUM_APPROVALS_REQUIRED: usize = 1;

/// Configuration for the review gate engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Minimum number of approvals or LGTMs required to merge.
    pub num_approvals_required: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            num_approvals_required: DEFAULT_NUM_APPROVALS_REQUIRED,
        }
    }
}

// ============================================================================
// SECTION: Review Gate Engine
// ============================================================================

/// Merge-readiness engine evaluating the rule list over snapshots.
///
/// # Invariants
/// - Evaluation is idempotent: the same snapshot yields identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewGate {
    /// Engine configuration.
    config: EngineConfig,
}

impl ReviewGate {
    /// Creates a new engine with the provided configuration.
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self {
            config,
        }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validates a snapshot and evaluates the default rule list against it.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when the snapshot is structurally malformed.
    pub fn evaluate(&self, snapshot: &ReviewSnapshot) -> Result<RuleResult, SnapshotError> {
        self.evaluate_rules(&DEFAULT_RULES, snapshot)
    }

    /// Validates a snapshot and evaluates an explicit rule list against it.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when the snapshot is structurally malformed.
    pub fn evaluate_rules(
        &self,
        rules: &[Rule],
        snapshot: &ReviewSnapshot,
    ) -> Result<RuleResult, SnapshotError> {
        snapshot.validate()?;
        Ok(evaluate_any(rules, snapshot, &self.config))
    }
}
