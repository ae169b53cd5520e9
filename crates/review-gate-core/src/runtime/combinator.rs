// crates/review-gate-core/src/runtime/combinator.rs
// ============================================================================
// Module: Review Gate Any-Of Combinator
// Description: Priority-ordered OR over the completion rules.
// Purpose: Return the first completed rule result, or a synthesized pending aggregate.
// Dependencies: crate::core, crate::runtime
// ============================================================================

//! ## Overview
//! Rules are a fixed, explicit priority list of tagged variants, not opaque
//! callables. Any one satisfied policy authorizes merge; when none is
//! satisfied, every rule's status is reported side by side so a human can
//! see which path is closest to completion.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::ReviewSnapshot;
use crate::core::RuleResult;
use crate::runtime::EngineConfig;
use crate::runtime::blockers::unique_by_username;
use crate::runtime::emoji_approval;
use crate::runtime::file_coverage;
use crate::runtime::platform_approval;

// ============================================================================
// SECTION: Rules
// ============================================================================

/// Completion rule identifier.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// All files reviewed and all discussions resolved.
    FileCoverage,
    /// Minimum count of sticky or revision-scoped emoji approvals.
    EmojiApproval,
    /// Minimum count of platform-native review approvals.
    PlatformApproval,
}

impl Rule {
    /// Evaluates this rule against a snapshot.
    #[must_use]
    pub fn evaluate(self, snapshot: &ReviewSnapshot, config: &EngineConfig) -> RuleResult {
        match self {
            Self::FileCoverage => file_coverage::evaluate(snapshot),
            Self::EmojiApproval => emoji_approval::evaluate(snapshot, config),
            Self::PlatformApproval => platform_approval::evaluate(snapshot, config),
        }
    }
}

/// Default rule priority order.
pub const DEFAULT_RULES: [Rule; 3] =
    [Rule::FileCoverage, Rule::EmojiApproval, Rule::PlatformApproval];

// ============================================================================
// SECTION: Any-Of Evaluation
// ============================================================================

/// Evaluates rules in order and returns the first completed result verbatim.
///
/// When no rule is completed, a pending aggregate is synthesized: the
/// sub-descriptions joined with `" / "` in rule order, and the union of
/// every rule's pending reviewers, unique by username.
#[must_use]
pub fn evaluate_any(
    rules: &[Rule],
    snapshot: &ReviewSnapshot,
    config: &EngineConfig,
) -> RuleResult {
    let mut results: Vec<RuleResult> =
        rules.iter().map(|rule| rule.evaluate(snapshot, config)).collect();

    if let Some(position) = results.iter().position(|result| result.completed) {
        return results.swap_remove(position);
    }

    let description = results
        .iter()
        .map(|result| result.description.as_str())
        .collect::<Vec<_>>()
        .join(" / ");
    let short_description = results
        .iter()
        .map(|result| result.short_description.as_str())
        .collect::<Vec<_>>()
        .join(" / ");
    let pending_reviewers = unique_by_username(
        results.into_iter().flat_map(|result| result.pending_reviewers).collect(),
    );

    RuleResult {
        completed: false,
        description,
        short_description,
        pending_reviewers,
        debug: None,
    }
}
