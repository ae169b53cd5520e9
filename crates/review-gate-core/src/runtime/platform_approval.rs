// crates/review-gate-core/src/runtime/platform_approval.rs
// ============================================================================
// Module: Review Gate Platform-Approval Rule
// Description: Completion by platform-native review approvals.
// Purpose: Count approvals and change requests reported by the hosting platform.
// Dependencies: crate::core, crate::runtime::{blockers, EngineConfig}
// ============================================================================

//! ## Overview
//! The platform-approval rule reads the per-user approval states directly.
//! No staleness tracking is needed: the platform itself invalidates
//! approvals on new pushes. Assignees other than the author form the
//! required set; approvals from outside it fill only the remaining slots,
//! and any outstanding change request is surfaced in the description.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ApprovalState;
use crate::core::ReviewSnapshot;
use crate::core::RuleResult;
use crate::core::Username;
use crate::runtime::EngineConfig;
use crate::runtime::blockers::discussion_blockers;
use crate::runtime::blockers::unique_by_username;

// ============================================================================
// SECTION: Evaluation
// ============================================================================

/// Evaluates the platform-approval rule against a snapshot.
#[must_use]
pub fn evaluate(snapshot: &ReviewSnapshot, config: &EngineConfig) -> RuleResult {
    let pull_request = &snapshot.pull_request;
    let approvals = &pull_request.approvals;

    let total_approved =
        approvals.values().filter(|state| **state == ApprovalState::Approved).count();
    let num_rejections = approvals
        .values()
        .filter(|state| **state == ApprovalState::ChangesRequested)
        .count();

    let blockers = discussion_blockers(&snapshot.discussions);

    // Baseline: discussion blockers followed by every requested reviewer.
    let mut baseline = blockers.clone();
    baseline.extend(
        pull_request.requested_reviewers.iter().map(|reviewer| reviewer.username.clone()),
    );

    let author = &pull_request.author.username;
    let required: Vec<Username> = pull_request
        .assignees
        .iter()
        .map(|assignee| assignee.username.clone())
        .filter(|username| username != author)
        .collect();

    let mut num_approvals_required = config.num_approvals_required;
    let mut num_approvals = total_approved;
    let mut pending_reviewers = baseline;

    if !required.is_empty() {
        num_approvals_required = required.len().max(config.num_approvals_required);
        let approved_among_required = required
            .iter()
            .filter(|username| approvals.get(*username) == Some(&ApprovalState::Approved))
            .count();
        let open_slots = num_approvals_required.saturating_sub(required.len());
        num_approvals = approved_among_required + total_approved.min(open_slots);

        let mut combined: Vec<Username> = required
            .iter()
            .filter(|username| approvals.get(*username) != Some(&ApprovalState::Approved))
            .filter(|username| !blockers.contains(*username))
            .cloned()
            .collect();
        combined.append(&mut pending_reviewers);
        pending_reviewers = combined;
    }

    let pending_reviewers = unique_by_username(pending_reviewers);

    let rejection_prefix = if num_rejections > 0 {
        format!("{num_rejections} change requests, ")
    } else {
        String::new()
    };
    let short_rejection_prefix =
        if num_rejections > 0 { format!("{num_rejections} \u{2717}, ") } else { String::new() };

    RuleResult {
        completed: num_approvals >= num_approvals_required,
        description: format!(
            "{rejection_prefix}{num_approvals} of {num_approvals_required} approvals obtained"
        ),
        short_description: format!(
            "{short_rejection_prefix}{num_approvals} of {num_approvals_required} \u{2713}"
        ),
        pending_reviewers,
        debug: None,
    }
}
