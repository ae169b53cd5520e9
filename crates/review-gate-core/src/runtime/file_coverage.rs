// crates/review-gate-core/src/runtime/file_coverage.rs
// ============================================================================
// Module: Review Gate File-Coverage Rule
// Description: Completion by "all files reviewed and all discussions resolved".
// Purpose: Decide coverage-based approval and name the reviewers still blocking it.
// Dependencies: crate::core, crate::runtime::blockers
// ============================================================================

//! ## Overview
//! The file-coverage rule completes when the summary reports no unreviewed
//! files and no unresolved discussions. Its pending-reviewer computation is
//! richer than the completion flag: reviewers of the last reviewed revision
//! of each now-unreviewed file, unresolved discussion participants, and
//! designated reviewers who never participated. When nobody is blocking but
//! the pull request is still not mergeable, the author becomes the pending
//! party.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::FileRevision;
use crate::core::Mergeability;
use crate::core::ReviewSnapshot;
use crate::core::RuleResult;
use crate::core::Username;
use crate::runtime::blockers::discussion_blockers;
use crate::runtime::blockers::push_unique;

// ============================================================================
// SECTION: Evaluation
// ============================================================================

/// Evaluates the file-coverage rule against a snapshot.
#[must_use]
pub fn evaluate(snapshot: &ReviewSnapshot) -> RuleResult {
    let summary = &snapshot.summary;
    let designated = snapshot.pull_request.designated_reviewers();

    let completed =
        summary.num_unreviewed_files == 0 && summary.num_unresolved_discussions == 0;

    let mut reasons = Vec::new();
    let mut short_reasons = Vec::new();

    if summary.num_unreviewed_files > 0 {
        let reviewed = summary.num_files.saturating_sub(summary.num_unreviewed_files);
        reasons.push(format!("{reviewed} of {} files reviewed", summary.num_files));
        short_reasons.push(format!(
            "{} file{}",
            summary.num_unreviewed_files,
            plural(summary.num_unreviewed_files)
        ));
    } else {
        reasons.push("all files reviewed".to_string());
    }

    if summary.num_unresolved_discussions > 0 {
        reasons.push(format!(
            "{} unresolved discussion{}",
            summary.num_unresolved_discussions,
            plural(summary.num_unresolved_discussions)
        ));
        short_reasons.push(format!(
            "{} discussion{}",
            summary.num_unresolved_discussions,
            plural(summary.num_unresolved_discussions)
        ));
    } else {
        reasons.push("all discussions resolved".to_string());
    }

    // For each file whose effective last revision is unreviewed: the most
    // recent prior revision that does have reviewers, or None when the file
    // was never reviewed at all.
    let last_reviewed_of_unreviewed: Vec<Option<&FileRevision>> = snapshot
        .files
        .iter()
        .filter(|file| {
            file.effective_last_revision()
                .is_none_or(|revision| revision.reviewers.is_empty())
        })
        .map(|file| file.revisions.iter().rev().find(|revision| !revision.reviewers.is_empty()))
        .collect();

    let never_reviewed = last_reviewed_of_unreviewed.iter().any(Option::is_none);

    let mut pending_reviewers: Vec<Username> = Vec::new();
    for revision in last_reviewed_of_unreviewed.iter().flatten() {
        for reviewer in &revision.reviewers {
            push_unique(&mut pending_reviewers, reviewer.username.clone());
        }
    }
    for username in discussion_blockers(&snapshot.discussions) {
        push_unique(&mut pending_reviewers, username);
    }
    for reviewer in designated {
        if never_reviewed || !reviewer.participating {
            push_unique(&mut pending_reviewers, reviewer.username.clone());
        }
    }

    if pending_reviewers.is_empty() && !ready_to_merge(snapshot, completed) {
        pending_reviewers.push(snapshot.pull_request.author.username.clone());
    }

    let short_description = if completed {
        format!("{} file{} reviewed", summary.num_files, plural(summary.num_files))
    } else {
        format!("{} left", short_reasons.join(", "))
    };

    RuleResult {
        completed,
        description: reasons.join(", "),
        short_description,
        pending_reviewers,
        debug: None,
    }
}

// ============================================================================
// SECTION: Readiness Check
// ============================================================================

/// Checks actual mergeability once no reviewer is blocking.
///
/// Protected targets defer to the platform's mergeability state; otherwise
/// the review must be complete, out of draft, and every required check must
/// have succeeded.
fn ready_to_merge(snapshot: &ReviewSnapshot, completed: bool) -> bool {
    let pull_request = &snapshot.pull_request;
    if pull_request.target.branch_protected {
        matches!(
            pull_request.mergeability,
            Mergeability::HasHooks | Mergeability::Clean | Mergeability::Unstable
        )
    } else {
        completed
            && pull_request.mergeability != Mergeability::Draft
            && pull_request.checks.iter().all(|check| !check.required || check.success)
    }
}

/// Returns the plural suffix for a count, matching the badge wording.
const fn plural(count: u32) -> &'static str {
    if count > 1 { "s" } else { "" }
}
