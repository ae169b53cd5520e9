// crates/review-gate-core/tests/emoji_approval.rs
// ============================================================================
// Module: Emoji-Approval Rule Tests
// Description: Tests for the chronological sentiment fold and LGTM counting.
// ============================================================================
//! ## Overview
//! Validates staleness against the revision on record, cancel and sticky
//! precedence, the required-set cap, and the completion floor.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::collections::BTreeMap;

use review_gate_core::EngineConfig;
use review_gate_core::LgtmState;
use review_gate_core::Mergeability;
use review_gate_core::PullRequest;
use review_gate_core::ReviewSnapshot;
use review_gate_core::ReviewSummary;
use review_gate_core::Revision;
use review_gate_core::Rule;
use review_gate_core::RuleDebug;
use review_gate_core::Sentiment;
use review_gate_core::SentimentEmoji;
use review_gate_core::TargetBranch;
use review_gate_core::Timestamp;
use review_gate_core::User;
use review_gate_core::Username;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

fn user(name: &str) -> User {
    User::new(Username::new(name))
}

fn usernames(names: &[&str]) -> Vec<Username> {
    names.iter().copied().map(Username::from).collect()
}

fn sentiment(name: &str, emojis: &[SentimentEmoji], at: i64) -> Sentiment {
    Sentiment {
        username: Username::new(name),
        emojis: emojis.to_vec(),
        timestamp: Timestamp::from_unix_millis(at),
    }
}

fn snapshot_with_revision_at(at: i64) -> ReviewSnapshot {
    ReviewSnapshot {
        summary: ReviewSummary::default(),
        files: Vec::new(),
        discussions: Vec::new(),
        sentiments: Vec::new(),
        revisions: vec![Revision {
            obsolete: false,
            snapshot_timestamp: Timestamp::from_unix_millis(at),
        }],
        pull_request: PullRequest {
            requested_reviewers: Vec::new(),
            assignees: Vec::new(),
            author: user("carol"),
            mergeability: Mergeability::Clean,
            checks: Vec::new(),
            approvals: BTreeMap::new(),
            target: TargetBranch::default(),
        },
    }
}

fn evaluate(snapshot: &ReviewSnapshot) -> review_gate_core::RuleResult {
    Rule::EmojiApproval.evaluate(snapshot, &EngineConfig::default())
}

// ============================================================================
// SECTION: Staleness
// ============================================================================

#[test]
fn lgtm_at_or_after_revision_is_current() {
    let mut snapshot = snapshot_with_revision_at(3);
    snapshot.pull_request.requested_reviewers = vec![user("alice")];
    snapshot.sentiments = vec![sentiment("alice", &[SentimentEmoji::Lgtm], 5)];

    let result = evaluate(&snapshot);
    assert!(result.completed);
    assert_eq!(result.description, "1 of 1 LGTMs obtained");
    assert_eq!(result.short_description, "1/1 LGTMs");
    assert!(result.pending_reviewers.is_empty());
}

#[test]
fn lgtm_before_latest_revision_is_stale() {
    let mut snapshot = snapshot_with_revision_at(3);
    snapshot.revisions.push(Revision {
        obsolete: false,
        snapshot_timestamp: Timestamp::from_unix_millis(10),
    });
    snapshot.pull_request.requested_reviewers = vec![user("alice")];
    snapshot.sentiments = vec![sentiment("alice", &[SentimentEmoji::Lgtm], 5)];

    let result = evaluate(&snapshot);
    assert!(!result.completed);
    assert_eq!(result.description, "0 of 1 LGTMs obtained, and 1 stale");
    assert_eq!(result.short_description, "0/1 LGTMs, 1 stale");
    assert_eq!(result.pending_reviewers, usernames(&["alice"]));
}

#[test]
fn obsolete_revisions_are_ignored_for_staleness() {
    let mut snapshot = snapshot_with_revision_at(3);
    snapshot.revisions.push(Revision {
        obsolete: true,
        snapshot_timestamp: Timestamp::from_unix_millis(10),
    });
    snapshot.sentiments = vec![sentiment("alice", &[SentimentEmoji::Lgtm], 5)];

    let result = evaluate(&snapshot);
    assert!(result.completed);
}

#[test]
fn stale_entry_is_refreshed_by_a_later_lgtm() {
    let mut snapshot = snapshot_with_revision_at(5);
    snapshot.sentiments = vec![
        sentiment("alice", &[SentimentEmoji::Lgtm], 1),
        sentiment("alice", &[SentimentEmoji::Lgtm], 6),
    ];

    let result = evaluate(&snapshot);
    assert!(result.completed);
    assert_eq!(result.description, "1 of 1 LGTMs obtained");
}

// ============================================================================
// SECTION: Sticky and Cancel Precedence
// ============================================================================

#[test]
fn strong_lgtm_survives_later_revisions() {
    let mut snapshot = snapshot_with_revision_at(10);
    snapshot.sentiments = vec![sentiment("alice", &[SentimentEmoji::LgtmStrong], 1)];

    let result = evaluate(&snapshot);
    assert!(result.completed);
}

#[test]
fn cancel_removes_a_strong_approval() {
    let mut snapshot = snapshot_with_revision_at(1);
    snapshot.sentiments = vec![
        sentiment("alice", &[SentimentEmoji::LgtmStrong], 2),
        sentiment("alice", &[SentimentEmoji::LgtmCancel], 3),
    ];

    let result = evaluate(&snapshot);
    assert!(!result.completed);
    assert_eq!(result.description, "0 of 1 LGTMs obtained");
}

#[test]
fn cancel_wins_within_a_single_event() {
    let mut snapshot = snapshot_with_revision_at(1);
    snapshot.sentiments = vec![sentiment(
        "alice",
        &[SentimentEmoji::LgtmStrong, SentimentEmoji::LgtmCancel],
        2,
    )];

    let result = evaluate(&snapshot);
    assert!(!result.completed);
}

#[test]
fn plain_lgtm_does_not_downgrade_a_sticky_approval() {
    let mut snapshot = snapshot_with_revision_at(10);
    snapshot.sentiments = vec![
        sentiment("alice", &[SentimentEmoji::LgtmStrong], 1),
        sentiment("alice", &[SentimentEmoji::Lgtm], 2),
    ];

    let result = evaluate(&snapshot);
    assert!(result.completed);
    assert_eq!(result.description, "1 of 1 LGTMs obtained");
}

// ============================================================================
// SECTION: Required-Set Cap and Threshold Floor
// ============================================================================

#[test]
fn outside_approvals_cannot_fill_required_slots() {
    let mut snapshot = snapshot_with_revision_at(1);
    snapshot.pull_request.requested_reviewers = vec![user("alice")];
    snapshot.sentiments = vec![
        sentiment("bob", &[SentimentEmoji::LgtmStrong], 2),
        sentiment("dave", &[SentimentEmoji::LgtmStrong], 3),
    ];

    let result = evaluate(&snapshot);
    assert!(!result.completed);
    assert_eq!(result.description, "0 of 1 LGTMs obtained");
    assert_eq!(result.pending_reviewers, usernames(&["alice"]));
}

#[test]
fn one_required_approval_completes_despite_larger_requirement() {
    // Completion gates on the configured floor, not the computed requirement.
    let mut snapshot = snapshot_with_revision_at(1);
    snapshot.pull_request.requested_reviewers = vec![user("alice"), user("bob")];
    snapshot.sentiments = vec![sentiment("alice", &[SentimentEmoji::LgtmStrong], 2)];

    let result = evaluate(&snapshot);
    assert!(result.completed);
    assert_eq!(result.description, "1 of 2 LGTMs obtained");
    assert_eq!(result.pending_reviewers, usernames(&["bob"]));
}

#[test]
fn stale_required_reviewer_stays_pending() {
    let mut snapshot = snapshot_with_revision_at(10);
    snapshot.pull_request.requested_reviewers = vec![user("alice")];
    snapshot.sentiments = vec![sentiment("alice", &[SentimentEmoji::Lgtm], 5)];

    let result = evaluate(&snapshot);
    assert!(!result.completed);
    assert_eq!(result.pending_reviewers, usernames(&["alice"]));
}

#[test]
fn anyone_may_approve_when_no_reviewers_are_designated() {
    let mut snapshot = snapshot_with_revision_at(1);
    snapshot.sentiments = vec![sentiment("zoe", &[SentimentEmoji::Lgtm], 2)];

    let result = evaluate(&snapshot);
    assert!(result.completed);
    assert_eq!(result.description, "1 of 1 LGTMs obtained");
    assert!(result.pending_reviewers.is_empty());
}

// ============================================================================
// SECTION: Diagnostics
// ============================================================================

#[test]
fn fold_trace_records_entry_transitions() {
    let mut snapshot = snapshot_with_revision_at(3);
    snapshot.sentiments = vec![
        sentiment("alice", &[SentimentEmoji::Lgtm], 1),
        sentiment("alice", &[SentimentEmoji::Lgtm], 4),
        sentiment("alice", &[SentimentEmoji::LgtmCancel], 5),
    ];

    let result = evaluate(&snapshot);
    let Some(RuleDebug::EmojiFold {
        trace,
    }) = result.debug
    else {
        panic!("emoji rule must attach a fold trace");
    };

    assert_eq!(trace.len(), 3);
    assert_eq!(trace[0].entry, Some(LgtmState::Stale));
    assert_eq!(trace[1].entry, Some(LgtmState::Current));
    assert_eq!(trace[2].entry, None);
}
