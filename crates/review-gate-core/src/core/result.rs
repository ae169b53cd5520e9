// crates/review-gate-core/src/core/result.rs
// ============================================================================
// Module: Review Gate Rule Results
// Description: Rule evaluation outcomes and diagnostic payloads.
// Purpose: Communicate completion status, descriptions, and pending reviewers.
// Dependencies: crate::core::{identifiers, snapshot, time}, serde
// ============================================================================

//! ## Overview
//! Every rule, and the any-of combinator, produces one [`RuleResult`]: a
//! completion flag, human-readable descriptions for the merge-readiness
//! badge, and the reviewers who must still act. Results contain only
//! usernames, never full user records.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::Username;
use crate::core::snapshot::SentimentEmoji;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Rule Result
// ============================================================================

/// Outcome of evaluating one rule, or of the any-of combinator.
///
/// # Invariants
/// - `pending_reviewers` is unique by username.
/// - `description` and `short_description` are host-facing display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Indicates the rule considers the review approved.
    pub completed: bool,
    /// Human-readable status description.
    pub description: String,
    /// Compact status description for constrained surfaces.
    pub short_description: String,
    /// Reviewers who must still act, unique by username.
    pub pending_reviewers: Vec<Username>,
    /// Optional diagnostic payload.
    pub debug: Option<RuleDebug>,
}

// ============================================================================
// SECTION: Diagnostic Payloads
// ============================================================================

/// State of a user's LGTM approval entry.
///
/// # Invariants
/// - Absence of an entry means no approval was given, or it was canceled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LgtmState {
    /// Approval counts toward the current revision.
    Current,
    /// Approval predates the current revision.
    Stale,
}

/// Trace entry recorded while folding one sentiment event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentTrace {
    /// Username of the sender.
    pub username: Username,
    /// Emojis present in the event.
    pub emojis: Vec<SentimentEmoji>,
    /// Time the event was sent.
    pub timestamp: Timestamp,
    /// The sender's approval entry after applying the event.
    pub entry: Option<LgtmState>,
}

/// Diagnostic payload attached to a rule result.
///
/// # Invariants
/// - Variants are stable for serialization; hosts treat payloads as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleDebug {
    /// Per-sentiment trace of the emoji approval fold.
    EmojiFold {
        /// Trace entries in chronological order.
        trace: Vec<SentimentTrace>,
    },
}
