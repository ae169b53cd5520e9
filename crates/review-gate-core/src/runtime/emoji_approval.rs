// crates/review-gate-core/src/runtime/emoji_approval.rs
// ============================================================================
// Module: Review Gate Emoji-Approval Rule
// Description: Completion by a minimum count of LGTM emoji approvals.
// Purpose: Fold sentiments into a per-user approval map and gate on granted count.
// Dependencies: crate::core, crate::runtime::{blockers, EngineConfig}
// ============================================================================

//! ## Overview
//! Sentiments are folded in chronological order into a per-user approval
//! map: `Current` counts toward completion, `Stale` does not, and a missing
//! entry means no approval (or a canceled one). A plain `lgtm` is good only
//! for the revision on record when it was sent; `lgtm_strong` is good for
//! all revisions until canceled; `lgtm_cancel` withdraws the entry outright.
//!
//! When designated reviewers exist, approvals from outside that set can fill
//! only the slots beyond the required count. Completion still gates on the
//! configured floor rather than the computed requirement; the hosting
//! platform relies on that behavior.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::LgtmState;
use crate::core::ReviewSnapshot;
use crate::core::RuleDebug;
use crate::core::RuleResult;
use crate::core::SentimentEmoji;
use crate::core::SentimentTrace;
use crate::core::Username;
use crate::runtime::EngineConfig;
use crate::runtime::blockers::unique_by_username;

// ============================================================================
// SECTION: Evaluation
// ============================================================================

/// Evaluates the emoji-approval rule against a snapshot.
#[must_use]
pub fn evaluate(snapshot: &ReviewSnapshot, config: &EngineConfig) -> RuleResult {
    let (entries, trace) = fold_sentiments(snapshot);

    let total_granted =
        entries.values().filter(|state| **state == LgtmState::Current).count();
    let num_stale = entries.values().filter(|state| **state == LgtmState::Stale).count();

    let required: Vec<Username> = snapshot
        .pull_request
        .designated_reviewers()
        .iter()
        .map(|reviewer| reviewer.username.clone())
        .collect();

    let mut num_approvals_required = config.num_approvals_required;
    let mut num_granted = total_granted;
    let mut pending_reviewers: Vec<Username> = Vec::new();

    if !required.is_empty() {
        num_approvals_required = required.len().max(config.num_approvals_required);
        let granted_among_required = required
            .iter()
            .filter(|username| entries.get(*username) == Some(&LgtmState::Current))
            .count();
        // Slots left for approvals from outside the required set. The total
        // granted count is used here on purpose, not the non-required count.
        let open_slots = num_approvals_required.saturating_sub(required.len());
        num_granted = granted_among_required + total_granted.min(open_slots);
        pending_reviewers = unique_by_username(
            required
                .iter()
                .filter(|username| entries.get(*username) != Some(&LgtmState::Current))
                .cloned()
                .collect(),
        );
    }

    let mut description =
        format!("{num_granted} of {num_approvals_required} LGTMs obtained");
    let mut short_description = format!("{num_granted}/{num_approvals_required} LGTMs");
    if num_stale > 0 {
        description.push_str(&format!(", and {num_stale} stale"));
        short_description.push_str(&format!(", {num_stale} stale"));
    }

    RuleResult {
        completed: num_granted >= config.num_approvals_required,
        description,
        short_description,
        pending_reviewers,
        debug: Some(RuleDebug::EmojiFold {
            trace,
        }),
    }
}

// ============================================================================
// SECTION: Sentiment Fold
// ============================================================================

/// Folds sentiments in chronological order into per-user approval entries.
///
/// Precedence within one event: cancel beats strong beats plain. A plain
/// `lgtm` updates an entry only when it is not already `Current`, so a
/// sticky approval is never downgraded; a stale one may be refreshed.
fn fold_sentiments(
    snapshot: &ReviewSnapshot,
) -> (BTreeMap<Username, LgtmState>, Vec<SentimentTrace>) {
    let current_revision = snapshot.current_revision_timestamp();

    let mut entries: BTreeMap<Username, LgtmState> = BTreeMap::new();
    let mut trace = Vec::with_capacity(snapshot.sentiments.len());

    for sentiment in &snapshot.sentiments {
        if sentiment.emojis.contains(&SentimentEmoji::LgtmCancel) {
            entries.remove(&sentiment.username);
        } else if sentiment.emojis.contains(&SentimentEmoji::LgtmStrong) {
            entries.insert(sentiment.username.clone(), LgtmState::Current);
        } else if sentiment.emojis.contains(&SentimentEmoji::Lgtm)
            && entries.get(&sentiment.username) != Some(&LgtmState::Current)
        {
            let state = if current_revision
                .is_some_and(|timestamp| sentiment.timestamp >= timestamp)
            {
                LgtmState::Current
            } else {
                LgtmState::Stale
            };
            entries.insert(sentiment.username.clone(), state);
        }

        trace.push(SentimentTrace {
            username: sentiment.username.clone(),
            emojis: sentiment.emojis.clone(),
            timestamp: sentiment.timestamp,
            entry: entries.get(&sentiment.username).copied(),
        });
    }

    (entries, trace)
}
