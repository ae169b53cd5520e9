// crates/review-gate-core/src/runtime/blockers.rs
// ============================================================================
// Module: Review Gate Blocker Helpers
// Description: Shared blocker collection helpers used by completion rules.
// Purpose: Keep discussion-blocker and deduplication logic identical across rules.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The file-coverage and platform-approval rules both treat unresolved
//! discussion participants as blockers. The helpers here keep that
//! computation, and the username deduplication every rule ends with, in one
//! place so the rules cannot drift apart.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::Discussion;
use crate::core::Username;

// ============================================================================
// SECTION: Discussion Blockers
// ============================================================================

/// Collects participants blocking unresolved discussions.
///
/// A discussion blocks only while its own `resolved` flag is false, and only
/// participants whose own flag is false within it are blockers. Duplicates
/// are preserved; callers deduplicate once at the end.
#[must_use]
pub fn discussion_blockers(discussions: &[Discussion]) -> Vec<Username> {
    discussions
        .iter()
        .filter(|discussion| !discussion.resolved)
        .flat_map(|discussion| &discussion.participants)
        .filter(|participant| !participant.resolved)
        .map(|participant| participant.username.clone())
        .collect()
}

// ============================================================================
// SECTION: Deduplication
// ============================================================================

/// Appends a username unless an equal one is already present.
pub fn push_unique(out: &mut Vec<Username>, username: Username) {
    if !out.contains(&username) {
        out.push(username);
    }
}

/// Deduplicates usernames in place, keeping the first occurrence of each.
#[must_use]
pub fn unique_by_username(usernames: Vec<Username>) -> Vec<Username> {
    let mut out = Vec::with_capacity(usernames.len());
    for username in usernames {
        push_unique(&mut out, username);
    }
    out
}
