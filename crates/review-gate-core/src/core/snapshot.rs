// crates/review-gate-core/src/core/snapshot.rs
// ============================================================================
// Module: Review Gate Snapshot
// Description: Immutable review snapshot consumed by completion rules.
// Purpose: Give rules a strongly typed, validated view of review state.
// Dependencies: crate::core::{identifiers, time}, serde, thiserror
// ============================================================================

//! ## Overview
//! The snapshot is the single input to every completion rule: files and
//! their revisions, discussions, emoji sentiments, review revisions, and
//! platform pull-request state. It is materialized by the hosting platform
//! and never mutated by the engine; each evaluation is a pure function of
//! one snapshot.
//!
//! Snapshots are untrusted on arrival. [`ReviewSnapshot::validate`] rejects
//! structurally malformed input up front so rules can stay total.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::hash::Hash;
use std::hash::Hasher;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::Username;
use crate::core::time::Timestamp;

// ============================================================================
// SECTION: Users
// ============================================================================

/// Review participant as reported by the hosting platform.
///
/// # Invariants
/// - Identity is the username; no other field participates in equality or hashing.
/// - `participating` reflects platform-tracked activity on this review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Username identifying the participant.
    pub username: Username,
    /// Indicates whether the user has participated in the review at all.
    #[serde(default)]
    pub participating: bool,
}

impl User {
    /// Creates a user that has not yet participated in the review.
    #[must_use]
    pub const fn new(username: Username) -> Self {
        Self {
            username,
            participating: false,
        }
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.username.hash(state);
    }
}

// ============================================================================
// SECTION: Summary Counters
// ============================================================================

/// Precomputed review counters supplied by the hosting platform.
///
/// # Invariants
/// - `num_unreviewed_files <= num_files`; violated counters fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReviewSummary {
    /// Total number of files in the review.
    pub num_files: u32,
    /// Number of files whose current revision is unreviewed.
    pub num_unreviewed_files: u32,
    /// Number of unresolved discussions.
    pub num_unresolved_discussions: u32,
}

// ============================================================================
// SECTION: Files and Revisions
// ============================================================================

/// Single revision of a file within the review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRevision {
    /// Indicates the revision has been superseded.
    pub obsolete: bool,
    /// Users who reviewed this revision.
    pub reviewers: Vec<User>,
}

/// File tracked by the review.
///
/// # Invariants
/// - `revisions` is ordered oldest to newest and must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Revisions of the file, oldest first.
    pub revisions: Vec<FileRevision>,
}

impl FileEntry {
    /// Returns the effective last revision: the last non-obsolete revision,
    /// or the last revision overall when every revision is obsolete.
    #[must_use]
    pub fn effective_last_revision(&self) -> Option<&FileRevision> {
        self.revisions.iter().rev().find(|revision| !revision.obsolete).or_else(|| {
            self.revisions.last()
        })
    }
}

// ============================================================================
// SECTION: Discussions
// ============================================================================

/// Participant in a discussion.
///
/// # Invariants
/// - `resolved` is the participant's own flag, independent of the discussion's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Username of the participant.
    pub username: Username,
    /// Indicates the participant considers the discussion resolved.
    pub resolved: bool,
}

/// Discussion attached to the review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discussion {
    /// Indicates the discussion as a whole is resolved.
    pub resolved: bool,
    /// Participants in the discussion.
    pub participants: Vec<Participant>,
}

// ============================================================================
// SECTION: Sentiments
// ============================================================================

/// Approval emoji recognized by the engine.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentEmoji {
    /// Approval good for the revision on record when sent.
    Lgtm,
    /// Approval good for all revisions until canceled.
    LgtmStrong,
    /// Withdraws any prior approval.
    LgtmCancel,
}

/// Emoji sentiment event sent by a user.
///
/// # Invariants
/// - Events appear in the snapshot in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Username of the sender.
    pub username: Username,
    /// Emojis present in the event.
    pub emojis: Vec<SentimentEmoji>,
    /// Time the event was sent.
    pub timestamp: Timestamp,
}

// ============================================================================
// SECTION: Review Revisions
// ============================================================================

/// Revision of the review as a whole, distinct from per-file revisions.
///
/// # Invariants
/// - Revisions are ordered oldest to newest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    /// Indicates the revision has been superseded.
    pub obsolete: bool,
    /// Time the revision snapshot was taken.
    pub snapshot_timestamp: Timestamp,
}

// ============================================================================
// SECTION: Pull Request State
// ============================================================================

/// Platform-reported readiness state of the pull request.
///
/// # Invariants
/// - Variants are stable for serialization; unrecognized states map to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mergeability {
    /// Mergeable with no outstanding conditions.
    Clean,
    /// Mergeable with non-blocking failing checks.
    Unstable,
    /// Mergeable pending pre-receive hooks.
    HasHooks,
    /// Marked as a draft.
    Draft,
    /// Behind the target branch.
    Behind,
    /// Has merge conflicts.
    Dirty,
    /// Blocked by branch protection.
    Blocked,
    /// State not recognized by this engine.
    #[serde(other)]
    Unknown,
}

/// Continuous-integration check attached to the pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    /// Indicates the check is required by the platform.
    pub required: bool,
    /// Indicates the check succeeded.
    pub success: bool,
}

/// Platform-native review state for a single user.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalState {
    /// The user approved the pull request.
    Approved,
    /// The user requested changes.
    ChangesRequested,
    /// The user's review is pending.
    Pending,
}

/// Target branch metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TargetBranch {
    /// Indicates the target branch has protection rules.
    pub branch_protected: bool,
}

/// Pull-request state as reported by the hosting platform.
///
/// # Invariants
/// - `approvals` is keyed by username; the platform invalidates entries on new pushes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Reviewers explicitly requested on the pull request.
    pub requested_reviewers: Vec<User>,
    /// Assignees of the pull request.
    pub assignees: Vec<User>,
    /// Author of the pull request.
    pub author: User,
    /// Platform-reported mergeability.
    pub mergeability: Mergeability,
    /// Continuous-integration checks.
    pub checks: Vec<Check>,
    /// Platform-native review approvals by username.
    pub approvals: BTreeMap<Username, ApprovalState>,
    /// Target branch metadata.
    pub target: TargetBranch,
}

impl PullRequest {
    /// Returns the designated reviewers: the requested reviewers, or the
    /// assignees when no reviewers were explicitly requested.
    #[must_use]
    pub fn designated_reviewers(&self) -> &[User] {
        if self.requested_reviewers.is_empty() {
            &self.assignees
        } else {
            &self.requested_reviewers
        }
    }
}

// ============================================================================
// SECTION: Review Snapshot
// ============================================================================

/// Immutable review snapshot passed to every completion rule.
///
/// # Invariants
/// - All sequences are ordered as described on their element types.
/// - The engine never mutates a snapshot; evaluation is idempotent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSnapshot {
    /// Precomputed review counters.
    pub summary: ReviewSummary,
    /// Files tracked by the review.
    pub files: Vec<FileEntry>,
    /// Discussions attached to the review.
    pub discussions: Vec<Discussion>,
    /// Emoji sentiment events in chronological order.
    pub sentiments: Vec<Sentiment>,
    /// Review-level revisions, oldest first.
    pub revisions: Vec<Revision>,
    /// Pull-request state.
    pub pull_request: PullRequest,
}

impl ReviewSnapshot {
    /// Returns the snapshot timestamp of the latest non-obsolete review
    /// revision, against which plain LGTM sentiments are judged current.
    #[must_use]
    pub fn current_revision_timestamp(&self) -> Option<Timestamp> {
        self.revisions
            .iter()
            .rev()
            .find(|revision| !revision.obsolete)
            .map(|revision| revision.snapshot_timestamp)
    }

    /// Validates the snapshot's structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] when the snapshot is malformed.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.summary.num_unreviewed_files > self.summary.num_files {
            return Err(SnapshotError::SummaryCounters {
                num_unreviewed_files: self.summary.num_unreviewed_files,
                num_files: self.summary.num_files,
            });
        }

        if let Some(index) = self.files.iter().position(|file| file.revisions.is_empty()) {
            return Err(SnapshotError::FileWithoutRevisions {
                index,
            });
        }

        if self.current_revision_timestamp().is_none() {
            return Err(SnapshotError::NoCurrentRevision);
        }

        Ok(())
    }
}

// ============================================================================
// SECTION: Snapshot Errors
// ============================================================================

/// Structural snapshot validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    /// Summary counters are inconsistent.
    #[error(
        "summary reports {num_unreviewed_files} unreviewed files out of {num_files} total files"
    )]
    SummaryCounters {
        /// Reported unreviewed file count.
        num_unreviewed_files: u32,
        /// Reported total file count.
        num_files: u32,
    },
    /// A file entry carries no revisions.
    #[error("file at index {index} has no revisions")]
    FileWithoutRevisions {
        /// Zero-based index of the offending file entry.
        index: usize,
    },
    /// The review has no non-obsolete revision on record.
    #[error("review has no non-obsolete revision")]
    NoCurrentRevision,
}
