// crates/review-gate-core/src/core/mod.rs
// ============================================================================
// Module: Review Gate Core Types
// Description: Canonical review snapshot and rule result structures.
// Purpose: Provide stable, serializable types for merge-readiness evaluation.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Review Gate core types define the immutable review snapshot supplied by
//! the hosting platform and the rule results returned to it. These types are
//! the canonical source of truth for any derived host surfaces.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod identifiers;
pub mod result;
pub mod snapshot;
pub mod time;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use identifiers::Username;
pub use result::LgtmState;
pub use result::RuleDebug;
pub use result::RuleResult;
pub use result::SentimentTrace;
pub use snapshot::ApprovalState;
pub use snapshot::Check;
pub use snapshot::Discussion;
pub use snapshot::FileEntry;
pub use snapshot::FileRevision;
pub use snapshot::Mergeability;
pub use snapshot::Participant;
pub use snapshot::PullRequest;
pub use snapshot::Revision;
pub use snapshot::ReviewSnapshot;
pub use snapshot::ReviewSummary;
pub use snapshot::Sentiment;
pub use snapshot::SentimentEmoji;
pub use snapshot::SnapshotError;
pub use snapshot::TargetBranch;
pub use snapshot::User;
pub use time::Timestamp;
