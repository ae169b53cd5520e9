// crates/review-gate-core/src/core/time.rs
// ============================================================================
// Module: Review Gate Time Model
// Description: Canonical timestamp representation for sentiments and revisions.
// Purpose: Provide deterministic, totally ordered time values across snapshot records.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Review Gate compares timestamps only for order: a sentiment is current
//! when it was sent at or after the revision on record. The engine never
//! reads wall-clock time; hosts embed timestamps in the snapshot.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Time Values
// ============================================================================

/// Canonical timestamp used in sentiment and revision records.
///
/// # Invariants
/// - Values are unix epoch milliseconds explicitly provided by callers.
/// - No validation is performed; monotonicity is a caller responsibility.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Creates a timestamp from unix epoch milliseconds.
    #[must_use]
    pub const fn from_unix_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the timestamp as unix epoch milliseconds.
    #[must_use]
    pub const fn as_unix_millis(self) -> i64 {
        self.0
    }
}

impl From<i64> for Timestamp {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
