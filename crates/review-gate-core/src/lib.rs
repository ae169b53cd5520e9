// crates/review-gate-core/src/lib.rs
// ============================================================================
// Module: Review Gate Core Library
// Description: Public API surface for the Review Gate core.
// Purpose: Expose snapshot types, rule results, and the evaluation runtime.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! Review Gate core decides whether a code review counts as approved and,
//! when it does not, who must still act. Three independent completion rules
//! (file coverage, emoji approval, platform approval) are combined with
//! short-circuit, first-match-wins semantics. The engine is a pure function
//! over an immutable snapshot supplied by the hosting platform; it performs
//! no I/O and never mutates review state.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::*;

pub use runtime::DEFAULT_NUM_APPROVALS_REQUIRED;
pub use runtime::DEFAULT_RULES;
pub use runtime::EngineConfig;
pub use runtime::ReviewGate;
pub use runtime::Rule;
pub use runtime::evaluate_any;
