//! # Transform Module
//!
//! The case-folding transform: every lowercase alphabetic character maps to
//! its uppercase equivalent per Unicode default mappings; non-alphabetic and
//! already-uppercase characters pass through unchanged.
//!
//! This module only transforms text. File I/O remains in the app layer.

/// Uppercase `input` using Unicode default mappings.
///
/// Non-letters and already-uppercase letters are unchanged. The mapping is
/// not always 1:1 in character count (`ß` becomes `SS`), but ASCII input
/// keeps its exact length. The transform is idempotent: uppercasing an
/// already-uppercased string yields the same string.
#[must_use]
pub fn uppercase(input: &str) -> String {
    input.to_uppercase()
}

// =============================================================================
// TESTS
// =============================================================================
