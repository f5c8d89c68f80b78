//! Naive reference extraction.
//!
//! A snippet is split on single spaces and the distinct pieces are returned
//! verbatim. Operators and brackets are not stripped, so an identifier only
//! comes out clean when it has whitespace on both sides:
//!
//! ```text
//! (FOO_1+FOO_2)        -> ["(FOO_1+FOO_2)"]
//! (FOO_1 + FOO_2)      -> ["(FOO_1", "+", "FOO_2)"]
//! ( FOO_1 + FOO_2 )    -> ["(", "FOO_1", "+", "FOO_2", ")"]
//! ```
//!
//! The snippet corpus is written with that spacing.

use std::collections::HashSet;

/// Distinct space-delimited tokens of `snippet`.
///
/// Empty pieces (from an empty snippet or doubled spaces) are dropped.
pub fn tokens(snippet: &str) -> HashSet<&str> {
    snippet.split(' ').filter(|token| !token.is_empty()).collect()
}
