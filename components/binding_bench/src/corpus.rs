//! The snippet corpus.
//!
//! Every identifier, operator and bracket is surrounded by spaces so the
//! naive token extraction finds each referenced variable. Each snippet is
//! `true` against the variable space it was built for.

use crate::variables::DEFAULT_SIZE;

/// Smallest variable space the corpus can be built for.
///
/// The corpus reads integers up to `V10` and strings from index
/// `size / 2 + 9`, so the integer half needs at least 11 entries.
pub const MIN_SIZE: usize = 22;

/// Snippets for the default space of 100 variables, in evaluation order
pub const DEFAULT_SNIPPETS: [&str; 6] = [
    "V10 === V1 + V2 + V3 + V4",
    "V8 === ( V1 + V1 + V2 ) * V2",
    "if( V48 + V1 == 49.0 ) { ++ V1 === 2 } else { false }",
    "( V1 ++ === 1 && ++ V1 === 3 )",
    "V58 === 'v58'",
    "V58 + ' ' + V59 === 'v58 v59'",
];

/// Corpus for the default variable space
pub fn default_corpus() -> Vec<String> {
    corpus_for(DEFAULT_SIZE)
}

/// Corpus for a space generated with `size` variables.
///
/// The names that cross into the upper half of the space move with it:
/// the largest integer read is `V<size/2 - 2>` and the strings read are
/// `V<size/2 + 8>` and `V<size/2 + 9>`. Sizes below [`MIN_SIZE`] yield
/// snippets naming variables that do not exist.
pub fn corpus_for(size: usize) -> Vec<String> {
    let half = size / 2;
    let high_int = half.saturating_sub(2);
    let first_str = half + 8;
    let second_str = half + 9;

    vec![
        "V10 === V1 + V2 + V3 + V4".to_string(),
        "V8 === ( V1 + V1 + V2 ) * V2".to_string(),
        format!(
            "if( V{} + V1 == {}.0 ) {{ ++ V1 === 2 }} else {{ false }}",
            high_int,
            high_int + 1
        ),
        "( V1 ++ === 1 && ++ V1 === 3 )".to_string(),
        format!("V{0} === 'v{0}'", first_str),
        format!(
            "V{0} + ' ' + V{1} === 'v{0} v{1}'",
            first_str, second_str
        ),
    ]
}
