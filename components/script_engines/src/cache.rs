//! Memoization of compiled snippets keyed by source text.

use std::collections::HashMap;
use tracing::debug;

/// Compiled snippets keyed by their source text.
///
/// Independent of any evaluator; the owner decides what `T` is.
#[derive(Debug)]
pub struct SourceCache<T> {
    entries: HashMap<String, T>,
}

impl<T> Default for SourceCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SourceCache<T> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Return the entry for `snippet`, compiling it on first sight.
    ///
    /// A failed compilation is not cached, so the same error is reported
    /// again next time.
    pub fn get_or_try_insert_with<E, F>(&mut self, snippet: &str, compile: F) -> Result<&T, E>
    where
        F: FnOnce(&str) -> Result<T, E>,
    {
        if !self.entries.contains_key(snippet) {
            let compiled = compile(snippet)?;
            debug!(snippet, "caching snippet");
            self.entries.insert(snippet.to_string(), compiled);
        }
        Ok(&self.entries[snippet])
    }

    /// Number of distinct cached snippets
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
