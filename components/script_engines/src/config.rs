//! One-time engine configuration passed into factory constructors.

/// How snippet source is turned into an engine's compiled form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourcePolicy {
    /// Compile each distinct snippet once and reuse it
    #[default]
    Cached,
    /// Compile on every evaluation
    Fresh,
}

/// Engine tuning applied when a factory builds its runtime.
///
/// Each adapter reads the settings it understands and ignores the rest.
///
/// # Examples
///
/// ```
/// use script_engines::{EngineConfig, SourcePolicy};
///
/// let config = EngineConfig::default()
///     .with_source_policy(SourcePolicy::Fresh)
///     .with_memory_limit(64 * 1024 * 1024);
///
/// assert_eq!(config.source_policy, SourcePolicy::Fresh);
/// assert_eq!(config.memory_limit, Some(64 * 1024 * 1024));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Snippet compilation policy (Boa)
    pub source_policy: SourcePolicy,
    /// Maximum call recursion depth (Boa)
    pub recursion_limit: usize,
    /// Heap limit in bytes (QuickJS)
    pub memory_limit: Option<usize>,
    /// Native stack limit in bytes (QuickJS)
    pub max_stack_size: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            source_policy: SourcePolicy::Cached,
            recursion_limit: 512,
            memory_limit: None,
            max_stack_size: None,
        }
    }
}

impl EngineConfig {
    /// Set the snippet compilation policy
    pub fn with_source_policy(mut self, policy: SourcePolicy) -> Self {
        self.source_policy = policy;
        self
    }

    /// Set the recursion limit
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Set the heap limit
    pub fn with_memory_limit(mut self, bytes: usize) -> Self {
        self.memory_limit = Some(bytes);
        self
    }

    /// Set the native stack limit
    pub fn with_max_stack_size(mut self, bytes: usize) -> Self {
        self.max_stack_size = Some(bytes);
        self
    }
}
