//! Integration test suite for the binding benchmarks
//!
//! Verifies the strategies, runner and both engine adapters work together
//! across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use binding_bench;
    pub use script_engines;
}
