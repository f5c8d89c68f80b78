//! Embedded script engine adapters
//!
//! Provides the `Evaluator` capability used by the binding benchmarks and
//! two adapters with opposite cost profiles:
//!
//! - [`SharedContextFactory`]: one Boa context per factory, bindings cleared on release
//! - [`FreshContextFactory`]: one QuickJS context per acquisition, release is a no-op
//!
//! # Examples
//!
//! ```rust,no_run
//! use script_engines::{EngineConfig, Evaluator, EvaluatorFactory, FreshContextFactory, ScriptValue};
//!
//! let factory = FreshContextFactory::new(&EngineConfig::default()).unwrap();
//! let mut evaluator = factory.lease().unwrap();
//! evaluator.bind("V1", &ScriptValue::Integer(1)).unwrap();
//! assert!(evaluator.evaluate("V1 === 1").unwrap().is_true());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod boa;
pub mod cache;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod quickjs;
pub mod value;

pub use boa::{SharedContextEvaluator, SharedContextFactory};
pub use cache::SourceCache;
pub use config::{EngineConfig, SourcePolicy};
pub use error::{EvalResult, EvaluationError};
pub use evaluator::{Evaluator, EvaluatorFactory, Lease};
pub use quickjs::{FreshContextEvaluator, FreshContextFactory};
pub use value::ScriptValue;
