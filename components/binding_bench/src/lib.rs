//! Variable-binding benchmarks for embedded script engines
//!
//! Measures how the choice of binding strategy (bind every variable, or
//! only the ones a snippet references) affects end-to-end evaluation time
//! on engines with different binding and context-creation costs. It includes:
//!
//! - Naive reference extraction and the generated variable space
//! - Three binding strategies
//! - A benchmark runner with wall-clock timing and result formatting
//!
//! # Examples
//!
//! ```rust,no_run
//! use binding_bench::{strategy, BenchmarkRunner};
//! use script_engines::{EngineConfig, FreshContextFactory};
//!
//! let factory = FreshContextFactory::new(&EngineConfig::default()).unwrap();
//! let runner = BenchmarkRunner::with_default_corpus(100);
//! let elapsed = runner.run(&factory, &strategy::BindReferenced, 1_000);
//! println!("{:?}", elapsed);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod corpus;
pub mod runner;
pub mod strategy;
pub mod tokens;
pub mod variables;

pub use cli::Cli;
pub use runner::{BenchmarkRunner, RunReport};
pub use strategy::BindingStrategy;
pub use variables::VariableSpace;
