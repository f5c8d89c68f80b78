//! Error types for the engine adapters

use crate::value::ScriptValue;
use thiserror::Error;

/// Failures raised by an engine while setting up, binding, or evaluating.
///
/// The benchmark runner treats every variant as fatal for the current run.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// The engine could not build a runtime or context
    #[error("failed to create {engine} context: {message}")]
    Context {
        /// Engine name
        engine: &'static str,
        /// Engine-provided message
        message: String,
    },

    /// A value could not be bound under a name
    #[error("failed to bind `{name}`: {message}")]
    Bind {
        /// Variable name
        name: String,
        /// Engine-provided message
        message: String,
    },

    /// The engine rejected the snippet (syntax error or thrown exception)
    #[error("evaluation of `{snippet}` failed: {message}")]
    Script {
        /// Snippet source
        snippet: String,
        /// Engine-provided message
        message: String,
    },
}

impl EvaluationError {
    /// Build a `Script` error for `snippet`.
    pub fn script(snippet: &str, message: impl Into<String>) -> Self {
        EvaluationError::Script {
            snippet: snippet.to_string(),
            message: message.into(),
        }
    }

    /// Build a `Bind` error for a value no engine can take losslessly.
    pub fn not_primitive(name: &str, value: &ScriptValue) -> Self {
        EvaluationError::bind(name, format!("{} is not a primitive value", value))
    }

    /// Build a `Bind` error for `name`.
    pub fn bind(name: &str, message: impl Into<String>) -> Self {
        EvaluationError::Bind {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

/// Result type for engine operations
pub type EvalResult<T> = Result<T, EvaluationError>;
