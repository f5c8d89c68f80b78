//! The evaluator capability and its scoped acquisition guard.

use crate::error::EvalResult;
use crate::value::ScriptValue;
use std::ops::{Deref, DerefMut};

/// A live execution context that supports bind-then-evaluate.
///
/// Implementations are single-threaded. An evaluator is acquired from its
/// factory for one snippet and released afterwards; [`Lease`] guarantees the
/// release.
pub trait Evaluator {
    /// Make `value` visible to later evaluations under `name`.
    ///
    /// Binding the same name twice overwrites the earlier value.
    fn bind(&mut self, name: &str, value: &ScriptValue) -> EvalResult<()>;

    /// Run `snippet` in the current context and return its completion value.
    ///
    /// # Errors
    /// Returns `EvaluationError::Script` if the engine rejects the snippet.
    fn evaluate(&mut self, snippet: &str) -> EvalResult<ScriptValue>;

    /// Return the context to its factory.
    ///
    /// Recycling evaluators clear every name bound since acquisition;
    /// evaluators owning a throwaway context do nothing.
    fn release(&mut self);
}

/// Builds or recycles evaluators for one engine.
pub trait EvaluatorFactory {
    /// Evaluator type handed out by this factory
    type Evaluator: Evaluator;

    /// Engine description used in reports
    fn name(&self) -> &'static str;

    /// Hand out an evaluator. Callers should prefer [`EvaluatorFactory::lease`].
    fn acquire(&self) -> EvalResult<Self::Evaluator>;

    /// Hand out an evaluator wrapped in a guard that releases it on drop.
    fn lease(&self) -> EvalResult<Lease<Self::Evaluator>> {
        self.acquire().map(Lease::new)
    }
}

/// Scoped ownership of an acquired evaluator.
///
/// `release` runs exactly once, when the lease is dropped: after normal use,
/// on an early `?` return, or while unwinding.
#[derive(Debug)]
pub struct Lease<E: Evaluator> {
    evaluator: E,
}

impl<E: Evaluator> Lease<E> {
    /// Wrap an already acquired evaluator.
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }
}

impl<E: Evaluator> Deref for Lease<E> {
    type Target = E;

    fn deref(&self) -> &E {
        &self.evaluator
    }
}

impl<E: Evaluator> DerefMut for Lease<E> {
    fn deref_mut(&mut self) -> &mut E {
        &mut self.evaluator
    }
}

impl<E: Evaluator> Drop for Lease<E> {
    fn drop(&mut self) {
        self.evaluator.release();
    }
}
