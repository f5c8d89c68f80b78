//! Policies deciding which variables are bound before a snippet runs.

use crate::tokens::tokens;
use crate::variables::VariableSpace;
use script_engines::{EvalResult, Evaluator};
use std::collections::HashSet;

/// Pushes a selection of `variables` into an evaluator ahead of evaluating
/// `snippet`.
pub trait BindingStrategy {
    /// Label used in reports
    fn name(&self) -> &'static str;

    /// Bind the selected variables.
    ///
    /// # Errors
    /// Propagates the first binding failure.
    fn apply(
        &self,
        evaluator: &mut dyn Evaluator,
        snippet: &str,
        variables: &VariableSpace,
    ) -> EvalResult<()>;
}

/// Binds every variable whether or not the snippet uses it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BindAll;

impl BindingStrategy for BindAll {
    fn name(&self) -> &'static str {
        "Bind All"
    }

    fn apply(
        &self,
        evaluator: &mut dyn Evaluator,
        _snippet: &str,
        variables: &VariableSpace,
    ) -> EvalResult<()> {
        for (name, value) in variables.iter() {
            evaluator.bind(name, value)?;
        }
        Ok(())
    }
}

/// Binds only variables named by a snippet token, looking each token up.
///
/// Cost grows with the number of tokens, not the size of the space.
#[derive(Debug, Clone, Copy, Default)]
pub struct BindReferenced;

impl BindingStrategy for BindReferenced {
    fn name(&self) -> &'static str {
        "Bind Referenced"
    }

    fn apply(
        &self,
        evaluator: &mut dyn Evaluator,
        snippet: &str,
        variables: &VariableSpace,
    ) -> EvalResult<()> {
        for token in tokens(snippet) {
            if let Some(value) = variables.get(token) {
                evaluator.bind(token, value)?;
            }
        }
        Ok(())
    }
}

/// Binds the same variables as [`BindReferenced`] but scans the whole space,
/// testing each name against the token set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BindReferencedInefficient;

impl BindingStrategy for BindReferencedInefficient {
    fn name(&self) -> &'static str {
        "Inefficient"
    }

    fn apply(
        &self,
        evaluator: &mut dyn Evaluator,
        snippet: &str,
        variables: &VariableSpace,
    ) -> EvalResult<()> {
        let referenced: HashSet<&str> = tokens(snippet);
        for (name, value) in variables.iter().filter(|(name, _)| referenced.contains(name)) {
            evaluator.bind(name, value)?;
        }
        Ok(())
    }
}

/// The three strategies in comparison order
pub fn all() -> Vec<&'static dyn BindingStrategy> {
    vec![&BindAll, &BindReferenced, &BindReferencedInefficient]
}
