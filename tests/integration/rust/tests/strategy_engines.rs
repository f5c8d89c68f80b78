//! Strategy x engine integration tests
//!
//! Every binding strategy is applied to a live evaluator from each adapter,
//! then the whole default corpus is evaluated one snippet at a time.

use binding_bench::corpus::DEFAULT_SNIPPETS;
use binding_bench::strategy;
use binding_bench::{BindingStrategy, VariableSpace};
use script_engines::{
    EngineConfig, Evaluator, EvaluatorFactory, FreshContextFactory, ScriptValue, SharedContextFactory,
    SourcePolicy,
};

/// Helper evaluating every corpus snippet with every strategy
fn corpus_results<F: EvaluatorFactory>(factory: &F) -> Vec<(String, &'static str, ScriptValue)> {
    let variables = VariableSpace::default();
    let mut results = Vec::new();

    for strategy in strategy::all() {
        for snippet in DEFAULT_SNIPPETS {
            let mut evaluator = factory.lease().unwrap();
            strategy.apply(&mut *evaluator, snippet, &variables).unwrap();
            let value = evaluator.evaluate(snippet).unwrap();
            results.push((snippet.to_string(), strategy.name(), value));
        }
    }
    results
}

fn assert_all_true(results: &[(String, &'static str, ScriptValue)]) {
    for (snippet, strategy, value) in results {
        assert!(
            value.is_true(),
            "{} with {}: expected true, got {}",
            snippet,
            strategy,
            value
        );
    }
}

#[test]
fn test_corpus_on_shared_context() {
    let factory = SharedContextFactory::new(&EngineConfig::default()).unwrap();
    assert_all_true(&corpus_results(&factory));
    assert_eq!(factory.cached_snippets(), DEFAULT_SNIPPETS.len());
}

#[test]
fn test_corpus_on_shared_context_without_cache() {
    let config = EngineConfig::default().with_source_policy(SourcePolicy::Fresh);
    let factory = SharedContextFactory::new(&config).unwrap();
    assert_all_true(&corpus_results(&factory));
    assert_eq!(factory.cached_snippets(), 0);
}

#[test]
fn test_corpus_on_context_per_call() {
    let factory = FreshContextFactory::new(&EngineConfig::default()).unwrap();
    assert_all_true(&corpus_results(&factory));
}

#[test]
fn test_referenced_binding_misses_unspaced_identifiers() {
    let variables = VariableSpace::default();
    let factory = FreshContextFactory::new(&EngineConfig::default()).unwrap();

    let mut evaluator = factory.lease().unwrap();
    strategy::BindReferenced
        .apply(&mut *evaluator, "(V1+V2)", &variables)
        .unwrap();
    assert!(evaluator.evaluate("(V1+V2)").is_err());
}
