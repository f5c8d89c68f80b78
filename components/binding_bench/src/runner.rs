//! Benchmark runner and result types
//!
//! Times a fixed number of passes over the snippet corpus for one
//! (engine, strategy) pair and formats the results.

use crate::corpus::corpus_for;
use crate::strategy::BindingStrategy;
use crate::variables::VariableSpace;
use script_engines::{EvalResult, Evaluator, EvaluatorFactory, ScriptValue};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// Result of one timed run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Engine the evaluators came from
    pub engine: String,
    /// Binding strategy label
    pub strategy: String,
    /// Requested passes over the corpus
    pub iterations: usize,
    /// Snippets actually evaluated
    pub evaluations: usize,
    /// Wall-clock duration in milliseconds
    pub duration_ms: f64,
    /// Snippets whose result was not `true`
    pub mismatches: usize,
    /// Error that ended the run early
    pub error: Option<String>,
    #[serde(skip)]
    duration: Duration,
}

impl RunReport {
    /// Wall-clock duration of the run, partial if it ended early
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether every snippet ran and returned `true`
    pub fn success(&self) -> bool {
        self.error.is_none() && self.mismatches == 0
    }
}

#[derive(Default)]
struct Tally {
    evaluations: usize,
    mismatches: usize,
}

/// Drives the corpus through an engine with a binding strategy.
#[derive(Debug, Clone)]
pub struct BenchmarkRunner {
    corpus: Vec<String>,
    variables: VariableSpace,
}

impl BenchmarkRunner {
    /// Create a runner over `corpus` with `variables` available for binding
    pub fn new(corpus: Vec<String>, variables: VariableSpace) -> Self {
        Self { corpus, variables }
    }

    /// Runner over the corpus built for a generated space of `size` variables
    pub fn with_default_corpus(size: usize) -> Self {
        Self::new(corpus_for(size), VariableSpace::generate(size))
    }

    /// Snippets evaluated on each iteration
    pub fn corpus(&self) -> &[String] {
        &self.corpus
    }

    /// Variables available for binding
    pub fn variables(&self) -> &VariableSpace {
        &self.variables
    }

    /// Time `iterations` passes over the corpus.
    ///
    /// Never fails: an evaluation error ends the run and the time spent up
    /// to that point is returned.
    pub fn run<F: EvaluatorFactory>(
        &self,
        factory: &F,
        strategy: &dyn BindingStrategy,
        iterations: usize,
    ) -> Duration {
        self.run_detailed(factory, strategy, iterations).duration()
    }

    /// Like [`BenchmarkRunner::run`] but returns the full report.
    pub fn run_detailed<F: EvaluatorFactory>(
        &self,
        factory: &F,
        strategy: &dyn BindingStrategy,
        iterations: usize,
    ) -> RunReport {
        let mut tally = Tally::default();

        let start = Instant::now();
        let outcome = self.iterate(factory, strategy, iterations, &mut tally);
        let duration = start.elapsed();

        let error = outcome.err().map(|err| {
            error!(
                engine = factory.name(),
                strategy = strategy.name(),
                evaluations = tally.evaluations,
                error = ?err,
                "benchmark run aborted: {}",
                err
            );
            err.to_string()
        });

        RunReport {
            engine: factory.name().to_string(),
            strategy: strategy.name().to_string(),
            iterations,
            evaluations: tally.evaluations,
            duration_ms: duration.as_secs_f64() * 1000.0,
            mismatches: tally.mismatches,
            error,
            duration,
        }
    }

    /// Run every strategy in order, `repeats` times over.
    pub fn sweep<F: EvaluatorFactory>(
        &self,
        factory: &F,
        strategies: &[&dyn BindingStrategy],
        iterations: usize,
        repeats: usize,
    ) -> Vec<RunReport> {
        let mut reports = Vec::with_capacity(strategies.len() * repeats);
        for round in 0..repeats {
            for strategy in strategies {
                let report = self.run_detailed(factory, *strategy, iterations);
                debug!(
                    round,
                    engine = factory.name(),
                    strategy = strategy.name(),
                    duration_ms = report.duration_ms,
                    "run finished"
                );
                reports.push(report);
            }
        }
        reports
    }

    fn iterate<F: EvaluatorFactory>(
        &self,
        factory: &F,
        strategy: &dyn BindingStrategy,
        iterations: usize,
        tally: &mut Tally,
    ) -> EvalResult<()> {
        for _ in 0..iterations {
            for snippet in &self.corpus {
                let value = self.evaluate(factory, strategy, snippet)?;
                tally.evaluations += 1;
                if !value.is_true() {
                    warn!(snippet = %snippet, result = %value, "snippet was not true");
                    tally.mismatches += 1;
                }
            }
        }
        Ok(())
    }

    /// Acquire, bind, evaluate; the lease releases the evaluator on every path.
    fn evaluate<F: EvaluatorFactory>(
        &self,
        factory: &F,
        strategy: &dyn BindingStrategy,
        snippet: &str,
    ) -> EvalResult<ScriptValue> {
        let mut evaluator = factory.lease()?;
        strategy.apply(&mut *evaluator, snippet, &self.variables)?;
        evaluator.evaluate(snippet)
    }
}

/// One line per run, e.g. `       Bind All: 123.45 ms`
pub fn format_line(report: &RunReport) -> String {
    let mut line = format!("{:>15}: {:.2} ms", report.strategy, report.duration_ms);
    if let Some(error) = &report.error {
        line.push_str(&format!(" (aborted: {})", error));
    }
    line
}

/// Format run reports as a human-readable table
pub fn format_results(reports: &[RunReport]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n{:<28} {:<16} {:>14} {:>11}  {:<10}\n",
        "Engine", "Strategy", "Duration (ms)", "Mismatches", "Status"
    ));
    output.push_str(&format!("{}\n", "=".repeat(84)));

    for report in reports {
        let status = if report.success() { "✓ PASS" } else { "✗ FAIL" };
        output.push_str(&format!(
            "{:<28} {:<16} {:>11.2} ms {:>11}  {:<10}\n",
            report.engine, report.strategy, report.duration_ms, report.mismatches, status
        ));

        if let Some(error) = &report.error {
            output.push_str(&format!("  Error: {}\n", error));
        }
    }

    output
}

/// Format run reports as JSON
pub fn format_results_json(reports: &[RunReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}
