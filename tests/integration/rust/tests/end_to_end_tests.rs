//! End-to-end benchmark runs
//!
//! Drives `BenchmarkRunner` against both engines the way the CLI does and
//! checks the reports.

use binding_bench::corpus::MIN_SIZE;
use binding_bench::runner::{format_line, format_results, format_results_json};
use binding_bench::{strategy, BenchmarkRunner, VariableSpace};
use script_engines::{EngineConfig, FreshContextFactory, SharedContextFactory};

const ITERATIONS: usize = 5;

#[test]
fn test_sweep_shared_context() {
    let factory = SharedContextFactory::new(&EngineConfig::default()).unwrap();
    let runner = BenchmarkRunner::with_default_corpus(100);

    let reports = runner.sweep(&factory, &strategy::all(), ITERATIONS, 2);
    assert_eq!(reports.len(), 6);
    for report in &reports {
        assert!(report.success(), "{}", format_line(report));
        assert_eq!(report.evaluations, ITERATIONS * 6);
        assert_eq!(report.engine, "boa (shared context)");
    }
}

#[test]
fn test_sweep_context_per_call() {
    let factory = FreshContextFactory::new(&EngineConfig::default()).unwrap();
    let runner = BenchmarkRunner::with_default_corpus(100);

    let reports = runner.sweep(&factory, &strategy::all(), ITERATIONS, 1);
    assert_eq!(reports.len(), 3);
    assert!(reports.iter().all(|r| r.success()));
}

#[test]
fn test_corpus_follows_variable_space_size() {
    let shared = SharedContextFactory::new(&EngineConfig::default()).unwrap();
    let per_call = FreshContextFactory::new(&EngineConfig::default()).unwrap();

    for size in [MIN_SIZE, 23, 200, 1000] {
        let runner = BenchmarkRunner::with_default_corpus(size);
        assert_eq!(runner.variables().len(), size);

        for strategy in strategy::all() {
            let report = runner.run_detailed(&per_call, strategy, 2);
            assert!(report.success(), "size {}: {}", size, format_line(&report));
            assert_eq!(report.evaluations, 12);

            let report = runner.run_detailed(&shared, strategy, 2);
            assert!(report.success(), "size {}: {}", size, format_line(&report));
        }
    }
}

#[test]
fn test_broken_snippet_stops_only_that_run() {
    let factory = SharedContextFactory::new(&EngineConfig::default()).unwrap();
    let runner = BenchmarkRunner::new(
        vec![
            "V10 === V1 + V2 + V3 + V4".to_string(),
            "V10 === V1 +".to_string(),
        ],
        VariableSpace::default(),
    );

    let reports = runner.sweep(&factory, &strategy::all(), 3, 1);
    assert_eq!(reports.len(), 3);
    for report in &reports {
        assert_eq!(report.evaluations, 1);
        assert!(report.error.is_some());
    }

    // The shared context is still usable after the failures
    let good = BenchmarkRunner::with_default_corpus(100);
    assert!(good
        .run_detailed(&factory, &strategy::BindAll, 1)
        .success());
}

#[test]
fn test_report_formatting() {
    let factory = FreshContextFactory::new(&EngineConfig::default()).unwrap();
    let runner = BenchmarkRunner::with_default_corpus(100);
    let reports = runner.sweep(&factory, &strategy::all(), 1, 1);

    let table = format_results(&reports);
    assert!(table.contains("quickjs (context per call)"));
    assert!(table.contains("Bind Referenced"));

    let json = format_results_json(&reports).unwrap();
    assert!(json.contains("\"engine\": \"quickjs (context per call)\""));
    assert!(json.contains("\"mismatches\": 0"));
}
