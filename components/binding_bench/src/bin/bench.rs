//! Binding benchmark CLI
//!
//! Runs the strategy comparison against the selected engine adapters and
//! prints one line per run followed by a summary table.

use anyhow::Context as _;
use binding_bench::cli::EngineKind;
use binding_bench::runner::{self, BenchmarkRunner, RunReport};
use binding_bench::{BindingStrategy, Cli};
use clap::Parser;
use script_engines::{EvaluatorFactory, FreshContextFactory, SharedContextFactory};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging controlled by RUST_LOG, info by default
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = cli.engine_config();
    let strategies = cli.strategies();
    let bench = BenchmarkRunner::with_default_corpus(cli.variables);

    info!(
        iterations = cli.iterations,
        repeats = cli.repeats,
        variables = cli.variables,
        policy = ?config.source_policy,
        "starting binding benchmark"
    );

    let mut reports = Vec::new();
    if matches!(cli.engine, EngineKind::Shared | EngineKind::Both) {
        let factory = SharedContextFactory::new(&config).context("building boa context")?;
        reports.extend(compare(&cli, &bench, &factory, &strategies));
    }
    if matches!(cli.engine, EngineKind::PerCall | EngineKind::Both) {
        let factory = FreshContextFactory::new(&config).context("building quickjs runtime")?;
        reports.extend(compare(&cli, &bench, &factory, &strategies));
    }

    if cli.json {
        println!("{}", runner::format_results_json(&reports)?);
    } else {
        println!("{}", runner::format_results(&reports));
        print_summary(&reports);
    }

    Ok(())
}

fn compare<F: EvaluatorFactory>(
    cli: &Cli,
    bench: &BenchmarkRunner,
    factory: &F,
    strategies: &[&dyn BindingStrategy],
) -> Vec<RunReport> {
    if !cli.json {
        println!("=== {} ===", factory.name());
    }

    let reports = bench.sweep(factory, strategies, cli.iterations, cli.repeats);
    if !cli.json {
        for report in &reports {
            println!("{}", runner::format_line(report));
        }
    }
    reports
}

fn print_summary(reports: &[RunReport]) {
    let aborted = reports.iter().filter(|r| r.error.is_some()).count();
    let mismatches: usize = reports.iter().map(|r| r.mismatches).sum();
    let total_ms: f64 = reports.iter().map(|r| r.duration_ms).sum();

    println!("Summary:");
    println!("  Runs: {}", reports.len());
    println!("  Aborted: {}", aborted);
    println!("  Mismatched evaluations: {}", mismatches);
    println!("  Total time: {:.2} ms ({:.2} s)", total_ms, total_ms / 1000.0);
}
