//! Command-line arguments for the `binding-bench` binary.

use crate::corpus::MIN_SIZE;
use crate::strategy::{self, BindingStrategy};
use crate::variables::DEFAULT_SIZE;
use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use script_engines::{EngineConfig, SourcePolicy};

/// Which engine adapters to benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    /// Boa, one context shared by every evaluation
    Shared,
    /// QuickJS, a new context for every evaluation
    PerCall,
    /// Both, shared first
    Both,
}

/// Binding strategy selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    /// Bind every variable
    All,
    /// Bind variables named by the snippet, by token lookup
    Referenced,
    /// Bind variables named by the snippet, by scanning the whole space
    Inefficient,
}

impl StrategyKind {
    /// The strategy this option stands for
    pub fn strategy(self) -> &'static dyn BindingStrategy {
        match self {
            StrategyKind::All => &strategy::BindAll,
            StrategyKind::Referenced => &strategy::BindReferenced,
            StrategyKind::Inefficient => &strategy::BindReferencedInefficient,
        }
    }
}

/// Compare variable-binding strategies on embedded JavaScript engines
#[derive(Debug, Parser)]
#[command(name = "binding-bench", version)]
pub struct Cli {
    /// Engine adapter(s) to run
    #[arg(short, long, value_enum, default_value_t = EngineKind::Both)]
    pub engine: EngineKind,

    /// Passes over the snippet corpus per timed run
    #[arg(short, long, default_value_t = 5_000)]
    pub iterations: usize,

    /// Rounds of the full strategy comparison
    #[arg(short, long, default_value_t = 5)]
    pub repeats: usize,

    /// Size of the generated variable space (at least 22)
    #[arg(
        long,
        default_value_t = DEFAULT_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(MIN_SIZE as u64..)
    )]
    pub variables: usize,

    /// Strategy to include (repeatable, defaults to all three)
    #[arg(short, long = "strategy", value_enum)]
    pub strategies: Vec<StrategyKind>,

    /// Re-parse every snippet instead of caching its compiled form
    #[arg(long)]
    pub no_cache: bool,

    /// Output reports as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Engine configuration implied by the flags
    pub fn engine_config(&self) -> EngineConfig {
        let policy = if self.no_cache {
            SourcePolicy::Fresh
        } else {
            SourcePolicy::Cached
        };
        EngineConfig::default().with_source_policy(policy)
    }

    /// Selected strategies in comparison order, duplicates removed
    pub fn strategies(&self) -> Vec<&'static dyn BindingStrategy> {
        if self.strategies.is_empty() {
            return strategy::all();
        }
        let mut kinds = self.strategies.clone();
        kinds.sort_by_key(|kind| *kind as u8);
        kinds.dedup();
        kinds.into_iter().map(StrategyKind::strategy).collect()
    }
}
