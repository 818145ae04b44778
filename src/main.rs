// SPDX-License-Identifier: PMPL-1.0-or-later

//! netsiege: structural attack simulation on directed weighted networks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use netsiege::{
    attack, dataset, report, AttackConfig, AttackProfile, AttackUnit, GraphStore, MetricEvaluator,
    MetricSpec,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "netsiege")]
#[command(version)]
#[command(about = "Structural attack simulation and robustness measurement")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show groups and graph sizes for a dataset
    Inspect {
        /// Edge-record dataset (JSON or YAML)
        #[arg(value_name = "DATASET")]
        dataset: PathBuf,
    },

    /// Run an attack simulation
    Attack {
        /// Edge-record dataset (JSON or YAML)
        #[arg(value_name = "DATASET")]
        dataset: PathBuf,

        /// Removal unit
        #[arg(long, value_enum, default_value = "node")]
        how: HowArg,

        /// Random strategy (targeted when absent)
        #[arg(long)]
        random: bool,

        /// Trials per group (forced to 1 for targeted attacks)
        #[arg(long, default_value = "10")]
        iter_n: usize,

        /// Attack the highest-ranked elements first
        #[arg(long)]
        reverse: bool,

        /// Absolute removal amount
        #[arg(long, conflicts_with = "ratio")]
        num: Option<usize>,

        /// Proportional removal amount, resolved per group
        #[arg(long)]
        ratio: Option<f64>,

        /// Metrics to evaluate per trial
        #[arg(long, value_enum, value_delimiter = ',', default_value = "aspl")]
        metrics: Vec<MetricArg>,

        /// RNG seed for reproducible random attacks
        #[arg(long)]
        seed: Option<u64>,

        /// Save the report as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suppress the summary table
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run a simulation described by a profile file
    Scenario {
        /// Edge-record dataset (JSON or YAML)
        #[arg(value_name = "DATASET")]
        dataset: PathBuf,

        /// Attack profile (JSON or YAML)
        #[arg(short, long)]
        profile: PathBuf,

        /// Save the report as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Suppress the summary table
        #[arg(short, long)]
        quiet: bool,
    },
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum HowArg {
    Node,
    Edge,
}

impl From<HowArg> for AttackUnit {
    fn from(arg: HowArg) -> Self {
        match arg {
            HowArg::Node => AttackUnit::Node,
            HowArg::Edge => AttackUnit::Edge,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum MetricArg {
    /// Average shortest path length (hop count)
    Aspl,
    /// Average shortest path length (edge weights)
    AsplWeighted,
    /// Average clustering coefficient
    Clustering,
    /// Directed global efficiency
    Efficiency,
}

impl From<MetricArg> for MetricSpec {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Aspl => MetricSpec::AvgShortestPathLength {
                weighted: false,
                method: Default::default(),
            },
            MetricArg::AsplWeighted => MetricSpec::AvgShortestPathLength {
                weighted: true,
                method: Default::default(),
            },
            MetricArg::Clustering => MetricSpec::AvgClustering {
                nodes: None,
                weighted: false,
                count_zeros: true,
            },
            MetricArg::Efficiency => MetricSpec::GlobalEfficiency,
        }
    }
}

fn load_store(path: &PathBuf) -> Result<GraphStore> {
    let records = dataset::load_records(path)
        .with_context(|| format!("loading dataset {}", path.display()))?;
    GraphStore::from_records(records).context("building per-group graphs")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { dataset } => {
            let store = load_store(&dataset)?;
            println!("Dataset: {}", dataset.display());
            println!("Groups: {}", store.len());
            for group in store.groups() {
                println!(
                    "  {:<20} {:>6} nodes  {:>6} edges",
                    group,
                    store.node_count(group).unwrap_or(0),
                    store.edge_count(group).unwrap_or(0),
                );
            }
            println!(
                "Minimum pool: {} nodes, {} edges",
                store.min_node_count(),
                store.min_edge_count()
            );
        }

        Commands::Attack {
            dataset,
            how,
            random,
            iter_n,
            reverse,
            num,
            ratio,
            metrics,
            seed,
            output,
            quiet,
        } => {
            let store = load_store(&dataset)?;
            let config = AttackConfig {
                how: how.into(),
                random,
                iter_n,
                reverse,
                seed,
                verbose: !quiet,
            };
            let specs: Vec<MetricSpec> = metrics.into_iter().map(Into::into).collect();
            let evaluator = MetricEvaluator::from_specs(&specs);

            let result = attack::execute_attack(store, config, evaluator, num, ratio)
                .context("attack simulation failed")?;

            report::print_summary(&result, quiet);
            if let Some(path) = output {
                report::write_report(&result, &path)?;
                println!("Report saved to: {}", path.display());
            }
        }

        Commands::Scenario {
            dataset,
            profile,
            output,
            quiet,
        } => {
            let store = load_store(&dataset)?;
            let profile = AttackProfile::load(&profile)
                .with_context(|| format!("loading profile {}", profile.display()))?;

            let result =
                attack::execute_profile(store, &profile).context("attack simulation failed")?;

            report::print_summary(&result, quiet);
            if let Some(path) = output {
                report::write_report(&result, &path)?;
                println!("Report saved to: {}", path.display());
            }
        }
    }

    Ok(())
}
