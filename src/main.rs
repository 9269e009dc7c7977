use crate::analysis::report::analyze;
use crate::core::ids::NodeKey;
use crate::core::model::GraphDocument;
use crate::generate::constrained::{self, ConstrainedConfig};
use crate::generate::rng::SeededRng;
use crate::generate::unconstrained::{self, UnconstrainedConfig};
use crate::output::json::{JsonStyle, read_json, write_json};
use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod analysis;
pub mod core;
pub mod error;
pub mod generate;
pub mod logging;
pub mod output;

/// Generates random graph fixtures for the force-graph front-end.
#[derive(Parser)]
#[command(name = "graphgen", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Integer-id graph with 0..=max-degree links per node and no repeated peers
    Large {
        #[arg(long, default_value_t = ConstrainedConfig::default().node_count)]
        nodes: u32,

        #[arg(long, default_value_t = ConstrainedConfig::default().max_degree)]
        max_degree: u32,

        #[arg(short, long, default_value = "graph_data.json")]
        output: PathBuf,

        /// Seed for reproducible output; random when omitted
        #[arg(long, env = "GRAPHGEN_SEED")]
        seed: Option<u64>,
    },

    /// String-id graph built from random pairs; duplicates allowed
    Small {
        #[arg(long, default_value_t = UnconstrainedConfig::default().node_count)]
        nodes: u32,

        /// Pairs to draw; self pairs are dropped
        #[arg(long, default_value_t = UnconstrainedConfig::default().iterations)]
        iterations: u32,

        /// Parent directory must already exist
        #[arg(short, long, default_value = "src/data/graph_data.json")]
        output: PathBuf,

        /// Seed for reproducible output; random when omitted
        #[arg(long, env = "GRAPHGEN_SEED")]
        seed: Option<u64>,
    },

    /// Summarize a generated graph file
    Stats {
        path: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Fail on self-loops, repeated links, unknown endpoints or repeated ids
        #[arg(long)]
        strict: bool,
    },
}

fn seeded(seed: Option<u64>) -> SeededRng {
    let rng = seed.map_or_else(SeededRng::from_entropy, SeededRng::new);
    tracing::info!(seed = rng.seed(), "random source ready");
    rng
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Large {
            nodes,
            max_degree,
            output,
            seed,
        } => {
            let cfg = ConstrainedConfig {
                node_count: nodes,
                max_degree,
            };
            let doc = constrained::generate(&cfg, &mut seeded(seed));
            tracing::info!(nodes = doc.nodes.len(), links = doc.links.len(), "large graph");
            write_json(&output, &doc, JsonStyle::Compact)
                .context("failed to save large graph")?;
        }
        Command::Small {
            nodes,
            iterations,
            output,
            seed,
        } => {
            let cfg = UnconstrainedConfig {
                node_count: nodes,
                iterations,
            };
            let doc = unconstrained::generate(&cfg, &mut seeded(seed));
            tracing::info!(nodes = doc.nodes.len(), links = doc.links.len(), "small graph");
            write_json(&output, &doc, JsonStyle::Pretty)
                .context("failed to save small graph")?;
        }
        Command::Stats { path, json, strict } => {
            let doc: GraphDocument<NodeKey> = read_json(&path)?;
            let report = analyze(&doc)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{report}");
            }
            if strict && !report.is_simple() {
                bail!("{} is not a simple graph", path.display());
            }
        }
    }

    Ok(())
}
