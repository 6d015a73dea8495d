#![allow(clippy::doc_markdown)]
//! `layergraph` - print a graph and its layered BFS order.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use layergraph_core::{LayerGraphConfig, LayerStrategy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Layered breadth-first traversal over directed weighted graphs
#[derive(Parser, Debug)]
#[command(name = "layergraph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true, env = "LAYERGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the adjacency list of a graph
    Show {
        /// JSON edge list (reference graph when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Run layered BFS and print `vertex, layer` pairs
    Bfs {
        /// JSON edge list (reference graph when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Start vertex
        #[arg(short, long)]
        start: Option<usize>,

        /// Layer assignment strategy
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,

        /// Do not expand vertices past this layer
        #[arg(long)]
        max_layer: Option<usize>,

        /// Maximum number of vertices to report
        #[arg(long)]
        limit: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    /// Exact hop distances
    Exact,
    /// Legacy frontier counting
    Frontier,
}

impl From<StrategyArg> for LayerStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Exact => LayerStrategy::DistanceCarrying,
            StrategyArg::Frontier => LayerStrategy::FrontierCounting,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(level: &str, verbose: u8) {
    let default = match verbose {
        0 => level,
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = LayerGraphConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    init_tracing(&config.logging.level, cli.verbose);

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Show { input } => commands::show(&mut stdout, input.as_deref()),
        Command::Bfs {
            input,
            start,
            strategy,
            max_layer,
            limit,
            format,
        } => {
            let mut settings = config.traversal;
            if let Some(start) = start {
                settings.start = start;
            }
            if let Some(strategy) = strategy {
                settings.strategy = strategy.into();
            }
            if max_layer.is_some() {
                settings.max_layer = max_layer;
            }
            if limit.is_some() {
                settings.limit = limit;
            }
            settings
                .validate()
                .context("Invalid traversal arguments")?;
            commands::bfs(&mut stdout, input.as_deref(), &settings, format)
        }
    }
}
