//! Spanwise CLI - spanning-tree reports for graph files.
//!
//! Reads a graph in the plain-text integer format, then prints the original
//! graph, Prim's tree and Kruskal's tree with their diameter and cost.

mod render;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use spanwise_core::config::{ReportFormat, SpanwiseConfig, DEFAULT_CONFIG_FILE};
use spanwise_core::loader::load_graph;
use spanwise_core::mst::{Kruskal, Prim, SpanningTreeAlgorithm};
use spanwise_core::{GraphReport, ReportKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Output format flag.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

/// Algorithm selection flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Prim,
    Kruskal,
}

/// Spanwise - minimum spanning trees and diameter of weighted graphs
#[derive(Parser, Debug)]
#[command(name = "spanwise")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file: vertex count, edge count, then `a b weight` triples
    #[arg(required_unless_present = "print_config")]
    graph: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, env = "SPANWISE_CONFIG")]
    config: PathBuf,

    /// Output format (overrides report.format)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Maximum vertex count (overrides limits.max_vertices)
    #[arg(long)]
    max_vertices: Option<usize>,

    /// Omit per-edge listings
    #[arg(long)]
    no_edges: bool,

    /// Run only this algorithm
    #[arg(long, value_enum)]
    only: Option<AlgorithmArg>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut SpanwiseConfig) {
        if let Some(format) = self.format {
            config.report.format = format.into();
        }
        if let Some(max_vertices) = self.max_vertices {
            config.limits.max_vertices = max_vertices;
        }
        if self.no_edges {
            config.report.list_edges = false;
        }
        if let Some(only) = self.only {
            config.algorithms.prim = only == AlgorithmArg::Prim;
            config.algorithms.kruskal = only == AlgorithmArg::Kruskal;
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = SpanwiseConfig::load_from(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;
    args.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let Some(path) = args.graph.as_ref() else {
        anyhow::bail!("No graph file given");
    };
    let graph = load_graph(path, config.limits)
        .with_context(|| format!("Failed to load graph from {}", path.display()))?;

    let list_edges = config.report.list_edges;
    let mut reports = vec![GraphReport::from_graph(
        ReportKind::Original,
        &graph,
        list_edges,
    )];

    let mut algorithms: Vec<(&dyn SpanningTreeAlgorithm, ReportKind)> = Vec::new();
    if config.algorithms.prim {
        algorithms.push((&Prim, ReportKind::Prim));
    }
    if config.algorithms.kruskal {
        algorithms.push((&Kruskal, ReportKind::Kruskal));
    }

    for (algorithm, kind) in algorithms {
        let tree = algorithm
            .build(&graph)
            .with_context(|| format!("{} failed on {}", kind.heading(), path.display()))?;
        tracing::debug!(
            algorithm = algorithm.name(),
            weight = tree.total_weight(),
            "tree ready"
        );
        reports.push(GraphReport::from_graph(kind, &tree, list_edges));
    }

    match config.report.format {
        ReportFormat::Text => print!("{}", render::render_text(&reports)),
        ReportFormat::Json => println!("{}", render::render_json(&reports)?),
    }
    Ok(())
}
