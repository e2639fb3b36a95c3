//! trueno-raster: compare incremental rasterization strategies
//!
//! Rasterizes a line or circle with every selected strategy, then prints the
//! slope, pixel count, execution time and error statistics of each.
//!
//! Run: `trueno-raster line 0 0 100 50`
//!      `trueno-raster circle 0 0 10 --export points.csv`

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trueno_raster::analysis::Analyzer;
use trueno_raster::config::AnalysisConfig;
use trueno_raster::geometry::{Circle, LineSegment, Point};
use trueno_raster::output::{PointTable, Report};
use trueno_raster::raster::{CircleAlgorithm, LineAlgorithm};

/// trueno-raster: DDA, Bresenham and Midpoint rasterization analyzer
#[derive(Parser, Debug)]
#[command(name = "trueno-raster")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Compare line and circle rasterization algorithms", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Algorithm to run (repeatable; default: all for the primitive)
    #[arg(short, long = "algorithm", global = true)]
    algorithms: Vec<String>,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Export the point table as CSV
    #[arg(short, long, global = true)]
    export: Option<PathBuf>,

    /// Timing runs per algorithm (fastest is reported)
    #[arg(short, long, global = true)]
    runs: Option<u32>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rasterize the segment (x1, y1) -> (x2, y2)
    Line {
        #[arg(allow_negative_numbers = true)]
        x1: i32,
        #[arg(allow_negative_numbers = true)]
        y1: i32,
        #[arg(allow_negative_numbers = true)]
        x2: i32,
        #[arg(allow_negative_numbers = true)]
        y2: i32,
    },
    /// Rasterize the circle centered at (xc, yc) with radius r
    Circle {
        #[arg(allow_negative_numbers = true)]
        xc: i32,
        #[arg(allow_negative_numbers = true)]
        yc: i32,
        #[arg(allow_negative_numbers = true)]
        r: i32,
    },
    /// Run the five standard slope cases
    Presets,
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true);

    tracing_subscriber::registry().with(env_filter).with(fmt_layer).init();
}

fn load_config(cli: &Cli) -> Result<AnalysisConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    if let Some(runs) = cli.runs {
        if runs == 0 {
            bail!("--runs must be at least 1");
        }
        config = config.timing_runs(runs);
    }

    match cli.command {
        Command::Line { .. } | Command::Presets if !cli.algorithms.is_empty() => {
            let algorithms = cli
                .algorithms
                .iter()
                .map(|name| name.parse::<LineAlgorithm>())
                .collect::<trueno_raster::Result<Vec<_>>>()?;
            config = config.line_algorithms(algorithms);
        }
        Command::Circle { .. } if !cli.algorithms.is_empty() => {
            let algorithms = cli
                .algorithms
                .iter()
                .map(|name| name.parse::<CircleAlgorithm>())
                .collect::<trueno_raster::Result<Vec<_>>>()?;
            config = config.circle_algorithms(algorithms);
        }
        _ => {}
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let analyzer = Analyzer::new(load_config(&cli)?);
    tracing::info!(config = ?analyzer.config(), "starting analysis");

    let (report, table) = match cli.command {
        Command::Line { x1, y1, x2, y2 } => {
            let line = LineSegment::new(Point::new(x1, y1), Point::new(x2, y2));
            let analysis = analyzer.analyze_line(&line);
            (Report::for_line(&analysis), Some(PointTable::from_line_analysis(&analysis)))
        }
        Command::Circle { xc, yc, r } => {
            let circle = Circle::new(Point::new(xc, yc), r)?;
            let analysis = analyzer.analyze_circle(&circle);
            (Report::for_circle(&analysis), Some(PointTable::from_circle_analysis(&analysis)))
        }
        Command::Presets => (Report::for_line_presets(&analyzer), None),
    };

    print!("{report}");

    if let Some(path) = &cli.export {
        let Some(table) = table else {
            bail!("--export is not supported for presets");
        };
        table
            .write_to_file(path)
            .with_context(|| format!("writing point table {}", path.display()))?;
        tracing::info!(path = %path.display(), rows = table.len(), "exported point table");
    }

    Ok(())
}
