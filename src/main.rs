//! `vikor` command-line entry point.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use vikor::adapters::{LocalReportStorage, MarkdownReportRenderer, ProblemFileLoader};
use vikor::config::AppConfig;
use vikor::domain::analysis::RankedResult;
use vikor::domain::foundation::CompromiseCoefficient;
use vikor::domain::problem::DecisionProblem;
use vikor::ports::{ReportRenderer, ReportStorage};
use vikor::telemetry;

#[derive(Parser, Debug)]
#[command(name = "vikor")]
#[command(about = "Rank alternatives with the VIKOR compromise method")]
#[command(version)]
struct Cli {
    /// Problem file (.json, .yaml or .yml); the built-in example is used when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Compromise coefficient v in [0, 1] (overrides file and config)
    #[arg(short = 'v', long)]
    compromise: Option<f64>,

    /// Rescale weights to sum to one before ranking
    #[arg(long)]
    normalize_weights: bool,

    /// Write the report to this path instead of the configured location
    #[arg(short, long, conflicts_with = "no_report")]
    report: Option<PathBuf>,

    /// Do not write a report
    #[arg(long)]
    no_report: bool,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    telemetry::init(&config.logging);

    let mut problem = match &cli.input {
        Some(path) => ProblemFileLoader::new()
            .load(path)
            .with_context(|| format!("Failed to load problem from {}", path.display()))?,
        None => DecisionProblem::reference_example().context("Failed to build reference example")?,
    };

    if let Some(v) = cli.compromise {
        let v = CompromiseCoefficient::try_new(v).context("Invalid --compromise")?;
        problem = problem.with_compromise(v);
    }

    if cli.normalize_weights || config.engine.normalize_weights {
        problem = problem
            .with_normalized_weights()
            .context("Failed to normalize weights")?;
    }

    let result = problem
        .solve(config.engine.compromise()?)
        .context("Ranking failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&problem, &result);
    }

    if cli.no_report || (!config.report.enabled && cli.report.is_none()) {
        debug!("Report disabled");
        return Ok(());
    }

    let (output_dir, file_name) = report_target(&cli, &config);
    let markdown = MarkdownReportRenderer::new()
        .render(&problem, &result, &config.report.options())
        .context("Failed to render report")?;
    let saved = LocalReportStorage::new(output_dir)
        .save(&file_name, &markdown)
        .context("Failed to save report")?;

    if !cli.json {
        println!("\nReport saved to file: {}", saved.display());
    }
    Ok(())
}

/// Splits `--report` into directory and file name, else uses the config.
fn report_target(cli: &Cli, config: &AppConfig) -> (PathBuf, String) {
    let configured = (
        PathBuf::from(&config.report.output_dir),
        config.report.file_name.clone(),
    );
    let Some(path) = &cli.report else {
        return configured;
    };
    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        return (PathBuf::from(path), configured.1);
    };
    let dir = match path.parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    (dir, file_name.to_string())
}

fn print_summary(problem: &DecisionProblem, result: &RankedResult) {
    println!(
        "Best alternative: {} ({})",
        result.best_alternative(),
        problem.alternative_label(result.best_alternative() - 1)
    );
    println!("v = {}", result.compromise());
    println!("S: {:?}", result.s_values());
    println!("R: {:?}", result.r_values());
    println!("Q: {:?}", result.q_values());
    println!("\nRanking (ascending Q):");
    for (rank, entry) in result.ranked_alternatives().iter().enumerate() {
        println!(
            "{}. {} (Q = {:.4})",
            rank + 1,
            problem.alternative_label(entry.alternative - 1),
            entry.q
        );
    }
}
