mod telemetry;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use shotgroup_qc::analysis::tracking::filter_by_confidence;
use shotgroup_qc::input::{load_config, load_shot_group};
use shotgroup_qc::report::{ReportMeta, write_reports};
use shotgroup_qc::{AnalysisConfig, Analyzer, FlyerMethod, FlyerSettings};

#[derive(Debug, Parser)]
#[command(name = "shotgroup-qc", version, about = "Shot-group statistics, flyers and scoring")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze one shot file and write summary.json and report.txt.
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    /// Shot file (JSON document or bare array of shots).
    #[arg(long)]
    input: PathBuf,
    /// Output directory.
    #[arg(long)]
    out: PathBuf,
    /// JSON analysis config; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    flyer_method: Option<FlyerMethod>,
    #[arg(long)]
    flyer_threshold: Option<f64>,
    /// Drop detections below this confidence before analysis.
    #[arg(long)]
    min_confidence: Option<f64>,
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let Command::Run(args) = &cli.command;
    telemetry::init(args.verbose);
    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(args)?;
    tracing::info!(
        method = %config.flyers.method,
        threshold = config.flyers.threshold,
        "flyer detection configured"
    );

    let mut group = load_shot_group(&args.input)?;
    let detected = group.len();
    group.shots = filter_by_confidence(&group.shots, config.min_detection_confidence);
    if group.len() < detected {
        tracing::info!(
            kept = group.len(),
            dropped = detected - group.len(),
            min_confidence = config.min_detection_confidence,
            "filtered low-confidence detections"
        );
    }

    let report = Analyzer::new(config).analyze(&group)?;
    let meta = ReportMeta::new(args.input.display().to_string());
    let written = write_reports(&report, &meta, &args.out)?;
    tracing::info!(
        summary = %written.summary.display(),
        report = %written.text.display(),
        "reports written"
    );
    Ok(())
}

fn resolve_config(args: &RunArgs) -> Result<AnalysisConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => AnalysisConfig::default(),
    };
    apply_overrides(&mut config, args);
    Ok(config)
}

fn apply_overrides(config: &mut AnalysisConfig, args: &RunArgs) {
    if let Some(method) = args.flyer_method {
        config.flyers = FlyerSettings::new(method);
    }
    if let Some(threshold) = args.flyer_threshold {
        config.flyers.threshold = threshold;
    }
    if let Some(min) = args.min_confidence {
        config.min_detection_confidence = min;
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
