//! slidescore - layout quality scores for generated slides
//!
//! Usage:
//!   slidescore check <INPUT> <OUTPUT>   Score one pair of render snapshots
//!   slidescore batch <FOLDER>           Score every slide unit under a folder
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `warn`).

mod summary;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Env};
use serde::Serialize;
use slidescore_batch::{BatchContext, UnitFileNames, find_slide_units, load_snapshot};
use slidescore_core::{AnalysisConfig, DetectionResult, QualityGrade, analyze_pair};

use summary::{Palette, print_batch_summary, print_slide_line};

/// Average score a batch needs for a zero exit code.
const PASSING_AVERAGE: f64 = 5.0;

/// Score generated slides for overlapping and overflowing text
#[derive(Parser, Debug)]
#[command(name = "slidescore")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Score one slide
    slidescore check slide_01/input.json slide_01/output.json

    # Score a folder of slides and save the report
    slidescore batch slides/ -o results.json

    # Show the worst findings of every slide, four workers
    slidescore batch slides/ -v -j 4

    # Tighten the overlap threshold
    slidescore batch slides/ --config strict.json
"#)]
struct Cli {
    /// Analysis policy (JSON); missing fields keep their defaults
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score one (input, output) snapshot pair and print its findings
    Check {
        /// Render snapshot of the template document
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Render snapshot of the generated document
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },

    /// Score every slide unit under a folder
    Batch {
        /// Folder holding one sub-directory per slide
        #[arg(value_name = "FOLDER")]
        folder: PathBuf,

        /// Save the full report as JSON
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print findings per slide and info-level logs
        #[arg(short, long)]
        verbose: bool,

        /// Worker threads (default: one per core)
        #[arg(short, long, value_name = "N")]
        jobs: Option<usize>,

        /// Input snapshot file name inside each slide directory
        #[arg(long, value_name = "NAME", default_value = "input.json")]
        input_name: String,

        /// Output snapshot file name inside each slide directory
        #[arg(long, value_name = "NAME", default_value = "output.json")]
        output_name: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Command::Batch { verbose: true, .. });
    Builder::from_env(Env::default().default_filter_or(if verbose { "info" } else { "warn" }))
        .format_timestamp(None)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Check {
            input,
            output,
            compact,
        } => check(&input, &output, &config, compact),
        Command::Batch {
            folder,
            output,
            verbose,
            jobs,
            input_name,
            output_name,
        } => {
            let names = UnitFileNames {
                input: input_name,
                output: output_name,
            };
            batch(&folder, &names, config, jobs, output.as_deref(), verbose)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config '{}'", path.display()))?;
    let config = AnalysisConfig::from_json_str(&text)
        .with_context(|| format!("invalid config '{}'", path.display()))?;
    log::info!("loaded analysis config from {}", path.display());
    Ok(config)
}

/// `check` output: the interchange findings plus the derived score.
#[derive(Serialize)]
struct CheckReport<'a> {
    score: f64,
    grade: QualityGrade,
    element_count: usize,
    text_element_count: usize,
    #[serde(flatten)]
    result: &'a DetectionResult,
}

fn check(input: &Path, output: &Path, config: &AnalysisConfig, compact: bool) -> Result<ExitCode> {
    let input_tree = load_snapshot(input)?;
    let output_tree = load_snapshot(output)?;
    let analysis = analyze_pair(&input_tree, &output_tree, config)?;

    let report = CheckReport {
        score: analysis.score,
        grade: QualityGrade::of(analysis.score),
        element_count: analysis.element_count,
        text_element_count: analysis.text_element_count,
        result: &analysis.result,
    };
    let json = if compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{json}");
    Ok(ExitCode::SUCCESS)
}

fn batch(
    folder: &Path,
    names: &UnitFileNames,
    config: AnalysisConfig,
    jobs: Option<usize>,
    output: Option<&Path>,
    verbose: bool,
) -> Result<ExitCode> {
    let palette = Palette::detect();
    println!("Scanning folder: {}", folder.display());

    let units = find_slide_units(folder, names)?;
    if units.is_empty() {
        eprintln!(
            "No slide units found. Expected {}/<slide>/{{{}, {}}}",
            folder.display(),
            names.input,
            names.output
        );
        return Ok(ExitCode::FAILURE);
    }
    println!("Found {} slide units\n", units.len());

    let total = units.len();
    let mut context = BatchContext::new(units).with_config(config);
    if let Some(jobs) = jobs {
        context = context.with_jobs(jobs);
    }
    let report = context.run_with(|slide| log::info!("finished {}", slide.name))?;

    for (idx, slide) in report.slides.iter().enumerate() {
        print_slide_line(&palette, idx + 1, total, slide, verbose);
    }
    print_batch_summary(&palette, &report);

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json)
            .with_context(|| format!("failed to write report '{}'", path.display()))?;
        println!("\nResults saved to: {}", path.display());
    }

    Ok(if report.passes(PASSING_AVERAGE) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
