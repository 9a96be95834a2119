//! Policheck: Privacy Policy Analyzer CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use policheck::analyzer::AnalysisEngine;
use policheck::config::{load_config, CONFIG_FILENAME};
use policheck::fetcher::DEFAULT_USER_AGENT;
use policheck::reporter::{ConsoleReporter, JsonReporter};
use policheck::AnalysisOutcome;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Policheck: Privacy Policy Quality Analyzer
#[derive(Parser, Debug)]
#[command(name = "policheck")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Privacy policy URL(s) to analyze (omit when using a subcommand)
    #[arg(required_unless_present = "command")]
    urls: Vec<String>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum score threshold (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<u8>,

    /// Quiet mode (minimal output)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output
    #[arg(long, short)]
    verbose: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Path to config file (default: search .policheckrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Analyze URLs in parallel (default when several URLs are given)
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .policheckrc.json with sensible defaults
    Init {
        /// Minimum score threshold (e.g. 60)
        #[arg(long)]
        threshold: Option<u8>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(cmd) = args.command {
        match cmd {
            Commands::Init { threshold, dir } => {
                return run_init(threshold, dir.as_deref());
            }
        }
    }

    let work_dir = std::env::current_dir().context("Failed to get current directory")?;

    // Load config (CLI flags override config file)
    let config = load_config(&work_dir, args.config.as_deref())?
        .merge_with_cli(args.threshold, args.timeout);

    let engine = AnalysisEngine::with_settings(&config.fetch_settings())
        .context("Failed to build HTTP client")?;

    // Set up parallel processing
    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let use_parallel = args.parallel || args.urls.len() > 3;
    let outcomes = if use_parallel {
        analyze_urls_parallel(&engine, &args.urls)
    } else {
        args.urls.iter().map(|url| engine.analyze(url)).collect()
    };

    let stats = AnalysisEngine::aggregate_stats(&outcomes);

    // Output results
    if args.json {
        let reporter = JsonReporter::new().pretty();
        if outcomes.len() == 1 {
            println!("{}", reporter.report(&outcomes[0]));
        } else {
            println!("{}", reporter.report_with_summary(&outcomes, &stats));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for outcome in &outcomes {
            reporter.report_quiet(outcome);
        }
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }

        if outcomes.len() == 1 {
            reporter.report(&outcomes[0]);
        } else {
            reporter.report_many(&outcomes, &stats);
        }
    }

    // Check threshold (config or CLI)
    let threshold = args.threshold.or(config.threshold);
    if let Some(threshold) = threshold {
        let score = if outcomes.len() == 1 {
            outcomes[0].score().map(|s| s.value).unwrap_or(0)
        } else {
            stats.average_score.map(|s| s.value).unwrap_or(0)
        };

        if score < threshold {
            if !args.quiet && !args.json {
                eprintln!(
                    "\n{}: Score {} is below threshold {}",
                    "Failed".red().bold(),
                    score,
                    threshold
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    if stats.fetch_failures > 0 {
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Analyze URLs in parallel. Outcome order follows input order.
fn analyze_urls_parallel(engine: &AnalysisEngine, urls: &[String]) -> Vec<AnalysisOutcome> {
    use rayon::prelude::*;

    urls.par_iter().map(|url| engine.analyze(url)).collect()
}

fn run_init(threshold: Option<u8>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let threshold_value = threshold.unwrap_or(60);

    let json = format!(
        r#"{{
  "threshold": {},
  "timeoutSecs": 10,
  "userAgent": "{}",
  "maxRedirects": 5
}}
"#,
        threshold_value, DEFAULT_USER_AGENT
    );

    std::fs::write(&config_path, json)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {} with threshold={}",
        "Done".green().bold(),
        config_path.display(),
        threshold_value
    );
    Ok(ExitCode::SUCCESS)
}
