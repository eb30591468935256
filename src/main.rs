//! Command-line front end for the experiment analyzer.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use ab_oracle::output::{chart, csv, json, terminal};
use ab_oracle::{ExperimentAnalyzer, ExperimentConfig};

#[derive(Debug, Parser)]
#[command(
    name = "ab-oracle",
    version,
    about = "Statistical verdicts for A/B conversion experiments",
    long_about = "Simulates an A/B experiment from the given rates, runs the full\n\
        statistical pipeline (z-test, confidence intervals, effect size, power,\n\
        business impact) and prints a verdict. Artifacts (SVG chart, CSV export)\n\
        are best-effort: failures are logged and the run still succeeds."
)]
struct Cli {
    /// Simulated control conversion rate
    #[arg(long, default_value_t = ExperimentConfig::default().control_rate)]
    control_rate: f64,

    /// Simulated treatment conversion rate
    #[arg(long, default_value_t = ExperimentConfig::default().treatment_rate)]
    treatment_rate: f64,

    /// Sample size per group
    #[arg(long, default_value_t = ExperimentConfig::default().n_per_group)]
    n_per_group: usize,

    /// Significance level
    #[arg(long, default_value_t = ExperimentConfig::default().alpha)]
    alpha: f64,

    /// Monthly visitors for the business projection
    #[arg(long, default_value_t = ExperimentConfig::default().monthly_visitors)]
    monthly_visitors: u64,

    /// Average order value for the business projection
    #[arg(long, default_value_t = ExperimentConfig::default().avg_order_value)]
    avg_order_value: f64,

    /// Data-generation seed
    #[arg(long, default_value_t = ExperimentConfig::default().seed)]
    seed: u64,

    /// Directory for the chart and CSV artifacts
    #[arg(long, value_name = "DIR", default_value = "outputs")]
    out_dir: PathBuf,

    /// Print the result as pretty JSON instead of the report
    #[arg(long)]
    json: bool,

    /// Skip artifact generation
    #[arg(long)]
    no_artifacts: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = ExperimentConfig {
        control_rate: cli.control_rate,
        treatment_rate: cli.treatment_rate,
        n_per_group: cli.n_per_group,
        alpha: cli.alpha,
        monthly_visitors: cli.monthly_visitors,
        avg_order_value: cli.avg_order_value,
        seed: cli.seed,
    };

    let result = match ExperimentAnalyzer::with_config(config).run() {
        Ok(result) => result,
        Err(err) => {
            error!("{err}");
            return ExitCode::from(2);
        }
    };

    if cli.json {
        match json::to_json_pretty(&result) {
            Ok(out) => println!("{out}"),
            Err(err) => {
                error!("failed to serialize result: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", terminal::format_report(&result));
    }

    // Best-effort artifacts: log and continue on failure.
    if !cli.no_artifacts {
        if let Err(err) = std::fs::create_dir_all(&cli.out_dir) {
            warn!("could not create {}: {err}", cli.out_dir.display());
        } else {
            let chart_path = cli.out_dir.join("conversion_comparison.svg");
            match chart::render_rate_chart(&result, &chart_path) {
                Ok(()) => info!("saved chart to {}", chart_path.display()),
                Err(err) => warn!("could not create chart: {err}"),
            }

            let csv_path = cli.out_dir.join("ab_test_results.csv");
            match csv::write_csv(&result, &csv_path) {
                Ok(()) => info!("saved results to {}", csv_path.display()),
                Err(err) => warn!("could not export results: {err}"),
            }
        }
    }

    ExitCode::SUCCESS
}
