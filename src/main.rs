mod figures;
mod input;
mod metrics;
mod render;
mod report;
mod reshape;
mod stats;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::figures::{
    consensus_violin, region_curves, restricted_init_violin, single_models_violin, site_curves,
    tables, total_cases,
};

#[derive(Parser)]
#[command(name = "fedfig", version)]
#[command(about = "Publication figures and LaTeX tables for federated-learning validation results")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Violin chart of the public initial model versus the final federation
    /// consensus on out-of-sample data
    ConsensusViolin(FigureArgs),
    /// Violin chart of single-site models and their ensemble versus the
    /// federation consensus on centralized out-of-sample data
    SingleModelsViolin(MetricFigureArgs),
    /// Violin chart of the best consensus round versus the round-0 baseline
    /// restricted to the reporting collaborators
    RestrictedInitViolin(MetricFigureArgs),
    /// Line chart of mean local validation per tumor region over rounds
    RegionCurves(MetricFigureArgs),
    /// Line chart of one site's local validation per tumor region over rounds
    SiteCurves(FigureArgs),
    /// Horizontal bar chart of case counts per site, colored by site role
    TotalCases(FigureArgs),
    /// Echo the singlet/triplet pairing p-value frame and its LaTeX form
    PairsTable(TableArgs),
    /// Echo the singlet/triplet score frame and its LaTeX form
    ScoresTable(MetricTableArgs),
}

#[derive(Args)]
struct FigureArgs {
    /// Path to the data parent directory
    #[arg(short = 'd', long, default_value = "data")]
    data_pardir: PathBuf,
    /// Path to the output parent directory
    #[arg(short = 'o', long, default_value = "output")]
    output_pardir: PathBuf,
}

#[derive(Args)]
struct MetricFigureArgs {
    #[command(flatten)]
    common: FigureArgs,
    /// Report the Jaccard overlap index instead of DSC
    #[arg(short = 'j', long)]
    jaccard: bool,
}

#[derive(Args)]
struct TableArgs {
    /// Path to the data parent directory
    #[arg(short = 'd', long, default_value = "data")]
    data_pardir: PathBuf,
}

#[derive(Args)]
struct MetricTableArgs {
    #[command(flatten)]
    common: TableArgs,
    /// Report the Jaccard overlap index instead of DSC
    #[arg(short = 'j', long)]
    jaccard: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli.command) {
        error!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::ConsensusViolin(args) => {
            consensus_violin::run(&args.data_pardir, &args.output_pardir)
        }
        Command::SingleModelsViolin(args) => single_models_violin::run(
            &args.common.data_pardir,
            &args.common.output_pardir,
            args.jaccard,
        ),
        Command::RestrictedInitViolin(args) => restricted_init_violin::run(
            &args.common.data_pardir,
            &args.common.output_pardir,
            args.jaccard,
        ),
        Command::RegionCurves(args) => region_curves::run(
            &args.common.data_pardir,
            &args.common.output_pardir,
            args.jaccard,
        ),
        Command::SiteCurves(args) => site_curves::run(&args.data_pardir, &args.output_pardir),
        Command::TotalCases(args) => total_cases::run(&args.data_pardir, &args.output_pardir),
        Command::PairsTable(args) => tables::pairs_table(&args.data_pardir),
        Command::ScoresTable(args) => tables::scores_table(&args.common.data_pardir, args.jaccard),
    }
}
