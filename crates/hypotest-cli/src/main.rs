//! htest - one-sample hypothesis testing CLI
//!
//! Usage:
//!   htest ttest data.csv --mu 400          # t test against all three alternatives
//!   htest ttest data.csv --alternative less --alpha 0.01
//!   htest describe data.csv                # parametric and non-parametric summaries
//!   htest probplot data.csv --json         # normal probability plot coordinates
//!   cat data.txt | htest ttest - --mu 10   # read the sample from stdin

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod input;
mod output;

use commands::ttest::{Selection, TtestOptions};
use commands::{describe, probplot, ttest};

/// htest - one-sample hypothesis testing
///
/// Tests whether a sample average differs from, is less than, or is greater
/// than a specified value, and reports the power of each test.
#[derive(Parser)]
#[command(name = "htest")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// One-sample t test of H₀: μ = μ₀
    Ttest {
        /// Data file with one value per line ("-" for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Zero-based column holding the sample
        #[arg(long, default_value_t = 0)]
        column: usize,

        /// Hypothesized population average μ₀
        #[arg(long, allow_negative_numbers = true)]
        mu: Option<f64>,

        /// Significance level α
        #[arg(long)]
        alpha: Option<f64>,

        /// Alternative hypothesis: all, two-sided, less or greater
        #[arg(long, default_value = "all")]
        alternative: Selection,

        /// Decimal places in the report
        #[arg(long)]
        decimals: Option<u32>,

        /// Skip the descriptive summaries
        #[arg(long)]
        no_summary: bool,
    },

    /// Parametric and non-parametric summaries
    Describe {
        /// Data file with one value per line ("-" for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Zero-based column holding the sample
        #[arg(long, default_value_t = 0)]
        column: usize,

        /// Decimal places in the report
        #[arg(long)]
        decimals: Option<u32>,
    },

    /// Normal probability plot coordinates and least-squares fit
    Probplot {
        /// Data file with one value per line ("-" for stdin)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Zero-based column holding the sample
        #[arg(long, default_value_t = 0)]
        column: usize,

        /// Decimal places in the report
        #[arg(long)]
        decimals: Option<u32>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "hypotest=debug,htest=debug"
    } else {
        "hypotest=warn,htest=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn execute(cli: &Cli) -> error::Result<()> {
    let config = cli.config.as_deref();
    match &cli.command {
        Commands::Ttest {
            file,
            column,
            mu,
            alpha,
            alternative,
            decimals,
            no_summary,
        } => {
            let options = TtestOptions {
                column: *column,
                mu: *mu,
                alpha: *alpha,
                decimals: *decimals,
                alternative: *alternative,
                summaries: !no_summary,
            };
            ttest::run(file, &options, config, cli.json)
        }
        Commands::Describe {
            file,
            column,
            decimals,
        } => describe::run(file, *column, *decimals, config, cli.json),
        Commands::Probplot {
            file,
            column,
            decimals,
        } => probplot::run(file, *column, *decimals, config, cli.json),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            e.exit_code()
        }
    }
}
