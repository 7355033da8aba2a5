use clap::{Parser, ValueEnum};
use ksim_core::ScanStrategy;
use std::path::PathBuf;

mod commands;
mod config;
mod error;

use commands::scan::ScanOptions;
use config::Config;
use error::{print_error_and_exit, CliError, CliResult};

#[derive(Parser)]
#[command(name = "ksim")]
#[command(about = "KSIM - Find all approximate occurrences of a motif in a text")]
#[command(version)]
#[command(long_about = "
KSIM reports every window of a text that matches a pattern with at most k
insertions, deletions or substitutions. The dataset is three whitespace-separated
tokens: k, the pattern and the text. Each match is printed as 'offset length'
with a 1-based offset.

Examples:
  ksim rosalind_ksim.txt
  ksim --strategy parallel --threads 8 < dataset.txt
  ksim --verify -v dataset.txt
")]
pub struct Cli {
    /// Dataset file (reads stdin when omitted or '-')
    pub input: Option<PathBuf>,

    /// Matrix management strategy
    #[arg(long)]
    pub strategy: Option<StrategyArg>,

    /// Number of threads for the parallel strategy
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Cross-check every motif with the unbanded edit distance
    #[arg(long)]
    pub verify: bool,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print an example configuration file and exit
    #[arg(long)]
    pub example_config: bool,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StrategyArg {
    Reuse,
    Fresh,
    Parallel,
}

impl From<StrategyArg> for ScanStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Reuse => ScanStrategy::Reuse,
            StrategyArg::Fresh => ScanStrategy::Fresh,
            StrategyArg::Parallel => ScanStrategy::Parallel,
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    // stdout carries only results, so the default level stays quiet
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn run(cli: Cli) -> CliResult<()> {
    if cli.example_config {
        let example = Config::example_toml().map_err(|e| CliError::config(format!("{:#}", e)))?;
        print!("{}", example);
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref())
        .map_err(|e| CliError::config(format!("{:#}", e)))?;

    let options = ScanOptions {
        input: cli.input,
        strategy: cli.strategy.map(Into::into).unwrap_or(config.scan.strategy),
        threads: Some(cli.threads.unwrap_or(config.scan.threads)),
        verify: cli.verify || config.output.verify,
    };
    log::debug!("Scan options: {:?}", options);

    commands::scan::execute(&options)
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(err) = run(cli) {
        print_error_and_exit(&err);
    }
}
