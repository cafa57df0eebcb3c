use crate::solver::CountdownSolver;
use crate::utils::{validate_source_numbers, validate_target};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - Solve the countdown numbers game
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Find arithmetic expressions over the source numbers that evaluate to the target")]
#[command(version)]
pub struct CliArgs {
    /// Target value to reach
    pub target: u64,

    /// Source numbers available as expression leaves
    #[arg(required = true, num_args = 1..)]
    pub numbers: Vec<u64>,

    /// Print at most this many solutions
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: u64,
    pub numbers: Vec<u64>,
    pub limit: Option<usize>,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    validate_source_numbers(&args.numbers).context("Invalid source numbers")?;
    validate_target(args.target).context("Invalid target")?;

    Ok(CliConfig {
        target: args.target,
        numbers: args.numbers,
        limit: args.limit,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    let solver = CountdownSolver::new();

    info!(
        "Searching for expressions over {:?} that equal {}",
        config.numbers, config.target
    );

    let solutions = solver.solve(&config.numbers, config.target);

    if solutions.is_empty() {
        warn!("No matching expression found");
        println!("No solution.");
        return Ok(());
    }

    let shown = config.limit.unwrap_or(solutions.len()).min(solutions.len());
    for expr in solutions.iter().take(shown) {
        println!("{} = {}", expr, config.target);
    }
    if shown < solutions.len() {
        println!("... and {} more", solutions.len() - shown);
    }

    Ok(())
}
