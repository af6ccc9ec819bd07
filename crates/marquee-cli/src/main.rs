mod logging;
mod settings;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use marquee_core::{Category, RandomSelector};
use marquee_generate::{GenerateOptions, GenerationEngine, GenerationError};
use rand::RngCore;
use thiserror::Error;

use logging::init_logging;
use settings::{SettingsError, load_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "marquee", version, about = "Film and television sample data")]
struct Cli {
    /// Path to a TOML config file (defaults to ./marquee.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Emit logs as JSON.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List categories and their table sizes.
    Categories,
    /// Print every entry of a category table.
    Table(TableArgs),
    /// Print random selections from a category.
    Sample(SampleArgs),
    /// Write a seeded CSV dataset.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct TableArgs {
    category: Category,
}

#[derive(Args, Debug)]
struct SampleArgs {
    category: Category,
    /// Number of selections.
    #[arg(long, short = 'n', default_value_t = 1)]
    count: usize,
    /// Seed for a reproducible sequence.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Rows to generate.
    #[arg(long)]
    rows: Option<u64>,
    /// Seed for the run.
    #[arg(long)]
    seed: Option<u64>,
    /// Output directory for runs.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Category column to include (repeatable, defaults to all).
    #[arg(long = "category", value_name = "CATEGORY")]
    categories: Vec<Category>,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref())?;
    init_logging(&settings.log.level, cli.log_json || settings.log.json)?;

    match cli.command {
        Command::Categories => {
            run_categories();
            Ok(())
        }
        Command::Table(args) => {
            run_table(args);
            Ok(())
        }
        Command::Sample(args) => {
            run_sample(args);
            Ok(())
        }
        Command::Generate(args) => run_generate(args, settings.generate),
    }
}

fn run_categories() {
    for category in Category::ALL {
        println!("{category}\t{}", category.table().len());
    }
}

fn run_table(args: TableArgs) {
    for entry in args.category.table().entries() {
        println!("{entry}");
    }
}

fn run_sample(args: SampleArgs) {
    tracing::info!(
        event = "sample_started",
        category = %args.category,
        count = args.count,
        seed = ?args.seed
    );
    match args.seed {
        Some(seed) => print_samples(&mut RandomSelector::seeded(seed), args.category, args.count),
        None => print_samples(
            &mut RandomSelector::thread_local(),
            args.category,
            args.count,
        ),
    }
}

fn print_samples<R: RngCore>(selector: &mut RandomSelector<R>, category: Category, count: usize) {
    let table = category.table();
    for _ in 0..count {
        println!("{}", selector.choose(table));
    }
}

/// Apply command-line flags on top of options loaded from the config file.
fn merge_generate_args(args: GenerateArgs, mut options: GenerateOptions) -> GenerateOptions {
    if let Some(rows) = args.rows {
        options.rows = rows;
    }
    if let Some(seed) = args.seed {
        options.seed = seed;
    }
    if let Some(out) = args.out {
        options.out_dir = out;
    }
    if !args.categories.is_empty() {
        options.categories = args.categories;
    }
    options
}

fn run_generate(args: GenerateArgs, options: GenerateOptions) -> Result<(), CliError> {
    let engine = GenerationEngine::new(merge_generate_args(args, options));
    let result = engine.run()?;
    tracing::info!(
        event = "run_finished",
        run_id = %result.report.run_id,
        rows = result.report.rows
    );

    println!("run_dir={}", result.run_dir.display());
    Ok(())
}
