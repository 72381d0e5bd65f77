#![forbid(unsafe_code)]
//! Adal Week Command Line Interface

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

use adal_week::commands::{
    execute_init, execute_shell, execute_submit, execute_tasks, execute_today, execute_values,
    InitOptions, ShellOptions, SubmitOptions, TasksOptions, TodayOptions, ValuesOptions,
};
use adal_week::config::DEFAULT_CONFIG_FILE;
use adal_week::{CatalogError, Config, Error, ValueCatalog};

#[derive(Parser)]
#[command(name = "adal-week")]
#[command(about = "Value of the day and daily tasks of the \"Adal Azamat\" program")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, env = "ADAL_WEEK_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Replacement value catalog (JSON)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show the date and the value of the day
    Today {
        /// Date to show (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw the three tasks of the day
    Tasks {
        /// Date to use (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the values of the week
    Values {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Submit a completed task
    Submit {
        /// Task number as shown by `tasks` (1-3)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
        task: u8,

        /// Last name
        #[arg(long)]
        last_name: String,

        /// First name
        #[arg(long)]
        first_name: String,

        /// Photo files (can specify multiple)
        #[arg(long = "photo")]
        photos: Vec<PathBuf>,

        /// Video files (can specify multiple)
        #[arg(long = "video")]
        videos: Vec<PathBuf>,

        /// Date to use (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Seed used for `tasks --seed`, to submit the same draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Interactive home / tasks / submission shell
    Shell {
        /// Date to use (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "adal_week=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Load config (init writes a fresh one, so never reads it)
    let is_init = matches!(cli.command, Commands::Init { .. });
    let config = if cli.config.exists() && !is_init {
        Config::load(&cli.config)
            .with_context(|| format!("Failed to load config from {:?}", cli.config))?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Init { force, catalog } => {
            let options = InitOptions {
                path: cli.config,
                force,
                catalog,
            };
            execute_init(options)?;
        }

        Commands::Today { date, json } => {
            let catalog = load_catalog(&config, &cli.config)?;
            execute_today(TodayOptions { date, json }, &catalog)?;
        }

        Commands::Tasks { date, seed, json } => {
            let catalog = load_catalog(&config, &cli.config)?;
            execute_tasks(TasksOptions { date, seed, json }, &catalog)?;
        }

        Commands::Values { json } => {
            let catalog = load_catalog(&config, &cli.config)?;
            execute_values(ValuesOptions { json }, &catalog)?;
        }

        Commands::Submit {
            task,
            last_name,
            first_name,
            photos,
            videos,
            date,
            seed,
        } => {
            let options = SubmitOptions {
                date,
                seed,
                task: task as usize,
                last_name,
                first_name,
                photos,
                videos,
            };
            let catalog = load_catalog(&config, &cli.config)?;
            execute_submit(options, &catalog, config.submit_delay()).await?;
        }

        Commands::Shell { date } => {
            let options = ShellOptions {
                date,
                submit_delay: config.submit_delay(),
                return_delay: config.return_delay(),
            };
            let catalog = load_catalog(&config, &cli.config)?;
            execute_shell(options, &catalog).await?;
        }
    }

    Ok(())
}

/// Catalog named by the config (resolved next to the config file) or the built-in one
fn load_catalog(config: &Config, config_path: &Path) -> anyhow::Result<ValueCatalog> {
    let base = config_path.parent().unwrap_or(Path::new("."));
    match config.load_catalog(base) {
        Ok(catalog) => Ok(catalog),
        Err(Error::Catalog(e)) => report_catalog_gap(e),
        Err(e) => Err(e).context("Failed to load value catalog"),
    }
}

fn report_catalog_gap(error: CatalogError) -> ! {
    eprintln!("{} Value catalog is unavailable: {}", style("✗").red(), error);
    eprintln!("  Fix the catalog file referenced by the config, or remove the \"catalog\" entry");
    std::process::exit(1);
}
