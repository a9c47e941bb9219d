use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use convert_core::app::{CONFIG_ENV, Config, ConversionTable, LOG_ENV, Menu, ReportFormat};
use convert_core::{
    Category, ConversionRequest, DisplayConversion, Measurement, list_categories, list_units,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "convert")]
#[command(
    about = "Convert values between units of length, temperature, area, volume and weight",
    long_about = None
)]
struct Cli {
    /// TOML config file
    #[arg(long, env = CONFIG_ENV, global = true)]
    config: Option<PathBuf>,

    /// Log conversions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Interactive menu when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single value
    Convert {
        category: Category,
        from: String,
        to: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// List categories, or the units of one category
    List { category: Option<Category> },

    /// Express a value in every unit of its category
    Table {
        category: Category,
        from: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Output format (default from config, else text)
        #[arg(short, long, value_enum)]
        format: Option<ReportFormat>,
    },

    /// Menu-driven session
    Interactive,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    init_tracing(cli.verbose, &config.log_level);

    match cli.command {
        Some(Commands::Convert {
            category,
            from,
            to,
            value,
        }) => {
            let request = ConversionRequest::new(category, from, to, value);
            let result = convert_core::convert_request(&request)?;
            let source = request.source();
            println!("{}", DisplayConversion { from: &source, to: &result });
        }
        Some(Commands::List { category }) => list(category),
        Some(Commands::Table {
            category,
            from,
            value,
            format,
        }) => {
            let results = convert_core::convert_all(category, &from, value)?;
            let source = Measurement::new(value, from);
            let table = ConversionTable {
                category,
                source: &source,
                results: &results,
            };
            table.write(&mut io::stdout().lock(), format.unwrap_or(config.report.format))?;
        }
        Some(Commands::Interactive) | None => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            let completed = Menu::new(stdin, stdout, &config.menu).run()?;
            tracing::debug!(completed, "session finished");
        }
    }

    io::stdout().flush()?;
    Ok(())
}

fn list(category: Option<Category>) {
    match category {
        Some(category) => {
            for unit in list_units(category) {
                println!("{unit}");
            }
        }
        None => {
            for category in list_categories() {
                println!("{category}");
            }
        }
    }
}

/// `-v` wins, then `CONVERT_LOG`, then the config file's level
fn init_tracing(verbose: bool, config_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(config_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
