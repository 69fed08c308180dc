//! Timeago CLI - Relative time formatting from the command line
//!
//! Provides:
//! - Formatting timestamps and dates as "3 hours ago" in any registered locale
//! - Listing the registered locales and the named styles

mod commands;
mod helpers;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use timeago_engine::{TimeAgo, DEFAULT_STYLE};
use timeago_locale::LocaleRegistry;

use commands::{cmd_format, cmd_locales, cmd_styles};

#[derive(Parser)]
#[command(name = "timeago")]
#[command(about = "Formats dates as localized relative time, e.g. \"3 hours ago\"", long_about = None)]
#[command(version)]
struct Cli {
    /// Preferred locale, most preferred first (default: from LC_ALL/LANG)
    #[arg(short, long = "locale", value_name = "TAG")]
    locales: Vec<String>,

    /// Directory with extra locale datasets (*.json)
    #[arg(long, env = "TIMEAGO_LOCALE_DIR")]
    locale_dir: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Formats timestamps (epoch milliseconds or RFC 3339) relative to now
    Format {
        /// Instants to format
        #[arg(required = true, allow_negative_numbers = true)]
        inputs: Vec<String>,

        /// Named style
        #[arg(short, long, default_value = DEFAULT_STYLE)]
        style: String,

        /// Reference instant instead of the system clock
        #[arg(long, allow_negative_numbers = true)]
        now: Option<String>,

        /// Phrase a zero duration as future ("in a moment")
        #[arg(long)]
        future: bool,

        /// Print a table with dates and refresh intervals
        #[arg(short, long)]
        table: bool,
    },

    /// Lists registered locales
    Locales,

    /// Lists named styles
    Styles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logger
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&cli.log_level)
    ).init();

    let registry = LocaleRegistry::global();
    if let Some(dir) = &cli.locale_dir {
        let count = registry
            .load_dir(dir)
            .with_context(|| format!("Failed to load locales from {:?}", dir))?;
        log::info!("Loaded {} locale(s) from {:?}", count, dir);
    }

    let preferred = helpers::preferred_locales(cli.locales);
    let timeago = TimeAgo::new(registry.clone(), &preferred);

    match cli.command {
        Commands::Format { inputs, style, now, future, table } => {
            cmd_format(&timeago, &inputs, &style, now.as_deref(), future, table)?;
        }
        Commands::Locales => {
            cmd_locales(&registry, timeago.locale())?;
        }
        Commands::Styles => {
            cmd_styles(timeago.styles())?;
        }
    }

    Ok(())
}
