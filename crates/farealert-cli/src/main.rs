mod ingest;
mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use farealert_core::RankMode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "farealert")]
#[command(about = "Extract flight deals from fare-alert emails")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a single email whose bodies are stored in files
    Parse {
        /// Email subject line
        #[arg(long)]
        subject: String,
        /// File holding the HTML body (raw or quoted-printable)
        #[arg(long)]
        html: Option<PathBuf>,
        /// File holding the plain-text body
        #[arg(long)]
        text: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Parse a JSON array of fetched emails and print the ranked deals
    Ingest {
        /// Path to the JSON file (array of emails)
        path: PathBuf,
        /// Ordering applied to the combined deals
        #[arg(long, value_enum, default_value_t = RankArg::Discount)]
        rank: RankArg,
        /// Maximum deals to print (defaults to `FAREALERT_RANK_LIMIT`)
        #[arg(long)]
        limit: Option<usize>,
        /// Provenance label for the deals (defaults to `FAREALERT_SOURCE_LABEL`)
        #[arg(long)]
        source: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RankArg {
    /// Biggest discount first
    Discount,
    /// Cheapest first
    Price,
}

impl From<RankArg> for RankMode {
    fn from(arg: RankArg) -> Self {
        match arg {
            RankArg::Discount => RankMode::Discount,
            RankArg::Price => RankMode::Price,
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = farealert_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Parse {
            subject,
            html,
            text,
            pretty,
        }) => parse::run_parse(&config, &subject, html.as_deref(), text.as_deref(), pretty)?,
        Some(Commands::Ingest {
            path,
            rank,
            limit,
            source,
            pretty,
        }) => ingest::run_ingest(
            &config,
            &path,
            rank.into(),
            limit.unwrap_or(config.rank_limit),
            source.as_deref().unwrap_or(&config.source_label),
            pretty,
        )?,
        None => println!("no command given; run `farealert --help` for usage"),
    }

    Ok(())
}

/// Serialize `value` to stdout as JSON.
fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}
