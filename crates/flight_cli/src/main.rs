mod args;
mod logging;
mod output;
mod settings;

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use flight_db::FlightData;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::info;

use crate::output::{DEFAULT_COLUMNS, OutputFormat};

#[derive(Parser)]
#[command(name = "flights")]
#[command(about = "Look up flights and delays in the flights database")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Database URL (overrides the config file)
    #[arg(long, global = true, env = "FLIGHTS_DATABASE_URL")]
    database: Option<String>,

    /// Configuration file path
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    format: OutputFormat,

    /// Comma-separated columns for table output
    #[arg(long, value_delimiter = ',', global = true)]
    columns: Vec<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a flight by its ID
    ById {
        /// Flight ID
        id: i64,
    },
    /// List flights on a date
    ByDate {
        /// Date as DD/MM/YYYY
        #[arg(value_parser = args::parse_date)]
        date: NaiveDate,
    },
    /// List delayed departures from an airport
    DelayedAirport {
        /// Three-letter IATA code of the origin airport
        #[arg(value_parser = args::parse_airport)]
        airport: String,
    },
    /// List delayed flights of an airline
    DelayedAirline {
        /// Airline name (case-insensitive)
        #[arg(value_parser = args::parse_airline)]
        airline: String,
    },
}

impl Commands {
    fn highlights_delays(&self) -> bool {
        matches!(self, Self::DelayedAirport { .. } | Self::DelayedAirline { .. })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();
    miette::set_panic_hook();
    let cli = Cli::parse();

    let _guard = logging::init(cli.debug);

    let config = settings::resolve(cli.database.clone(), cli.config.as_deref()).await?;
    let data = FlightData::open(&config)
        .await
        .wrap_err_with(|| format!("Could not open flights database at {}", config.url))?;

    let records = match &cli.command {
        Commands::ById { id } => data.get_flight_by_id(*id).await,
        Commands::ByDate { date } => {
            data.get_flights_by_date(date.day(), date.month(), date.year())
                .await
        }
        Commands::DelayedAirport { airport } => {
            data.get_delayed_flights_by_airport(airport).await
        }
        Commands::DelayedAirline { airline } => {
            data.get_delayed_flights_by_airline(airline).await
        }
    };
    info!(rows = records.len(), "lookup finished");
    data.close().await;

    let columns = if cli.columns.is_empty() {
        DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect()
    } else {
        cli.columns.clone()
    };
    output::print_records(
        &records,
        cli.format,
        &columns,
        cli.command.highlights_delays(),
    )
    .into_diagnostic()?;

    Ok(())
}
