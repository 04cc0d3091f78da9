use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

mod cities;
mod client;
mod config;
mod error;
mod models;
mod mood;
mod render;


use crate::client::WeatherClient;
use crate::config::load_config;
use crate::mood::{MoodMapper, PlaylistTable};
use crate::render::{ErrorReport, Report, not_found_message};

#[derive(Parser)]
#[command(name = "skybeat")]
#[command(about = "Song recommendations for the current weather of a city")]
#[command(version)]
struct Args {
    /// City to look up; prompts with a destination menu when omitted
    #[arg(short = 'c', long = "city")]
    city: Option<String>,

    /// Print the curated destination list and exit
    #[arg(short = 'l', long = "list-cities")]
    list_cities: bool,

    /// Path to a playlist table JSON file replacing the builtin songs
    #[arg(short = 't', long = "table")]
    table_file: Option<String>,

    /// Seed for the song selection, for reproducible picks
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Print the result as JSON. Failures print an object with an "error" field;
    /// an unknown city still exits successfully.
    #[arg(long = "json")]
    json: bool,

    /// Quiet mode - reduce output verbosity
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.list_cities {
        println!("{}", cities::menu());
        return Ok(());
    }

    let table = match &args.table_file {
        Some(path) => {
            let table = PlaylistTable::load_from_file(path).map_err(|e| {
                anyhow::anyhow!("Failed to load playlist table '{}': {}", path, e)
            })?;
            tracing::info!(path = %path, conditions = table.keys().count(), "loaded playlist table");
            table
        }
        None => PlaylistTable::builtin(),
    };

    let config = load_config();
    let client = WeatherClient::new(&config);
    let mapper = MoodMapper::new(&table);

    if !args.quiet && !args.json {
        println!("SKYBEAT · Weather Based Audio Experience");
        println!("---");
    }

    let city = match args.city {
        Some(city) => Some(city),
        None => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            cities::prompt_city(&mut stdin.lock(), &mut stdout)?
        }
    };

    let city = match cities::chosen_city(city) {
        Some(city) => city,
        None => {
            println!("Please select or enter a city name.");
            return Ok(());
        }
    };

    if !args.quiet && !args.json {
        println!("Accessing satellite data for {city}...");
    }

    let observation = match client.fetch(&city) {
        Ok(Some(observation)) => observation,
        Ok(None) => {
            if args.json {
                println!("{}", ErrorReport::not_found(&city).to_json()?);
            } else {
                eprintln!("{}", not_found_message(&city));
            }
            return Ok(());
        }
        Err(e) => {
            if args.json {
                println!("{}", ErrorReport::configuration(&city, e.to_string()).to_json()?);
            } else {
                eprintln!("{e}");
            }
            return Err(e.into());
        }
    };

    let recommendation = match args.seed {
        Some(seed) => mapper.recommend(&observation.condition, &mut StdRng::seed_from_u64(seed)),
        None => mapper.recommend(&observation.condition, &mut rand::thread_rng()),
    };

    let report = Report::new(&city, &observation, recommendation);
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.to_text());
    }

    Ok(())
}
