use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use seatmap::category::classify_into_categories_with;
use seatmap::config::{ConfigError, MapConfig};
use seatmap::geometry::FixedGeometry;
use seatmap::label::compute_labels;
use seatmap::picks::{SequentialIds, UuidIds, pick_seats};
use seatmap::sanitize::sanitize;
use seatmap::tier::{Tier, classify_sections};
use seatmap::{Section, parse, serialize_with_report};
use serde::Serialize;
use tracing_subscriber::EnvFilter;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid JSON in {path}: {source}")]
    Json { path: String, source: serde_json::Error },
    #[error("output encoding failed: {0}")]
    Output(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("venue map {0} is not a parseable SVG document")]
    Unavailable(String),
    #[error("no section {section} in {map}")]
    UnknownSection { map: String, section: String },
}

#[derive(Parser, Debug)]
#[command(name = "seatmap", about = "Inspect and edit venue seat maps")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the sections of a map as JSON.
    Parse {
        #[arg(help = "Map file path, or - for stdin")]
        map: String,
    },
    /// Apply section edits (a JSON array of sections) and print the new markup.
    Edit {
        #[arg(help = "Map file path, or - for stdin")]
        map: String,
        #[arg(long)]
        edits: PathBuf,
    },
    /// Print display-ready markup.
    Sanitize {
        #[arg(help = "Map file path, or - for stdin")]
        map: String,
    },
    /// Print the price-ranked purchase categories.
    Categories {
        #[arg(help = "Map file path, or - for stdin")]
        map: String,
    },
    /// Print the price tier of every section.
    Tiers {
        #[arg(help = "Map file path, or - for stdin")]
        map: String,
    },
    /// Place labels using measured boxes (a JSON object of id → {x, y, width, height}).
    Labels {
        #[arg(help = "Map file path, or - for stdin")]
        map: String,
        #[arg(long)]
        boxes: PathBuf,
    },
    /// Pick seats in one section.
    Picks {
        #[arg(help = "Map file path, or - for stdin")]
        map: String,
        section: String,
        #[arg(long, default_value_t = 2)]
        quantity: usize,
        #[arg(long, env = "SEATMAP_SEED", help = "Seed for reproducible picks and ticket ids")]
        seed: Option<u64>,
    },
}

#[derive(Serialize)]
struct SectionTier {
    id: String,
    tier: Tier,
    class: &'static str,
}

fn main() -> Result<(), CliError> {
    let (filter, dotenv) = startup_filter(dotenvy::dotenv);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    if let Some(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let cli = Cli::parse();
    let config = MapConfig::from_env()?;

    match cli.command {
        Command::Parse { map } => print_json(&parse(&read_input(&map)?)),
        Command::Edit { map, edits } => run_edit(&map, &edits),
        Command::Sanitize { map } => {
            let display = sanitize(&read_input(&map)?).ok_or(CliError::Unavailable(map))?;
            println!("{display}");
            Ok(())
        }
        Command::Categories { map } => {
            let sections = parse(&read_input(&map)?);
            print_json(&classify_into_categories_with(&sections, &config.categories))
        }
        Command::Tiers { map } => {
            let sections = parse(&read_input(&map)?);
            let tiers: Vec<SectionTier> = classify_sections(&sections)
                .into_iter()
                .map(|(id, tier)| SectionTier { id, tier, class: tier.css_class() })
                .collect();
            print_json(&tiers)
        }
        Command::Labels { map, boxes } => {
            let sections = parse(&read_input(&map)?);
            let geometry: FixedGeometry = read_json(&boxes)?;
            print_json(&compute_labels(&sections, &geometry, &config.labels))
        }
        Command::Picks { map, section, quantity, seed } => run_picks(&map, &section, quantity, seed),
    }
}

/// Load `.env` first so a `RUST_LOG` set there reaches the log filter.
/// The load error is handed back for logging once tracing is up.
fn startup_filter<F>(load_env: F) -> (EnvFilter, Option<dotenvy::Error>)
where
    F: FnOnce() -> dotenvy::Result<PathBuf>,
{
    let loaded = match load_env() {
        Ok(_) => None,
        Err(e) => Some(e),
    };
    (EnvFilter::from_default_env(), loaded)
}

fn run_edit(map: &str, edits_path: &Path) -> Result<(), CliError> {
    let markup = read_input(map)?;
    let edits: Vec<Section> = read_json(edits_path)?;
    let report = serialize_with_report(&markup, &edits);
    for id in &report.skipped {
        tracing::warn!(section_id = %id, "edit skipped: no such section in map");
    }
    tracing::info!(applied = report.applied.len(), skipped = report.skipped.len(), "edits applied");
    print!("{}", report.markup);
    Ok(())
}

fn run_picks(map: &str, section_id: &str, quantity: usize, seed: Option<u64>) -> Result<(), CliError> {
    let sections = parse(&read_input(map)?);
    let section = sections
        .iter()
        .find(|s| s.id == section_id)
        .ok_or_else(|| CliError::UnknownSection { map: map.to_owned(), section: section_id.to_owned() })?;

    let picks = match seed {
        Some(seed) => pick_seats(section, quantity, &mut StdRng::seed_from_u64(seed), &mut SequentialIds::starting_at(1)),
        None => pick_seats(section, quantity, &mut rand::rng(), &mut UuidIds),
    };
    print_json(&picks)
}

fn read_input(path: &str) -> Result<String, CliError> {
    let result = if path == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        fs::read_to_string(path)
    };
    result.map_err(|source| CliError::Read { path: path.to_owned(), source })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read { path: display.clone(), source })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Json { path: display, source })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
