use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use art_catalog::apis::{CollectingReporter, CraftsAdapter, DancesAdapter, PaintingsAdapter, SourceAdapter};
use art_catalog::config::Config;
use art_catalog::domain::RecordKey;
use art_catalog::geo;
use art_catalog::observability::init_logging;
use art_catalog::pipeline::{CatalogFilter, Catalogue, Normalizer, Pipeline};
use art_catalog::store::{CachedStore, InMemoryStore, SnowflakeStore, TabularStore};
use art_catalog::view::{self, DetailOutcome, FilterOptions, MapOutcome};

#[derive(Parser)]
#[command(name = "art-catalog")]
#[command(about = "Browse India's traditional art forms from seed records and Snowflake tables")]
#[command(version)]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    /// Answer queries from a JSON fixture instead of Snowflake
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List art forms, optionally filtered
    List {
        /// Exact region, or "All"
        #[arg(long)]
        region: Option<String>,
        /// Exact category, or "All"
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive text matched against name and description
        #[arg(long)]
        search: Option<String>,
    },
    /// Show the details of one art form
    Show {
        name: String,
        /// Disambiguates records sharing a name
        #[arg(long)]
        region: Option<String>,
    },
    /// Print the region and category filter choices
    Options,
    /// Print the regions with known coordinates
    Regions,
}

/// Prime an in-memory store with the fixture's table for each source.
/// Sources absent from the fixture fail like an unreachable table.
fn fixture_store(path: &Path) -> anyhow::Result<InMemoryStore> {
    let fixture = InMemoryStore::load_fixture(path)?;
    let store = InMemoryStore::new();

    let sources: [(&str, &str); 3] = [
        (PaintingsAdapter.source_id(), PaintingsAdapter.query()),
        (DancesAdapter.source_id(), DancesAdapter.query()),
        (CraftsAdapter.source_id(), CraftsAdapter.query()),
    ];
    for (source_id, query) in sources {
        match fixture.tables.get(source_id) {
            Some(table) => store.insert(query, table.clone()),
            None => store.insert_failure(query, &format!("fixture has no '{}' table", source_id)),
        }
    }
    Ok(store)
}

fn build_store(cli: &Cli, config: &Config) -> anyhow::Result<Box<dyn TabularStore>> {
    let ttl = config.cache.ttl();
    match &cli.fixture {
        Some(path) => {
            info!("Using fixture {}", path.display());
            Ok(Box::new(CachedStore::new(fixture_store(path)?, ttl)))
        }
        None => {
            let token = config.store_token()?;
            if token.is_none() {
                warn!("{} is not set; remote sources will be unavailable", config.store.token_env);
            }
            let store = SnowflakeStore::new(config.store.clone(), token)?;
            Ok(Box::new(CachedStore::new(store, ttl)))
        }
    }
}

async fn load_catalogue(cli: &Cli, config: &Config) -> anyhow::Result<Catalogue> {
    let store = build_store(cli, config)?;
    let reporter = CollectingReporter::new();
    let normalizer = Normalizer::new(config.image_overrides());

    let result = Pipeline::new(store.as_ref(), &reporter, normalizer)
        .build_catalogue()
        .await;

    for failure in reporter.failures() {
        eprintln!("⚠️  Could not load {} data: {}", failure.source_id, failure.message);
    }
    Ok(result.catalogue)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_list(catalogue: &Catalogue, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(&catalogue.records());
    }
    if catalogue.is_empty() {
        println!("No art forms match your filters. Try adjusting your criteria.");
        return Ok(());
    }
    for card in view::cards(catalogue) {
        println!("{} [{}]", card.title, card.gi_label);
        println!("   {}", card.subtitle);
        println!("   {}", card.description);
    }
    println!("\n{} art forms", catalogue.len());
    Ok(())
}

fn print_detail(outcome: DetailOutcome, json: bool) -> anyhow::Result<()> {
    match outcome {
        DetailOutcome::NoSelection => {}
        DetailOutcome::DataUnavailable(key) => {
            println!("Art forms data is not available. Cannot display details for '{}'.", key);
        }
        DetailOutcome::NotFound(key) => {
            println!("Details for '{}' could not be found in the current dataset.", key);
        }
        DetailOutcome::Found(detail) if json => print_json(&detail)?,
        DetailOutcome::Found(detail) => {
            println!("{} [{}]", detail.name, detail.gi_label);
            println!("{}", detail.image_caption);
            println!("Image: {}\n", detail.image_url);
            println!("{}\n", detail.description);
            println!("Origin:      {}", detail.origin);
            println!("Art type:    {}", detail.category);
            println!("Scheme:      {}", detail.scheme_name);
            println!("Allocation:  {}", detail.scheme_allocation);
            println!("Cooperative: {}\n", detail.cooperative_name);
            println!("{}\n", detail.data_story);
            match &detail.map {
                MapOutcome::Pin(pin) => println!(
                    "Where to find: {:.4}, {:.4} (zoom {}, {} km radius)",
                    pin.latitude,
                    pin.longitude,
                    pin.zoom,
                    pin.radius_m / 1000
                ),
                MapOutcome::Unavailable => println!(
                    "Location data (latitude/longitude) is not available for '{}' to display on the map.",
                    detail.name
                ),
                MapOutcome::InvalidCoordinate => println!(
                    "Map could not be displayed for '{}' due to invalid coordinates.",
                    detail.name
                ),
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Regions => {
            let regions = geo::known_regions();
            if cli.json {
                return print_json(&regions);
            }
            for region in regions {
                println!("{}", region);
            }
            return Ok(());
        }
        Commands::List { .. } | Commands::Show { .. } | Commands::Options => {}
    }

    let config = Config::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let catalogue = load_catalogue(&cli, &config).await?;

    match &cli.command {
        Commands::List {
            region,
            category,
            search,
        } => {
            let filter = CatalogFilter::new(region.as_deref(), category.as_deref(), search.as_deref());
            print_list(&filter.apply(&catalogue), cli.json)?;
        }
        Commands::Show { name, region } => {
            // Without --region the first record of that name is shown
            let key = match region {
                Some(region) => RecordKey::new(name.clone(), Some(region.clone())),
                None => catalogue
                    .find_by_name(name)
                    .map(|record| record.key())
                    .unwrap_or_else(|| RecordKey::new(name.clone(), None)),
            };
            print_detail(view::detail(&catalogue, Some(&key)), cli.json)?;
        }
        Commands::Options => {
            let options = FilterOptions::from_catalogue(&catalogue);
            if cli.json {
                print_json(&options)?;
            } else {
                println!("Regions:    {}", options.regions.join(", "));
                println!("Categories: {}", options.categories.join(", "));
            }
        }
        Commands::Regions => {}
    }

    Ok(())
}
