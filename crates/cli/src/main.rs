//! Homestead CLI - Browse, filter and favorite listings.
//!
//! # Usage
//!
//! ```bash
//! # List everything, or narrow it down
//! homestead list
//! homestead list --type sale --city "rio" --min-price 1000000
//!
//! # Inspect, share and create listings
//! homestead show 1
//! homestead share 1
//! homestead create listing.json
//!
//! # Manage favorites
//! homestead favorites add 2
//! homestead favorites list --details
//! ```
//!
//! # Environment Variables
//!
//! - `HOMESTEAD_API_URL` - Listing API root (default: <http://127.0.0.1:5000>)
//! - `HOMESTEAD_WEB_URL` - Web app root used in share links (default: <http://localhost:5173>)
//! - `HOMESTEAD_FAVORITES_PATH` - Favorites storage file (default: platform data dir)
//! - `RUST_LOG` - Log filter (default: warn)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use url::Url;

use homestead_cli::commands::{favorites, listings};
use homestead_cli::{ApiClient, CliError, JsonFileStore};
use homestead_core::{Favorites, FilterCriteria, ListingType, PropertyId};

#[derive(Parser)]
#[command(name = "homestead")]
#[command(author, version, about = "Homestead listing client")]
struct Cli {
    /// Listing API root URL
    #[arg(
        long,
        global = true,
        env = "HOMESTEAD_API_URL",
        default_value = "http://127.0.0.1:5000"
    )]
    api_url: Url,

    /// Web app root URL that share links point at
    #[arg(
        long,
        global = true,
        env = "HOMESTEAD_WEB_URL",
        default_value = "http://localhost:5173"
    )]
    web_url: Url,

    /// Favorites storage file
    #[arg(long, global = true, env = "HOMESTEAD_FAVORITES_PATH")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List listings, optionally filtered
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Print JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Show one listing in detail
    Show {
        /// Listing ID
        id: PropertyId,
    },
    /// Create a listing from a JSON file
    Create {
        /// Path to the listing JSON
        file: PathBuf,
    },
    /// Print share text and link for a listing
    Share {
        /// Listing ID
        id: PropertyId,
    },
    /// Print map markers for listings as JSON
    Markers {
        #[command(flatten)]
        filter: FilterArgs,

        /// Center the map on this listing instead of the city view
        #[arg(
            long,
            conflicts_with_all = ["listing_type", "city", "min_price", "max_price", "bedrooms"]
        )]
        id: Option<PropertyId>,
    },
    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// List favorited listings
    List {
        /// Fetch and show each favorited listing
        #[arg(long)]
        details: bool,
    },
    /// Add a listing to favorites
    Add {
        /// Listing ID
        id: PropertyId,
    },
    /// Remove a listing from favorites
    Remove {
        /// Listing ID
        id: PropertyId,
    },
    /// Add the listing if absent, remove it if present
    Toggle {
        /// Listing ID
        id: PropertyId,
    },
}

/// Search filters shared by `list` and `markers`.
#[derive(Args)]
struct FilterArgs {
    /// Restrict to listings for sale or for rent (all, sale, rent)
    #[arg(long = "type", default_value = "all")]
    listing_type: ListingType,

    /// City name fragment (case and accents ignored)
    #[arg(long)]
    city: Option<String>,

    /// Minimum price, inclusive
    #[arg(long)]
    min_price: Option<Decimal>,

    /// Maximum price, inclusive
    #[arg(long)]
    max_price: Option<Decimal>,

    /// Minimum number of bedrooms
    #[arg(long)]
    bedrooms: Option<u32>,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(args: FilterArgs) -> Self {
        Self {
            listing_type: args.listing_type,
            city: args.city,
            min_price: args.min_price,
            max_price: args.max_price,
            bedrooms: args.bedrooms,
        }
    }
}

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let store_path = match cli.store {
        Some(path) => path,
        None => JsonFileStore::default_path().ok_or(CliError::NoDataDir)?,
    };
    let mut favorites = Favorites::load(JsonFileStore::new(store_path));
    let client = ApiClient::new(cli.api_url)?;

    // Output is buffered so stdout is only locked once the requests are done.
    let mut out = Vec::new();
    let result = dispatch(cli.command, &client, &cli.web_url, &mut favorites, &mut out).await;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&out)?;
    stdout.flush()?;
    result
}

async fn dispatch(
    command: Commands,
    client: &ApiClient,
    web_url: &Url,
    saved: &mut Favorites<JsonFileStore>,
    out: &mut Vec<u8>,
) -> Result<(), CliError> {
    match command {
        Commands::List { filter, json } => {
            listings::list(client, saved, &filter.into(), json, out).await
        }
        Commands::Show { id } => listings::show(client, saved, id, out).await,
        Commands::Create { file } => listings::create(client, &file, out).await,
        Commands::Share { id } => listings::share(client, web_url, id, out).await,
        Commands::Markers { id: Some(id), .. } => listings::listing_map(client, id, out).await,
        Commands::Markers { filter, id: None } => {
            listings::markers(client, &filter.into(), out).await
        }
        Commands::Favorites { action } => match action {
            FavoritesAction::List { details: false } => favorites::list(saved, out),
            FavoritesAction::List { details: true } => {
                favorites::list_details(client, saved, out).await
            }
            FavoritesAction::Add { id } => favorites::add(saved, id, out),
            FavoritesAction::Remove { id } => favorites::remove(saved, id, out),
            FavoritesAction::Toggle { id } => favorites::toggle(saved, id, out),
        },
    }
}
