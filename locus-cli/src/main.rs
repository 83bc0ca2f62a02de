//! Locus CLI
//!
//! Command-line interface for the Locus cache-aside geocoding proxy.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use locus_api::{ApiConfig, ApiServer, AppState};
use locus_cache::{CacheConfig, MemoryStore, RedisStore};
use locus_core::constants::DEFAULT_PORT;
use locus_core::traits::CacheStore;
use locus_geocode::{LookupService, NominatimClient, NominatimConfig};

/// Locus - cache-aside geocoding proxy
#[derive(Parser)]
#[command(name = "locus")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Bind address
        #[arg(short, long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Resolve a query once and print the results
    Resolve {
        /// The geocoding query
        query: String,
        /// Skip Redis and use a throwaway in-memory cache
        #[arg(long)]
        no_cache: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "locus=debug,info"
    } else {
        "locus=info,warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { port, bind } => cmd_serve(port, &bind).await,
        Commands::Resolve { query, no_cache } => cmd_resolve(&query, no_cache).await,
    }
}

/// Run the API server
async fn cmd_serve(port: u16, bind: &str) -> Result<()> {
    let config = ApiConfig::from_env().context("Failed to load configuration")?;

    let state = AppState::from_config(&config)
        .await
        .context("Failed to connect the cache store")?;

    let addr: SocketAddr = format!("{}:{}", bind, port)
        .parse()
        .with_context(|| format!("Invalid bind address: {}:{}", bind, port))?;

    println!("{}", format!("Serving on http://{}", addr).cyan().bold());

    ApiServer::new(state).run(addr).await?;
    Ok(())
}

/// Resolve a query once and print the results
async fn cmd_resolve(query: &str, no_cache: bool) -> Result<()> {
    let store: Arc<dyn CacheStore> = if no_cache {
        Arc::new(MemoryStore::new())
    } else {
        let config = CacheConfig::from_env().context("Failed to load cache configuration")?;
        Arc::new(
            RedisStore::connect(&config)
                .await
                .context("Failed to connect to Redis")?,
        )
    };

    let upstream = match std::env::var("NOMINATIM_URL").ok() {
        Some(url) => NominatimClient::with_config(NominatimConfig::new(url)),
        None => NominatimClient::new(),
    };

    let service = LookupService::new(store, upstream);
    let lookup = service.resolve(query).await?;

    let source = if lookup.from_cache {
        "cache".green()
    } else {
        "upstream".yellow()
    };
    println!(
        "{} {} result(s) from {}",
        "→".bold(),
        lookup.places.len(),
        source
    );

    for place in &lookup.places {
        println!();
        println!("{}", place.display_name.bold());
        println!("  lat/lon: {}, {}", place.lat, place.lon);
        println!("  kind:    {}/{}", place.class, place.kind);
        println!("  importance: {}", place.importance);
    }

    Ok(())
}
