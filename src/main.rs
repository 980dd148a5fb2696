//! Pokedex CLI - an interactive PokeAPI browser
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging
//! 2. Load configuration from environment variables
//! 3. Create the TTL cache (spawns the background reaper)
//! 4. Create the PokeAPI client on top of the cache
//! 5. Run the interactive command loop until exit
//! 6. Log final cache statistics and stop the reaper

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cli::{Cache, Config, PokeApiClient, Repl};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pokedex CLI");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, base_url={}",
        config.cache_ttl_secs, config.base_url
    );

    // Create the cache; the background reaper starts immediately
    let cache = Cache::new(config.cache_ttl());
    info!("Cache initialized, reaper running");

    let client = PokeApiClient::new(cache.clone(), &config.base_url);

    // Run the REPL until the user exits
    let mut repl = Repl::new(client);
    repl.run().await?;

    let stats = cache.stats().await;
    info!(
        "Cache stats at exit: hits={}, misses={}, reaped={}, hit_rate={:.2}",
        stats.hits,
        stats.misses,
        stats.reaped,
        stats.hit_rate()
    );

    cache.shutdown();
    info!("Shutdown complete");

    Ok(())
}
